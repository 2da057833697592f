//! 悬停提示
//!
//! 优先级与点击相同（机柜 > 列），但不参与选择状态。

use crate::services::hit_test::{column_at, rack_at};
use crate::services::FacilityModel;
use crate::utils::geometry::Point;

/// 悬停目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverTarget {
    /// 机柜（机柜 ID）
    Rack(String),
    /// 列（列序号）
    Column(i32),
}

/// 悬停提示
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// 指针位置（逻辑像素）
    pub anchor: Point,
    /// 悬停目标
    pub target: HoverTarget,
    /// 提示内容（逐行）
    pub lines: Vec<String>,
}

impl Tooltip {
    /// 多行内容合并为单个字符串
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}

/// 计算指针处的提示；既不在机柜上也不在机柜带内时返回 `None`
pub fn tooltip_at(facility: &FacilityModel, p: Point) -> Option<Tooltip> {
    if let Some(rack) = rack_at(facility.racks(), p) {
        let mut lines = vec![format!("Rack {}", rack.id)];
        if let (Some(power), Some(temp)) = (rack.power_draw, rack.temperature) {
            lines.push(format!("Power: {power:.1} kW"));
            lines.push(format!("Temp: {temp:.1}°F"));
        }
        return Some(Tooltip {
            anchor: p,
            target: HoverTarget::Rack(rack.id.clone()),
            lines,
        });
    }

    column_at(p).map(|column| Tooltip {
        anchor: p,
        target: HoverTarget::Column(column),
        lines: vec![format!("Column {}", column + 1)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::standard_facility;
    use crate::utils::geometry::{grid_to_canvas, GRID_SIZE};

    #[test]
    fn rack_tooltip_shows_metrics() {
        let facility = standard_facility();
        let rack = facility.find_rack("eda-2-4").unwrap();
        let tip = tooltip_at(&facility, grid_to_canvas(rack.x, rack.y)).unwrap();

        assert_eq!(tip.target, HoverTarget::Rack("eda-2-4".into()));
        assert_eq!(tip.lines[0], "Rack eda-2-4");
        assert_eq!(
            tip.lines[1],
            format!("Power: {:.1} kW", rack.power_draw.unwrap())
        );
        assert!(tip.lines[2].ends_with("°F"));
    }

    #[test]
    fn mda_tooltip_has_only_id() {
        let facility = standard_facility();
        let tip = tooltip_at(&facility, grid_to_canvas(9, 1)).unwrap();
        assert_eq!(tip.lines, vec!["Rack mda-1".to_string()]);
    }

    #[test]
    fn offline_rack_reports_zeroes() {
        let facility = standard_facility();
        let rack = facility.find_rack("eda-5-6").unwrap();
        let tip = tooltip_at(&facility, grid_to_canvas(rack.x, rack.y)).unwrap();
        assert_eq!(tip.content(), "Rack eda-5-6\nPower: 0.0 kW\nTemp: 0.0°F");
    }

    #[test]
    fn column_tooltip_is_one_based() {
        let facility = standard_facility();
        let p = Point::new(3.0 * GRID_SIZE + 1.0, 10.0 * GRID_SIZE + 1.0);
        let tip = tooltip_at(&facility, p).unwrap();
        assert_eq!(tip.target, HoverTarget::Column(3));
        assert_eq!(tip.lines, vec!["Column 4".to_string()]);
    }

    #[test]
    fn outside_band_has_no_tooltip() {
        let facility = standard_facility();
        assert!(tooltip_at(&facility, Point::new(100.0, 20.0)).is_none());
    }
}
