//! 空间命中测试：像素 → 网格 → 区域 / 列 / 机柜
//!
//! 纯几何计算，不修改任何状态。鼠标点击与悬停提示共用同一套规则。

use crate::services::FacilityModel;
use crate::types::{Rack, Selection, Zone};
use crate::utils::geometry::{
    canvas_to_grid, grid_to_canvas, in_rack_band, zone_band, zone_bounds, Point, RACK_HIT_SLOP,
    RACK_RADIUS,
};

/// 距离指针最近、且在 `RACK_RADIUS + 2` 以内的机柜
pub fn rack_at(racks: &[Rack], p: Point) -> Option<&Rack> {
    let limit = RACK_RADIUS + RACK_HIT_SLOP;
    racks
        .iter()
        .map(|rack| (rack, grid_to_canvas(rack.x, rack.y).distance(p)))
        .filter(|(_, distance)| *distance <= limit)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(rack, _)| rack)
}

/// 指针所在的列（仅当指针位于机柜带 `[3, 14]` 行内）
///
/// 与该列是否有机柜无关。
pub fn column_at(p: Point) -> Option<i32> {
    let (grid_x, grid_y) = canvas_to_grid(p);
    in_rack_band(grid_y).then_some(grid_x)
}

/// 指针所在的区域
///
/// 先按扣除间隙后的矩形匹配（首个区域不扣左侧间隙，末尾区域不扣右侧间隙）；
/// 落在两个矩形之间间隙里的点归属于名义范围包含它的那个区域，
/// 因此区域行范围内的每个点恰好对应一个区域。
pub fn zone_at(zones: &[Zone], p: Point) -> Option<&Zone> {
    let count = zones.len();
    zones
        .iter()
        .enumerate()
        .find(|(index, zone)| zone_bounds(zone, *index, count).contains(p))
        .or_else(|| {
            zones
                .iter()
                .enumerate()
                .find(|(_, zone)| zone_band(zone).contains(p))
        })
        .map(|(_, zone)| zone)
}

/// 点击命中：机柜 > 列 > 区域 > 无
pub fn hit_test(facility: &FacilityModel, p: Point) -> Selection {
    if let Some(rack) = rack_at(facility.racks(), p) {
        return Selection::Rack(rack.id.clone());
    }

    if let Some(column) = column_at(p) {
        return Selection::Column(column);
    }

    if let Some(zone) = zone_at(facility.zones(), p) {
        return Selection::Zone(zone.id.clone());
    }

    Selection::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::standard_facility;
    use crate::utils::geometry::GRID_SIZE;

    #[test]
    fn rack_hit_includes_slop() {
        let facility = standard_facility();
        let centre = grid_to_canvas(0, 3);
        let edge = Point::new(centre.x + 5.0, centre.y);
        let outside = Point::new(centre.x + 5.5, centre.y);

        assert_eq!(rack_at(facility.racks(), edge).map(|r| r.id.as_str()), Some("eda-0-0"));
        assert!(rack_at(facility.racks(), outside).is_none());
    }

    #[test]
    fn column_band_ignores_occupancy() {
        assert_eq!(column_at(Point::new(21.0 * GRID_SIZE + 4.0, 4.0 * GRID_SIZE)), Some(21));
        assert_eq!(column_at(Point::new(40.0, 2.0 * GRID_SIZE)), None);
        assert_eq!(column_at(Point::new(40.0, 15.0 * GRID_SIZE)), None);
    }

    #[test]
    fn click_priority_rack_then_column() {
        let facility = standard_facility();
        assert_eq!(
            hit_test(&facility, grid_to_canvas(4, 5)),
            Selection::Rack("eda-4-2".into())
        );
        // 同一格子但远离机柜中心 → 列
        let off_centre = Point::new(4.0 * GRID_SIZE + 2.0, 5.0 * GRID_SIZE + 2.0);
        assert_eq!(hit_test(&facility, off_centre), Selection::Column(4));
    }

    #[test]
    fn click_on_mda() {
        let facility = standard_facility();
        assert_eq!(
            hit_test(&facility, grid_to_canvas(9, 1)),
            Selection::Rack("mda-1".into())
        );
    }

    #[test]
    fn click_on_empty_space_deselects() {
        let facility = standard_facility();
        assert_eq!(hit_test(&facility, Point::new(5.0, 5.0)), Selection::None);
        assert_eq!(hit_test(&facility, Point::new(600.0, 520.0)), Selection::None);
    }

    #[test]
    fn zone_rectangles_follow_gap_rule() {
        let facility = standard_facility();
        let zones = facility.zones();
        let y = 5.0 * GRID_SIZE;

        assert_eq!(zone_at(zones, Point::new(0.0, y)).map(|z| z.id.as_str()), Some("zone-1"));
        assert_eq!(zone_at(zones, Point::new(200.0, y)).map(|z| z.id.as_str()), Some("zone-2"));
        // 末尾区域不扣右侧间隙，延伸到 584px
        assert_eq!(zone_at(zones, Point::new(580.0, y)).map(|z| z.id.as_str()), Some("zone-3"));
        assert!(zone_at(zones, Point::new(590.0, y)).is_none());
        assert!(zone_at(zones, Point::new(100.0, 2.0 * GRID_SIZE)).is_none());
    }

    #[test]
    fn zone_gap_resolves_to_nominal_owner() {
        let facility = standard_facility();
        let zones = facility.zones();
        let y = 5.0 * GRID_SIZE;

        // zone-1 的矩形止于 176px，zone-2 的矩形始于 200px
        assert_eq!(zone_at(zones, Point::new(180.0, y)).map(|z| z.id.as_str()), Some("zone-1"));
        assert_eq!(zone_at(zones, Point::new(195.0, y)).map(|z| z.id.as_str()), Some("zone-2"));
    }
}
