//! 布局渲染器
//!
//! `(facility, selection)` → 绘图指令列表的纯函数，指令随后回放到任意 [`Surface`] 上。
//!
//! 绘制顺序（后绘制的覆盖先绘制的）：
//!
//! ```text
//! 区域填充 + 虚线边框 + 标签
//!   → 列高亮（仅选中列时）
//!   → 背景网格线
//!   → 连接线（MDA 出发的走正交路径）
//!   → 机柜（状态环 + 状态点）
//!   → MDA 标签
//! ```

use crate::services::FacilityModel;
use crate::traits::Surface;
use crate::types::{ConnectionType, Dash, DrawCommand, Rack, RackType, Rgba, Selection};
use crate::utils::geometry::{
    grid_to_canvas, zone_bounds, LogicalRect, Point, CANVAS_HEIGHT, CANVAS_WIDTH, GRID_SIZE,
    RACK_HIT_SLOP, RACK_RADIUS, RACK_ROW_MIN,
};

/// 调色板
pub mod palette {
    use crate::types::Rgba;

    /// 主色（青）
    pub const CYAN: Rgba = Rgba::rgb(0x00, 0xf0, 0xff);
    /// 选中 / MDA（绿）
    pub const GREEN: Rgba = Rgba::rgb(0x00, 0xff, 0x9f);
    /// 离线（红）
    pub const RED: Rgba = Rgba::rgb(0xff, 0x00, 0x00);
    /// 维护中 / 铜缆（橙）
    pub const AMBER: Rgba = Rgba::rgb(0xff, 0x9f, 0x00);
    /// 默认机柜点
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    /// 网格线
    pub const GRID: Rgba = Rgba::rgb(0x1a, 0x1a, 0x1a);

    pub const ZONE_FILL: Rgba = Rgba::translucent(0x00, 0xf0, 0xff, 0.05);
    pub const ZONE_FILL_SELECTED: Rgba = Rgba::translucent(0x00, 0xf0, 0xff, 0.15);
    pub const ZONE_BORDER: Rgba = Rgba::translucent(0x00, 0xf0, 0xff, 0.3);
    pub const COLUMN_OVERLAY: Rgba = Rgba::translucent(0x00, 0xf0, 0xff, 0.1);
}

/// 区域边框虚线
pub const ZONE_DASH: Dash = Dash::new(4.0, 4.0);

/// 列高亮覆盖的行数
const COLUMN_OVERLAY_ROWS: i32 = 12;

/// 一帧的绘图指令
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// 按顺序回放到绘图表面；表面不可用时不做任何事
    pub fn replay(&self, surface: &mut dyn Surface) {
        if !surface.is_available() {
            return;
        }
        for command in &self.commands {
            surface.execute(command);
        }
    }
}

/// 生成一帧绘图指令
pub fn render(facility: &FacilityModel, selection: &Selection) -> DrawList {
    let mut list = DrawList::new();

    draw_zones(&mut list, facility, selection);
    if let Selection::Column(column) = selection {
        draw_column_overlay(&mut list, *column);
    }
    draw_grid(&mut list);
    draw_connections(&mut list, facility);
    draw_racks(&mut list, facility, selection);

    list
}

/// 渲染并回放；表面不可用时为空操作
pub fn paint(surface: &mut dyn Surface, facility: &FacilityModel, selection: &Selection) {
    if !surface.is_available() {
        log::trace!("Surface unavailable, skipping paint");
        return;
    }
    render(facility, selection).replay(surface);
}

fn draw_zones(list: &mut DrawList, facility: &FacilityModel, selection: &Selection) {
    let zones = facility.zones();
    for (index, zone) in zones.iter().enumerate() {
        let rect = zone_bounds(zone, index, zones.len());
        let selected = selection.is_zone(&zone.id);

        list.push(DrawCommand::FillRect {
            rect,
            color: if selected {
                palette::ZONE_FILL_SELECTED
            } else {
                palette::ZONE_FILL
            },
        });
        list.push(DrawCommand::StrokeRect {
            rect,
            color: if selected {
                palette::CYAN
            } else {
                palette::ZONE_BORDER
            },
            dash: Some(ZONE_DASH),
        });
        list.push(DrawCommand::Text {
            at: Point::new(rect.x + 8.0, rect.y - 4.0),
            text: zone.name.clone(),
            color: palette::CYAN,
        });
    }
}

fn draw_column_overlay(list: &mut DrawList, column: i32) {
    list.push(DrawCommand::FillRect {
        rect: LogicalRect::new(
            f64::from(column) * GRID_SIZE,
            f64::from(RACK_ROW_MIN) * GRID_SIZE,
            GRID_SIZE,
            f64::from(COLUMN_OVERLAY_ROWS) * GRID_SIZE,
        ),
        color: palette::COLUMN_OVERLAY,
    });
}

fn draw_grid(list: &mut DrawList) {
    let mut x = 0.0;
    while x < CANVAS_WIDTH {
        list.push(DrawCommand::Path {
            points: vec![Point::new(x, 0.0), Point::new(x, CANVAS_HEIGHT)],
            color: palette::GRID,
            dash: None,
        });
        x += GRID_SIZE;
    }

    let mut y = 0.0;
    while y < CANVAS_HEIGHT {
        list.push(DrawCommand::Path {
            points: vec![Point::new(0.0, y), Point::new(CANVAS_WIDTH, y)],
            color: palette::GRID,
            dash: None,
        });
        y += GRID_SIZE;
    }
}

fn draw_connections(list: &mut DrawList, facility: &FacilityModel) {
    for connection in facility.connections() {
        let (Some(from), Some(to)) = (
            facility.find_rack(&connection.from),
            facility.find_rack(&connection.to),
        ) else {
            continue;
        };

        let a = grid_to_canvas(from.x, from.y);
        let b = grid_to_canvas(to.x, to.y);
        let points = if from.is_mda() {
            // 先向下一格走到主干道，再横向，最后进入目标机柜
            let trunk = a.y + GRID_SIZE;
            vec![a, Point::new(a.x, trunk), Point::new(b.x, trunk), b]
        } else {
            vec![a, b]
        };

        list.push(DrawCommand::Path {
            points,
            color: match connection.connection_type {
                ConnectionType::Fiber => palette::CYAN,
                ConnectionType::Copper => palette::AMBER,
            },
            dash: None,
        });
    }
}

fn draw_racks(list: &mut DrawList, facility: &FacilityModel, selection: &Selection) {
    for rack in facility.racks() {
        let center = grid_to_canvas(rack.x, rack.y);
        let selected = selection.is_rack(&rack.id);

        list.push(DrawCommand::StrokeCircle {
            center,
            radius: RACK_RADIUS + RACK_HIT_SLOP,
            color: ring_color(rack, selected),
        });
        list.push(DrawCommand::FillCircle {
            center,
            radius: RACK_RADIUS,
            color: dot_color(rack, selected),
        });
    }

    // MDA 标签压在所有机柜之上
    for rack in facility.racks().iter().filter(|r| r.rack_type == RackType::Mda) {
        let center = grid_to_canvas(rack.x, rack.y);
        list.push(DrawCommand::Text {
            at: Point::new(center.x - 15.0, center.y - 8.0),
            text: "MDA".to_string(),
            color: palette::GREEN,
        });
    }
}

/// 状态环颜色：选中 > 离线 > 在线 > 其他（维护中）
pub fn ring_color(rack: &Rack, selected: bool) -> Rgba {
    if selected {
        palette::GREEN
    } else if rack.is_offline() {
        palette::RED
    } else if rack.is_active() {
        palette::CYAN
    } else {
        palette::AMBER
    }
}

/// 状态点颜色：MDA 恒为绿色，其余按 选中 > 离线 > 默认
pub fn dot_color(rack: &Rack, selected: bool) -> Rgba {
    if rack.is_mda() || selected {
        palette::GREEN
    } else if rack.is_offline() {
        palette::RED
    } else {
        palette::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{connected_facility, small_facility};
    use crate::traits::RecordingSurface;

    fn fill_circle_color(list: &DrawList, at: Point) -> Option<Rgba> {
        list.commands().iter().find_map(|c| match c {
            DrawCommand::FillCircle { center, color, .. } if *center == at => Some(*color),
            _ => None,
        })
    }

    fn ring_color_at(list: &DrawList, at: Point) -> Option<Rgba> {
        list.commands().iter().find_map(|c| match c {
            DrawCommand::StrokeCircle { center, color, .. } if *center == at => Some(*color),
            _ => None,
        })
    }

    #[test]
    fn zones_come_first_with_dashed_borders() {
        let facility = small_facility();
        let list = render(&facility, &Selection::None);

        assert!(matches!(list.commands()[0], DrawCommand::FillRect { color, .. } if color == palette::ZONE_FILL));
        assert!(matches!(
            list.commands()[1],
            DrawCommand::StrokeRect { dash: Some(d), .. } if d == ZONE_DASH
        ));
        match &list.commands()[2] {
            DrawCommand::Text { at, text, .. } => {
                assert_eq!(text, &facility.zones()[0].name);
                assert_eq!(*at, Point::new(8.0, 3.0 * GRID_SIZE - 4.0));
            }
            other => panic!("expected zone label, got {other:?}"),
        }
    }

    #[test]
    fn selected_zone_is_brighter() {
        let facility = small_facility();
        let list = render(&facility, &Selection::Zone("zone-2".into()));
        // 每个区域 3 条指令，zone-2 从下标 3 开始
        assert!(matches!(
            list.commands()[3],
            DrawCommand::FillRect { color, .. } if color == palette::ZONE_FILL_SELECTED
        ));
        assert!(matches!(
            list.commands()[4],
            DrawCommand::StrokeRect { color, .. } if color == palette::CYAN
        ));
    }

    #[test]
    fn column_overlay_only_when_column_selected() {
        let facility = small_facility();
        let overlay = |list: &DrawList| {
            list.commands().iter().any(|c| {
                matches!(c, DrawCommand::FillRect { color, .. } if *color == palette::COLUMN_OVERLAY)
            })
        };

        assert!(!overlay(&render(&facility, &Selection::None)));

        let list = render(&facility, &Selection::Column(4));
        assert!(overlay(&list));
        assert_eq!(
            list.commands()[9],
            DrawCommand::FillRect {
                rect: LogicalRect::new(128.0, 96.0, 32.0, 384.0),
                color: palette::COLUMN_OVERLAY,
            }
        );
    }

    #[test]
    fn grid_covers_canvas() {
        let facility = small_facility();
        let grid_lines = render(&facility, &Selection::None)
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Path { color, .. } if *color == palette::GRID))
            .count();
        // 0..720 步长 32 → 23 条竖线；0..540 → 17 条横线
        assert_eq!(grid_lines, 23 + 17);
    }

    #[test]
    fn mda_connections_are_orthogonal() {
        let facility = connected_facility();
        let mda = grid_to_canvas(9, 1);
        let list = render(&facility, &Selection::None);

        let fibers: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Path { points, color, .. } if *color == palette::CYAN => Some(points),
                _ => None,
            })
            .collect();

        assert_eq!(fibers.len(), facility.connections().len());
        for points in fibers {
            assert_eq!(points.len(), 4);
            assert_eq!(points[0], mda);
            assert_eq!(points[1], Point::new(mda.x, mda.y + GRID_SIZE));
            assert_eq!(points[2].y, mda.y + GRID_SIZE);
            assert_eq!(points[3].x, points[2].x);
        }
    }

    #[test]
    fn rack_colors_follow_status() {
        let facility = small_facility();
        let active = grid_to_canvas(0, 3);
        let maintenance = grid_to_canvas(1, 3);
        let mda = grid_to_canvas(9, 1);

        let list = render(&facility, &Selection::None);
        assert_eq!(ring_color_at(&list, active), Some(palette::CYAN));
        assert_eq!(ring_color_at(&list, maintenance), Some(palette::AMBER));
        assert_eq!(fill_circle_color(&list, active), Some(palette::WHITE));
        assert_eq!(fill_circle_color(&list, mda), Some(palette::GREEN));

        let list = render(&facility, &Selection::Rack("eda-1-0".into()));
        assert_eq!(ring_color_at(&list, maintenance), Some(palette::GREEN));
        assert_eq!(fill_circle_color(&list, maintenance), Some(palette::GREEN));
    }

    #[test]
    fn offline_rack_is_red() {
        let facility = crate::test_utils::standard_facility();
        let rack = facility.find_rack("eda-5-6").unwrap();
        assert_eq!(ring_color(rack, false), palette::RED);
        assert_eq!(dot_color(rack, false), palette::RED);
        assert_eq!(ring_color(rack, true), palette::GREEN);
    }

    #[test]
    fn mda_label_is_offset_from_dot() {
        let facility = small_facility();
        let list = render(&facility, &Selection::None);
        let mda = grid_to_canvas(9, 1);
        let labels: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { at, text, .. } if text == "MDA" => Some(*at),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec![Point::new(mda.x - 15.0, mda.y - 8.0)]);
    }

    #[test]
    fn mda_label_drawn_after_every_rack() {
        let facility = connected_facility();
        let list = render(&facility, &Selection::None);
        let commands = list.commands();

        let label = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Text { text, .. } if text == "MDA"))
            .unwrap();
        let last_rack = commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .unwrap();
        assert!(label > last_rack);
        assert_eq!(label, commands.len() - 1);
    }

    #[test]
    fn paint_skips_unavailable_surface() {
        let facility = small_facility();

        let mut surface = RecordingSurface::unavailable();
        paint(&mut surface, &facility, &Selection::None);
        assert!(surface.commands.is_empty());

        let mut surface = RecordingSurface::new();
        paint(&mut surface, &facility, &Selection::None);
        assert_eq!(surface.commands, render(&facility, &Selection::None).commands());
    }
}
