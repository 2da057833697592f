//! Canvas geometry: logical pixel space, grid conversion and gap-adjusted zone bounds.
//!
//! The layout view works in a fixed 720×540 logical pixel space split into 32px grid
//! cells. Grid coordinates convert to the centre of their cell.

use crate::types::Zone;

/// Logical canvas width (px)
pub const CANVAS_WIDTH: f64 = 720.0;
/// Logical canvas height (px)
pub const CANVAS_HEIGHT: f64 = 540.0;
/// Grid cell edge (px)
pub const GRID_SIZE: f64 = 32.0;
/// Rack dot radius (px)
pub const RACK_RADIUS: f64 = 3.0;
/// Extra tolerance around a rack dot for pointer hits (px)
pub const RACK_HIT_SLOP: f64 = 2.0;
/// Visual gap between adjacent zones (px)
pub const ZONE_GAP: f64 = 16.0;
/// Number of EDA grid columns
pub const GRID_COLUMNS: i32 = 18;
/// First grid row occupied by racks
pub const RACK_ROW_MIN: i32 = 3;
/// Last grid row occupied by racks
pub const RACK_ROW_MAX: i32 = 14;

/// 逻辑像素坐标
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 欧氏距离
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// 逻辑像素矩形（左上角 + 尺寸）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LogicalRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LogicalRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// 右边界（不含）
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// 下边界（不含）
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// 半开区间包含测试：`[x, x+w) × [y, y+h)`
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// 矩形内距离 `p` 最近的点
    pub fn clamp_point(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.x, self.right()),
            p.y.clamp(self.y, self.bottom()),
        )
    }
}

/// 网格坐标 → 画布坐标（格子中心）
pub fn grid_to_canvas(grid_x: i32, grid_y: i32) -> Point {
    Point::new(
        f64::from(grid_x) * GRID_SIZE + GRID_SIZE / 2.0,
        f64::from(grid_y) * GRID_SIZE + GRID_SIZE / 2.0,
    )
}

/// 画布坐标 → 所在网格（向下取整）
pub fn canvas_to_grid(p: Point) -> (i32, i32) {
    (
        (p.x / GRID_SIZE).floor() as i32,
        (p.y / GRID_SIZE).floor() as i32,
    )
}

/// 网格行是否位于机柜带 `[3, 14]`
pub fn in_rack_band(grid_y: i32) -> bool {
    (RACK_ROW_MIN..=RACK_ROW_MAX).contains(&grid_y)
}

/// 第 `index` 个区域扣除视觉间隙后的像素矩形
///
/// 非首个区域左侧让出 `ZONE_GAP / 2`，非末尾区域宽度减去 `ZONE_GAP`。
/// 首尾规则不对称，渲染与命中测试共用此结果。
pub fn zone_bounds(zone: &Zone, index: usize, zone_count: usize) -> LogicalRect {
    let is_first = index == 0;
    let is_last = index + 1 >= zone_count;

    let leading = if is_first { 0.0 } else { ZONE_GAP / 2.0 };
    let trailing = if is_last { 0.0 } else { ZONE_GAP };

    LogicalRect::new(
        f64::from(zone.start_x) * GRID_SIZE + leading,
        f64::from(zone.start_y) * GRID_SIZE,
        f64::from(zone.width) * GRID_SIZE - trailing,
        f64::from(zone.height) * GRID_SIZE,
    )
}

/// 区域的名义像素矩形（不扣除间隙）
pub fn zone_band(zone: &Zone) -> LogicalRect {
    LogicalRect::new(
        f64::from(zone.start_x) * GRID_SIZE,
        f64::from(zone.start_y) * GRID_SIZE,
        f64::from(zone.width) * GRID_SIZE,
        f64::from(zone.height) * GRID_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_to_canvas_centres_in_cell() {
        assert_eq!(grid_to_canvas(0, 0), Point::new(16.0, 16.0));
        assert_eq!(grid_to_canvas(9, 1), Point::new(304.0, 48.0));
    }

    #[test]
    fn canvas_to_grid_floors() {
        assert_eq!(canvas_to_grid(Point::new(31.9, 32.0)), (0, 1));
        assert_eq!(canvas_to_grid(grid_to_canvas(17, 14)), (17, 14));
    }

    #[test]
    fn zone_bounds_apply_asymmetric_gap() {
        let zones = [
            Zone::new("zone-1", "Zone A", 0, 3, 6, 12),
            Zone::new("zone-2", "Zone B", 6, 3, 6, 12),
            Zone::new("zone-3", "Zone C", 12, 3, 6, 12),
        ];

        let first = zone_bounds(&zones[0], 0, 3);
        assert_eq!(first, LogicalRect::new(0.0, 96.0, 176.0, 384.0));

        let middle = zone_bounds(&zones[1], 1, 3);
        assert_eq!(middle, LogicalRect::new(200.0, 96.0, 176.0, 384.0));

        let last = zone_bounds(&zones[2], 2, 3);
        assert_eq!(last, LogicalRect::new(392.0, 96.0, 192.0, 384.0));
    }

    #[test]
    fn clamp_point_projects_onto_rect() {
        let rect = LogicalRect::new(10.0, 10.0, 10.0, 10.0);
        assert_eq!(rect.clamp_point(Point::new(0.0, 15.0)), Point::new(10.0, 15.0));
        assert_eq!(rect.clamp_point(Point::new(12.0, 13.0)), Point::new(12.0, 13.0));
    }
}
