//! 鼠标坐标换算：终端格子 → 画布逻辑像素
//!
//! 一个终端格子在逻辑坐标系里覆盖一块矩形（通常 5~10px 宽，10~20px 高），
//! 比机柜的命中半径还大。直接取格子中心会让很多机柜点不中，
//! 因此取矩形内离最近网格中心最近的那一点作为探测点。

use overclock_core::utils::geometry::{
    canvas_to_grid, grid_to_canvas, LogicalRect, Point, CANVAS_HEIGHT, CANVAS_WIDTH,
};
use ratatui::layout::Rect;

/// 终端格子 `(column, row)` 在画布区域 `area` 中覆盖的逻辑矩形
///
/// 格子不在画布区域内时返回 `None`。画布上方对应逻辑 y = 0。
pub fn cell_rect(area: Rect, column: u16, row: u16) -> Option<LogicalRect> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
        return None;
    }

    let cell_w = CANVAS_WIDTH / f64::from(area.width);
    let cell_h = CANVAS_HEIGHT / f64::from(area.height);
    Some(LogicalRect::new(
        f64::from(column - area.x) * cell_w,
        f64::from(row - area.y) * cell_h,
        cell_w,
        cell_h,
    ))
}

/// 格子的探测点：矩形内离最近网格中心最近的点
pub fn probe_point(rect: LogicalRect) -> Point {
    let centre = Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
    let (grid_x, grid_y) = canvas_to_grid(centre);
    rect.clamp_point(grid_to_canvas(grid_x, grid_y))
}

/// 终端格子 → 探测点
pub fn canvas_point(area: Rect, column: u16, row: u16) -> Option<Point> {
    cell_rect(area, column, row).map(probe_point)
}

/// 逻辑像素 → 所在终端格子（用于定位悬停提示）
pub fn cell_at(area: Rect, p: Point) -> (u16, u16) {
    let column = (p.x / CANVAS_WIDTH * f64::from(area.width)).floor() as u16;
    let row = (p.y / CANVAS_HEIGHT * f64::from(area.height)).floor() as u16;
    (
        area.x + column.min(area.width.saturating_sub(1)),
        area.y + row.min(area.height.saturating_sub(1)),
    )
}
