//! 终端画布适配器
//!
//! 把 overclock-core 产出的绘图指令回放到 ratatui 的 Canvas 上。
//!
//!     逻辑坐标（720 × 540，y 向下）          Canvas 坐标（y 向上）
//!         (0,0) ────────▶ x                     y ▲
//!           │                                   │
//!           ▼ y                           (0,0) └────────▶ x
//!
//!     ratatui_y = CANVAS_HEIGHT - y
//!
//! 终端没有透明度，半透明颜色先与主题背景色混合；
//! 填充用水平扫描线模拟，虚线按 on/off 长度切成短线段。

use overclock_core::services::DrawList;
use overclock_core::types::{Dash, Rgba};
use overclock_core::utils::geometry::{LogicalRect, Point, CANVAS_HEIGHT, CANVAS_WIDTH};
use overclock_core::Surface;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line, Points};

use super::theme::ThemeColors;

/// 低于此透明度的填充在终端上几乎不可见，直接跳过
const MIN_FILL_ALPHA: f32 = 0.1;

/// 扫描线间距（逻辑像素）
const FILL_STEP: f64 = 6.0;

/// 构造显示整个机房的 Canvas 组件
pub fn facility_canvas<'a>(
    list: &'a DrawList,
    colors: &'a ThemeColors,
) -> Canvas<'a, impl Fn(&mut Context<'_>) + 'a> {
    Canvas::default()
        .marker(Marker::Braille)
        .background_color(colors.bg)
        .x_bounds([0.0, CANVAS_WIDTH])
        .y_bounds([0.0, CANVAS_HEIGHT])
        .paint(move |ctx| {
            let mut surface = CanvasSurface::new(ctx, colors);
            list.replay(&mut surface);
        })
}

/// 以 ratatui Canvas 上下文为后端的绘图表面
pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    colors: &'a ThemeColors,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>, colors: &'a ThemeColors) -> Self {
        Self { ctx, colors }
    }

    fn line(&mut self, a: Point, b: Point, color: Rgba) {
        let (x1, y1) = flip(a);
        let (x2, y2) = flip(b);
        self.ctx.draw(&Line::new(x1, y1, x2, y2, self.colors.blend(color)));
    }

    fn segment(&mut self, a: Point, b: Point, color: Rgba, dash: Option<Dash>) {
        match dash {
            Some(dash) => {
                for (from, to) in dash_segments(a, b, dash) {
                    self.line(from, to, color);
                }
            }
            None => self.line(a, b, color),
        }
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn fill_rect(&mut self, rect: LogicalRect, color: Rgba) {
        if color.a < MIN_FILL_ALPHA {
            return;
        }
        let mut y = rect.y;
        while y < rect.bottom() {
            self.line(Point::new(rect.x, y), Point::new(rect.right(), y), color);
            y += FILL_STEP;
        }
    }

    fn stroke_rect(&mut self, rect: LogicalRect, color: Rgba, dash: Option<Dash>) {
        let corners = [
            Point::new(rect.x, rect.y),
            Point::new(rect.right(), rect.y),
            Point::new(rect.right(), rect.bottom()),
            Point::new(rect.x, rect.bottom()),
            Point::new(rect.x, rect.y),
        ];
        self.stroke_path(&corners, color, dash);
    }

    fn stroke_path(&mut self, points: &[Point], color: Rgba, dash: Option<Dash>) {
        for pair in points.windows(2) {
            self.segment(pair[0], pair[1], color, dash);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        let (x, y) = flip(center);
        let half = radius / 2.0;
        let coords = [
            (x, y),
            (x - half, y),
            (x + half, y),
            (x, y - half),
            (x, y + half),
        ];
        self.ctx.draw(&Points {
            coords: &coords,
            color: self.colors.blend(color),
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        let (x, y) = flip(center);
        self.ctx.draw(&Circle {
            x,
            y,
            radius,
            color: self.colors.blend(color),
        });
    }

    fn text(&mut self, at: Point, text: &str, color: Rgba) {
        let (x, y) = flip(at);
        let style = Style::default().fg(self.colors.blend(color));
        self.ctx.print(x, y, TextLine::styled(text.to_owned(), style));
    }
}

/// 逻辑坐标 → Canvas 坐标
fn flip(p: Point) -> (f64, f64) {
    (p.x, CANVAS_HEIGHT - p.y)
}

/// 把线段 `a → b` 按虚线样式切成若干实线段
pub fn dash_segments(a: Point, b: Point, dash: Dash) -> Vec<(Point, Point)> {
    let length = a.distance(b);
    let period = dash.on + dash.off;
    if length == 0.0 || dash.on <= 0.0 || period <= 0.0 {
        return vec![(a, b)];
    }

    let at = |t: f64| Point::new(a.x + (b.x - a.x) * t / length, a.y + (b.y - a.y) * t / length);
    let mut pieces = Vec::new();
    let mut start = 0.0;
    while start < length {
        let end = (start + dash.on).min(length);
        pieces.push((at(start), at(end)));
        start += period;
    }
    pieces
}

#[cfg(test)]
mod tests {
    use overclock_core::services::{render, FacilityModel};
    use overclock_core::types::Selection;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::widgets::Widget;

    use super::*;

    #[test]
    fn dashes_split_horizontal_segment() {
        let pieces = dash_segments(Point::new(0.0, 0.0), Point::new(20.0, 0.0), Dash::new(4.0, 4.0));
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0], (Point::new(0.0, 0.0), Point::new(4.0, 0.0)));
        assert_eq!(pieces[1], (Point::new(8.0, 0.0), Point::new(12.0, 0.0)));
        assert_eq!(pieces[2], (Point::new(16.0, 0.0), Point::new(20.0, 0.0)));
    }

    #[test]
    fn last_dash_is_truncated() {
        let pieces = dash_segments(Point::new(0.0, 0.0), Point::new(0.0, 10.0), Dash::new(4.0, 4.0));
        assert_eq!(pieces.last(), Some(&(Point::new(0.0, 8.0), Point::new(0.0, 10.0))));
    }

    #[test]
    fn degenerate_dash_keeps_solid_line() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(5.0, 1.0);
        assert_eq!(dash_segments(a, b, Dash::new(0.0, 4.0)), vec![(a, b)]);
    }

    #[test]
    fn flip_inverts_vertical_axis() {
        assert_eq!(flip(Point::new(10.0, 0.0)), (10.0, CANVAS_HEIGHT));
        assert_eq!(flip(Point::new(10.0, CANVAS_HEIGHT)), (10.0, 0.0));
    }

    #[test]
    fn facility_canvas_paints_into_buffer() {
        let mut facility = FacilityModel::with_seed(7).unwrap();
        facility.initialize_connections();
        let list = render(&facility, &Selection::None);
        let colors = ThemeColors::dark();

        let area = Rect::new(0, 0, 72, 27);
        let mut buf = Buffer::empty(area);
        facility_canvas(&list, &colors).render(area, &mut buf);

        let painted = buf
            .content()
            .iter()
            .filter(|cell| cell.symbol() != " ")
            .count();
        assert!(painted > 0);
        assert!(buf
            .content()
            .iter()
            .any(|cell| cell.fg == Color::Rgb(0, 240, 255)));
    }
}
