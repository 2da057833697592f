//! 悬停提示组件
//!
//! 在指针所在格子的右下方弹出；空间不够时翻到左侧 / 上方。

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use overclock_core::services::Tooltip;

use crate::event::cell_at;
use crate::view::theme::colors;

/// 渲染悬停提示，`canvas` 为画布所占的终端区域
pub fn render(tooltip: &Tooltip, frame: &mut Frame, canvas: Rect) {
    let area = popup_rect(tooltip, canvas, frame.area());
    if area.width == 0 || area.height == 0 {
        return;
    }

    let c = colors();
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.accent))
        .style(Style::default().bg(c.bg));

    let lines: Vec<Line> = tooltip
        .lines
        .iter()
        .map(|line| Line::styled(line.as_str(), Style::default().fg(c.fg)))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 计算提示框位置
pub fn popup_rect(tooltip: &Tooltip, canvas: Rect, screen: Rect) -> Rect {
    let content_width = tooltip
        .lines
        .iter()
        .map(|line| line.width())
        .max()
        .unwrap_or(0) as u16;
    let width = (content_width + 2).min(screen.width);
    let height = (tooltip.lines.len() as u16 + 2).min(screen.height);

    let (column, row) = cell_at(canvas, tooltip.anchor);

    let x = if column + 1 + width <= screen.right() {
        column + 1
    } else {
        column.saturating_sub(width).max(screen.x)
    };
    let y = if row + 1 + height <= screen.bottom() {
        row + 1
    } else {
        row.saturating_sub(height).max(screen.y)
    };

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use overclock_core::services::HoverTarget;
    use overclock_core::utils::geometry::Point;

    use super::*;

    fn tooltip(anchor: Point) -> Tooltip {
        Tooltip {
            anchor,
            target: HoverTarget::Rack("eda-0-3".into()),
            lines: vec![
                "Rack eda-0-3".into(),
                "Power: 7.5 kW".into(),
                "Temp: 70.0°F".into(),
            ],
        }
    }

    #[test]
    fn popup_sits_below_right_of_pointer() {
        let canvas = Rect::new(0, 0, 72, 54);
        let screen = Rect::new(0, 0, 100, 60);
        let rect = popup_rect(&tooltip(Point::new(16.0, 16.0)), canvas, screen);
        assert_eq!(rect, Rect::new(2, 2, 15, 5));
    }

    #[test]
    fn popup_flips_near_screen_edge() {
        let canvas = Rect::new(0, 0, 72, 54);
        let screen = Rect::new(0, 0, 72, 54);
        let rect = popup_rect(&tooltip(Point::new(715.0, 535.0)), canvas, screen);
        assert!(rect.right() <= screen.right());
        assert!(rect.bottom() <= screen.bottom());
        assert!(rect.x < 71);
    }
}
