//! 图表页占位视图

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::Page;
use crate::view::theme::colors;

/// 渲染占位页
pub fn render(page: Page, frame: &mut Frame, area: Rect) {
    let c = colors();
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    let lines = vec![
        Line::styled(
            page.title(),
            Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(t().placeholder.message, Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}
