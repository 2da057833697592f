//! 仪表盘视图
//!
//! 上方五张静态指标卡，下方是设施模型的实时汇总。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::facility::avg_temp_text;
use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 指标卡
struct MetricCard {
    title: &'static str,
    value: &'static str,
    target: &'static str,
    unit: &'static str,
    color: Color,
}

/// 渲染仪表盘
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // 指标卡
            Constraint::Min(1),    // 设施汇总
        ])
        .split(area);

    render_cards(frame, layout[0]);
    render_facility(app, frame, layout[1]);
}

fn render_cards(frame: &mut Frame, area: Rect) {
    let texts = &t().dashboard;
    let c = colors();

    let cards = [
        MetricCard {
            title: texts.gpus_online,
            value: "6,824",
            target: "/ 6,912",
            unit: texts.unit_utilization,
            color: c.success,
        },
        MetricCard {
            title: texts.power_draw,
            value: "8.2 MW",
            target: "/ 10 MW",
            unit: texts.unit_megawatts,
            color: c.accent,
        },
        MetricCard {
            title: texts.token_throughput,
            value: "4.2M",
            target: "tok/s",
            unit: texts.unit_tokens,
            color: c.accent,
        },
        MetricCard {
            title: texts.pue,
            value: "1.12",
            target: "/ 1.10",
            unit: texts.unit_ratio,
            color: c.warning,
        },
        MetricCard {
            title: texts.temperature,
            value: "72°F",
            target: "/ 75°F",
            unit: texts.unit_fahrenheit,
            color: c.success,
        },
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {} ", card.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.border));

        let content = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!(" {}", card.value),
                    Style::default().fg(card.color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}", card.target), Style::default().fg(c.muted)),
            ]),
            Line::from(Span::styled(format!(" {}", card.unit), Style::default().fg(c.muted))),
        ])
        .block(block);

        frame.render_widget(content, *column);
    }
}

fn render_facility(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let totals = app.facility.totals();

    let block = Block::default()
        .title(format!(" {} ", texts.dashboard.facility))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let row = |label: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("  {label:<16}"), Style::default().fg(c.fg)),
            Span::styled(value, Style::default().fg(color)),
        ])
    };

    let details = &texts.layout.details;
    let avg_temp = avg_temp_text(totals.avg_temperature);

    let lines = vec![
        Line::from(""),
        row(
            texts.layout.total_racks,
            totals.total_racks.to_string(),
            c.accent,
        ),
        row(
            details.racks_online,
            format!("{}/{}", totals.active_racks, totals.total_racks),
            c.success,
        ),
        row(texts.layout.zones, app.facility.zones().len().to_string(), c.accent),
        row(
            details.gpus,
            format!("{}/{}", totals.active_gpus, totals.total_gpus),
            c.success,
        ),
        row(
            details.total_power,
            format!("{:.1} kW", totals.total_power),
            c.accent,
        ),
        row(details.avg_temp, avg_temp, c.accent),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
