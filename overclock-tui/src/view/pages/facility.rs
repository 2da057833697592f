//! 机房布局视图
//!
//! ┌──────────────── canvas ─────────────────┐ ┌──── Navigation ────┐
//! │                                         │ │ Mode / Controls    │
//! │   FacilityModel → render() → DrawList   │ │ Stats              │
//! │        → CanvasSurface（终端画布）       │ ├──── Details ───────┤
//! │                                         │ │ 当前选择的统计     │
//! └─────────────────────────────────────────┘ └────────────────────┘

use overclock_core::services::{render as render_layout, NavMode, GPUS_PER_RACK};
use overclock_core::types::{RackStatus, RackStats, Selection};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::canvas::facility_canvas;
use crate::view::components::tooltip;
use crate::view::theme::{colors, Styles, ThemeColors};

/// 右侧面板宽度
const SIDE_PANEL_WIDTH: u16 = 34;
/// 标签列宽度（显示宽度）
const LABEL_WIDTH: usize = 14;

/// 画布区域与侧栏区域
struct Areas {
    subtitle: Rect,
    canvas_block: Rect,
    side: Rect,
}

fn split(area: Rect) -> Areas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(columns[0]);

    Areas {
        subtitle: left[0],
        canvas_block: left[1],
        side: columns[1],
    }
}

fn canvas_block() -> Block<'static> {
    Block::default()
        .title(format!(" {} ", t().layout.canvas))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().border))
}

/// 页面内容区中真正用于绘制画布的区域（不含边框）
pub fn canvas_area(area: Rect) -> Rect {
    canvas_block().inner(split(area).canvas_block)
}

/// 渲染布局视图
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let areas = split(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            format!(" {}", texts.layout.subtitle),
            Style::default().fg(c.muted),
        )),
        areas.subtitle,
    );

    // 画布
    let block = canvas_block();
    let inner = block.inner(areas.canvas_block);
    frame.render_widget(block, areas.canvas_block);

    let list = render_layout(&app.facility, app.layout.selection());
    frame.render_widget(facility_canvas(&list, &c), inner);

    // 侧栏
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(13), Constraint::Min(0)])
        .split(areas.side);

    render_navigation_panel(app, frame, side[0], &c);
    render_details_panel(app, frame, side[1], &c);

    // 悬停提示画在最上层
    if let Some(tip) = app.layout.hover() {
        tooltip::render(tip, frame, inner);
    }
}

fn panel(title: &str, c: &ThemeColors) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(c.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border))
}

fn row(label: &str, value: impl Into<String>, color: Color, c: &ThemeColors) -> Line<'static> {
    let pad = LABEL_WIDTH.saturating_sub(label.width());
    Line::from(vec![
        Span::styled(format!("{label}{}", " ".repeat(pad)), Style::default().fg(c.fg)),
        Span::styled(value.into(), Style::default().fg(color)),
    ])
}

fn mode_label(mode: NavMode) -> &'static str {
    let texts = &t().layout;
    match mode {
        NavMode::Zone => texts.mode_zone,
        NavMode::Column => texts.mode_column,
        NavMode::Rack => texts.mode_rack,
    }
}

fn render_navigation_panel(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let texts = t();
    let layout = &texts.layout;
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let totals = app.facility.totals();

    let lines = vec![
        row(layout.mode, mode_label(app.layout.mode()), c.accent, c),
        Line::from(""),
        Line::styled(layout.controls, Style::default().fg(c.muted)),
        row(keys.arrows, actions.navigate, c.muted, c),
        row(keys.enter, actions.next_mode, c.muted, c),
        row(keys.esc, actions.clear, c.muted, c),
        Line::from(""),
        Line::styled(layout.stats, Style::default().fg(c.muted)),
        row(layout.total_racks, totals.total_racks.to_string(), c.accent, c),
        row(layout.active, totals.active_racks.to_string(), c.success, c),
        row(layout.zones, app.facility.zones().len().to_string(), c.accent, c),
    ];

    frame.render_widget(Paragraph::new(lines).block(panel(layout.navigation, c)), area);
}

fn render_details_panel(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let details = &t().layout.details;
    let (title, lines) = match app.layout.selection() {
        Selection::None => return,
        Selection::Zone(id) => (details.zone_details, zone_lines(app, id, c)),
        Selection::Column(column) => (details.column_details, column_lines(app, *column, c)),
        Selection::Rack(id) => (details.rack_details, rack_lines(app, id, c)),
    };

    let paragraph = Paragraph::new(lines)
        .block(panel(title, c))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// 平均温度文本；空集合显示 N/A
pub fn avg_temp_text(avg: Option<f64>) -> String {
    avg.map_or_else(
        || t().common.not_available.to_string(),
        |temp| format!("{temp:.1}°F"),
    )
}

fn stats_lines(stats: &RackStats, c: &ThemeColors) -> Vec<Line<'static>> {
    let details = &t().layout.details;
    vec![
        row(
            details.racks_online,
            format!("{}/{}", stats.active_racks, stats.total_racks),
            c.success,
            c,
        ),
        row(
            details.total_power,
            format!("{:.1} kW", stats.total_power),
            c.accent,
            c,
        ),
        row(details.avg_temp, avg_temp_text(stats.avg_temperature), c.accent, c),
        Line::from(""),
        Line::styled(details.systems, Style::default().fg(c.muted)),
        row(
            details.gpus,
            format!("{}/{}", stats.active_gpus, stats.total_gpus),
            c.success,
            c,
        ),
        row(details.network, details.online, c.success, c),
    ]
}

fn zone_lines(app: &App, zone_id: &str, c: &ThemeColors) -> Vec<Line<'static>> {
    let details = &t().layout.details;
    let name = app
        .facility
        .find_zone(zone_id)
        .map_or_else(|| zone_id.to_string(), |zone| zone.name.clone());

    let mut lines = vec![row(details.zone, name, c.accent, c)];
    lines.extend(stats_lines(&app.facility.zone_stats(zone_id), c));
    lines
}

fn column_lines(app: &App, column: i32, c: &ThemeColors) -> Vec<Line<'static>> {
    let details = &t().layout.details;
    let mut lines = vec![row(details.column, (column + 1).to_string(), c.accent, c)];
    lines.extend(stats_lines(&app.facility.column_stats(column), c));
    lines
}

fn rack_lines(app: &App, rack_id: &str, c: &ThemeColors) -> Vec<Line<'static>> {
    let details = &t().layout.details;
    let Some(rack) = app.facility.find_rack(rack_id) else {
        return vec![Line::styled(
            details.nothing_selected,
            Style::default().fg(c.muted),
        )];
    };

    let mut lines = vec![row(details.rack_id, rack.id.clone(), c.accent, c)];

    if rack.is_mda() {
        lines.push(Line::styled(
            details.distribution_root,
            Style::default().fg(c.success),
        ));
        return lines;
    }

    let (status, color) = match rack.status {
        RackStatus::Active => (details.online, c.success),
        RackStatus::Inactive => (details.offline, c.error),
        RackStatus::Maintenance => (details.maintenance, c.warning),
    };
    let gpus = if rack.is_active() { GPUS_PER_RACK } else { 0 };
    let metric = |value: Option<f64>, unit: &str| {
        value.map_or_else(
            || t().common.not_available.to_string(),
            |v| format!("{v:.1}{unit}"),
        )
    };

    lines.push(row(
        details.power_draw,
        metric(rack.power_draw, " kW"),
        c.accent,
        c,
    ));
    lines.push(row(
        details.temperature,
        metric(rack.temperature, "°F"),
        c.accent,
        c,
    ));
    lines.push(row(details.status, status, color, c));
    lines.push(row(
        details.gpus,
        format!("{gpus}/{GPUS_PER_RACK}"),
        color,
        c,
    ));
    lines
}
