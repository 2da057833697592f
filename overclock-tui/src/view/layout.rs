//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 主布局切分结果
struct Regions {
    title: Rect,
    nav: Rect,
    page: Rect,
    status: Rect,
}

fn regions(size: Rect) -> Regions {
    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(main_layout[1]);

    Regions {
        title: main_layout[0],
        nav: columns[0],
        page: columns[1],
        status: main_layout[2],
    }
}

fn page_block(app: &App) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()))
}

/// 布局视图中画布在整个终端里的位置（鼠标事件与渲染共用）
pub fn facility_canvas_area(viewport: Rect) -> Rect {
    let page = regions(viewport).page;
    let inner = Block::default().borders(Borders::ALL).inner(page);
    pages::facility::canvas_area(inner)
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors();
    let layout = regions(frame.area());

    frame.render_widget(Block::default().style(Style::default().bg(c.bg)), frame.area());

    render_title_bar(frame, layout.title);
    components::navigation::render(app, frame, layout.nav);
    render_page_content(app, frame, layout.page);
    components::statusbar::render(app, frame, layout.status);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION"));
    frame.render_widget(Paragraph::new(title).style(Styles::statusbar()), area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = page_block(app);
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Page::Dashboard => pages::dashboard::render(app, frame, inner_area),
        Page::Layout => pages::facility::render(app, frame, inner_area),
        page @ (Page::Tokens | Page::Power | Page::Thermal) => {
            pages::placeholder::render(page, frame, inner_area);
        }
    }
}
