//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use overclock_core::services::{Direction, LayoutInput};

use crate::event::keymap::DefaultKeymap;
use crate::event::pointer::canvas_point;
use crate::message::{AppMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};
use crate::view::layout::facility_canvas_area;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: &Event, app: &App) -> AppMessage {
    match *event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app), // 鼠标事件
        _ => AppMessage::Noop, // 终端窗口大小改变等，下一帧自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_SHORT.matches(&key) {
        return AppMessage::ShowHelp;
    }

    // 部分终端会给 '?' 带上 SHIFT
    if key.code == KeyCode::Char('?') && key.modifiers == KeyModifiers::SHIFT {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    if DefaultKeymap::CYCLE_LANGUAGE.matches(&key) {
        return AppMessage::CycleLanguage;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home / End: 跳到首尾
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        // Esc: 清除状态栏消息
        KeyCode::Esc => AppMessage::ClearStatus,

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page {
        Page::Layout => handle_layout_keys(key),
        _ => AppMessage::Noop,
    }
}

/// 处理布局视图的按键
fn handle_layout_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NEXT_MODE.matches(&key) {
        return AppMessage::Layout(LayoutInput::AdvanceMode);
    }
    if DefaultKeymap::CLEAR_SELECTION.matches(&key) {
        return AppMessage::Layout(LayoutInput::ClearSelection);
    }

    let direction = match key.code {
        KeyCode::Left => Direction::Left,
        KeyCode::Right => Direction::Right,
        KeyCode::Up => Direction::Up,
        KeyCode::Down => Direction::Down,
        _ => return AppMessage::Noop,
    };
    AppMessage::Layout(LayoutInput::Move(direction))
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    // 帮助和错误弹窗只响应关闭按键
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c'))
        | (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Enter) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件（仅布局视图）
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if app.current_page != Page::Layout || app.modal.is_open() {
        return AppMessage::Noop;
    }

    let area = facility_canvas_area(app.viewport);
    let point = canvas_point(area, mouse.column, mouse.row);

    match (mouse.kind, point) {
        (MouseEventKind::Down(MouseButton::Left), Some(p)) => {
            AppMessage::Layout(LayoutInput::Click(p))
        }
        (MouseEventKind::Moved, Some(p)) => AppMessage::Layout(LayoutInput::Hover(p)),
        // 指针离开画布
        (MouseEventKind::Moved, None) if app.layout.hover().is_some() => {
            AppMessage::Layout(LayoutInput::Leave)
        }
        _ => AppMessage::Noop,
    }
}
