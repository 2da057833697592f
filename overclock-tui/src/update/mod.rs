//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 接收 Message，修改 Model。这是整个应用中唯一会写入状态的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod layout;         // 布局视图：转交 LayoutState::apply()
//!         mod modal;          // 弹窗：关闭
//!         mod navigation;     // 导航栏：选择 / 切换页面
//!
//!
//!     pub fn update(app: &mut App, msg: AppMessage) {
//!         match msg {
//!             AppMessage::Quit            => app.should_quit = true,
//!             AppMessage::ToggleFocus     => app.focus = app.focus.toggle(),
//!             AppMessage::Navigation(m)   => navigation::update(app, m),
//!             AppMessage::Layout(input)   => layout::update(app, input),
//!             AppMessage::Modal(m)        => modal::update(app, m),
//!             AppMessage::ToggleTheme     => 切换主题并写回配置,
//!             AppMessage::CycleLanguage   => 切换语言并写回配置,
//!             ...
//!         }
//!     }
//!
//!
//!     页面切换（navigation::switch_page）：
//!         离开 Layout  → app.layout.reset()
//!         进入 Layout  → app.facility.initialize_connections()
//!
//!     每次 update 之后主循环都会立即重绘，画布永远与状态同步。
//!

mod layout;
mod modal;
mod navigation;

use crate::i18n::{current_language, set_language, t, Language};
use crate::message::AppMessage;
use crate::model::App;
use crate::view::theme::{current_theme, set_theme};

/// 处理消息，更新应用状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Layout(input) => {
            layout::update(app, input);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ToggleTheme => {
            let theme = current_theme().toggle();
            set_theme(theme);
            app.config.theme = theme;
            app.set_status(t().status_bar.theme_changed);
            app.persist_config();
        }

        AppMessage::CycleLanguage => {
            let lang = Language::from_code(&app.config.language)
                .unwrap_or_else(current_language)
                .next();
            set_language(lang);
            app.config.language = lang.code().to_string();
            app.set_status(format!(
                "{}: {}",
                t().status_bar.language_changed,
                lang.display_name()
            ));
            app.persist_config();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use overclock_core::services::{Direction, LayoutInput, NavMode};
    use overclock_core::types::Selection;
    use overclock_core::utils::geometry::grid_to_canvas;

    use super::*;
    use crate::backend::{AppConfig, ConfigService};
    use crate::message::{ModalMessage, NavigationMessage};
    use crate::model::Page;

    /// 记录保存次数的内存配置服务
    #[derive(Clone, Default)]
    struct MemoryConfigService {
        saved: Rc<RefCell<Vec<AppConfig>>>,
    }

    impl ConfigService for MemoryConfigService {
        fn load(&self) -> anyhow::Result<AppConfig> {
            Ok(AppConfig::default())
        }

        fn save(&self, config: &AppConfig) -> anyhow::Result<()> {
            self.saved.borrow_mut().push(config.clone());
            Ok(())
        }
    }

    fn test_app() -> (App, MemoryConfigService) {
        let service = MemoryConfigService::default();
        let config = AppConfig {
            seed: Some(42),
            ..AppConfig::default()
        };
        (App::new(config, Box::new(service.clone())), service)
    }

    fn open_layout(app: &mut App) {
        update(app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(app.current_page, Page::Layout);
    }

    #[test]
    fn quit_sets_flag() {
        let (mut app, _) = test_app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn entering_layout_initializes_connections() {
        let (mut app, _) = test_app();
        assert!(app.facility.connections().is_empty());

        open_layout(&mut app);
        let eda = app.facility.racks().iter().filter(|r| r.is_eda()).count();
        assert_eq!(app.facility.connections().len(), eda);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn leaving_layout_resets_state() {
        let (mut app, _) = test_app();
        open_layout(&mut app);

        update(&mut app, AppMessage::Layout(LayoutInput::AdvanceMode));
        update(&mut app, AppMessage::Layout(LayoutInput::Move(Direction::Right)));
        assert_eq!(app.layout.mode(), NavMode::Column);
        assert_eq!(app.layout.selection(), &Selection::Column(1));

        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectFirst));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(app.current_page, Page::Dashboard);
        assert_eq!(app.layout.mode(), NavMode::Zone);
        assert!(app.layout.selection().is_none());
    }

    #[test]
    fn layout_input_ignored_on_other_pages() {
        let (mut app, _) = test_app();
        update(&mut app, AppMessage::Layout(LayoutInput::Click(grid_to_canvas(9, 1))));
        assert!(app.layout.selection().is_none());
    }

    #[test]
    fn click_selects_rack() {
        let (mut app, _) = test_app();
        open_layout(&mut app);
        update(&mut app, AppMessage::Layout(LayoutInput::Click(grid_to_canvas(9, 1))));
        assert_eq!(app.layout.selection(), &Selection::Rack("mda-1".into()));

        update(&mut app, AppMessage::Layout(LayoutInput::ClearSelection));
        assert!(app.layout.selection().is_none());
    }

    #[test]
    fn help_modal_opens_and_closes() {
        let (mut app, _) = test_app();
        update(&mut app, AppMessage::ShowHelp);
        assert!(app.modal.is_open());

        // 弹窗打开时不切换焦点
        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_navigation());

        update(&mut app, AppMessage::Modal(ModalMessage::Close));
        assert!(!app.modal.is_open());
        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_content());
    }

    #[test]
    fn language_change_is_persisted() {
        let (mut app, service) = test_app();
        update(&mut app, AppMessage::CycleLanguage);
        assert_eq!(app.config.language, "zh-CN");
        update(&mut app, AppMessage::CycleLanguage);
        assert_eq!(app.config.language, "en-US");

        let saved = service.saved.borrow();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].language, "zh-CN");
    }

    #[test]
    fn clear_status_removes_message() {
        let (mut app, _) = test_app();
        app.set_status("hello");
        update(&mut app, AppMessage::ClearStatus);
        assert!(app.status_message.is_none());
    }
}
