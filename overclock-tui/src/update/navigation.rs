//! 导航更新逻辑

use crate::i18n::t;
use crate::message::NavigationMessage;
use crate::model::{App, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                switch_page(app, Page::from(id));
            }
        }

        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
        }

        NavigationMessage::SelectLast => {
            app.navigation.select_last();
        }
    }
}

/// 切换页面，处理布局视图的挂载与卸载
pub fn switch_page(app: &mut App, page: Page) {
    if app.current_page == page {
        return;
    }

    app.clear_status(); // 切换页面时清除状态消息

    if app.current_page == Page::Layout {
        app.layout.reset();
    }

    if page == Page::Layout {
        let links = app.facility.initialize_connections();
        app.set_status(format!("{links} {}", t().status_bar.links_initialized));
    }

    tracing::debug!("Page {:?} -> {:?}", app.current_page, page);
    app.current_page = page;
}
