//! 布局视图更新逻辑

use overclock_core::services::LayoutInput;

use crate::model::{App, Page};

/// 将输入交给布局状态机
///
/// 只有布局页面处于显示状态时才生效。
pub fn update(app: &mut App, input: LayoutInput) {
    if app.current_page != Page::Layout {
        return;
    }

    if app.layout.apply(&app.facility, input) {
        tracing::trace!(
            "Layout state: mode={} selection={}",
            app.layout.mode().label(),
            app.layout.selection()
        );
    }
}
