//! 应用主消息枚举

use overclock_core::services::LayoutInput;

use super::{ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone, Copy)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 布局视图输入（直接交给核心状态机）
    Layout(LayoutInput),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 显示帮助
    ShowHelp,

    /// 切换主题
    ToggleTheme,

    /// 切换语言
    CycleLanguage,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
