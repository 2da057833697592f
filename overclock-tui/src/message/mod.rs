//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod modal;
//!         mod navigation;
//!
//!         pub use app::AppMessage;
//!         pub use modal::ModalMessage;
//!         pub use navigation::NavigationMessage;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             ToggleFocus,                        // 切换焦点面板
//!             Navigation(NavigationMessage),      // 导航面板子消息
//!             Layout(LayoutInput),                // 布局视图输入，类型来自 overclock-core
//!             Modal(ModalMessage),                // 弹窗子消息
//!             ShowHelp,                           // 显示帮助
//!             ToggleTheme,                        // 切换主题
//!             CycleLanguage,                      // 切换语言
//!             ClearStatus,                        // 清除状态栏消息
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     布局视图没有单独的子消息枚举：
//!         overclock_core::services::LayoutInput 已经完整描述了状态机的输入，
//!         Event 层直接构造它，Update 层原样转交给 LayoutState::apply()。
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
