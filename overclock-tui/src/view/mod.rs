//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         pub mod theme;      // 主题与颜色
//!         pub mod layout;     // 主布局：标题栏 + 导航 / 内容 + 状态栏
//!         mod canvas;         // overclock-core 绘图指令 → ratatui Canvas
//!         mod components;     // 导航栏、状态栏、弹窗、悬停提示
//!         mod pages;          // 仪表盘、机房布局、图表占位页
//!
//!
//!     ┌──────────────────────── 标题栏 ────────────────────────┐
//!     ├──────────┬─────────────────────────────────────────────┤
//!     │  导航栏   │  页面内容（Dashboard / Layout / 占位页）     │
//!     │  20%     │  80%                                        │
//!     ├──────────┴─────────────────────────────────────────────┤
//!     └──────────────────────── 状态栏 ────────────────────────┘
//!
//!     弹窗最后绘制，覆盖在所有内容之上。
//!

mod canvas;
mod components;
pub mod layout;
mod pages;
pub mod theme;

pub use layout::render;
