//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ NavMsg    │          ┌──────────┐         │   │
//！│  │   │  View   │          │LayoutInput│   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 同步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ overclock│              │
//！│      │ (Util)  │                                │  -core   │              │
//！│      └─────────┘                                └──────────┘              │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构，所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod modal;          // 弹窗状态（帮助 / 错误）
//!         mod navigation;     // 焦点 + 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub navigation: NavigationState,    // 导航状态
//!             pub current_page: Page,             // 当前页面
//!             pub status_message: Option<String>, // 状态栏消息
//!
//!             pub facility: FacilityModel,        // 设施模型（来自 overclock-core）
//!             pub layout: LayoutState,            // 布局视图状态机（来自 overclock-core）
//!             pub viewport: Rect,                 // 最近一次绘制的终端区域
//!
//!             pub modal: ModalState,              // 弹窗状态
//!             pub config: AppConfig,              // 当前配置
//!         }
//!
//!     viewport 在每次 terminal.draw() 时更新，
//!     event 层用它把鼠标所在的终端格子换算成画布上的逻辑像素。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、布局视图状态（LayoutState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     状态机本身在 overclock-core 中实现，TUI 只负责把输入喂给它：
//!
//!         键盘 ↑↓←→       → LayoutInput::Move(direction)
//!         键盘 Enter      → LayoutInput::AdvanceMode       zone → column → rack → zone
//!         键盘 Esc        → LayoutInput::ClearSelection
//!         鼠标左键        → LayoutInput::Click(point)
//!         鼠标移动        → LayoutInput::Hover(point) / LayoutInput::Leave
//!
//!     所有输入都经过 LayoutState::apply() 这唯一的入口。
//!
//!     生命周期：
//!         进入布局页面   → facility.initialize_connections()
//!         离开布局页面   → layout.reset()
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、页面状态（Page）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         - Dashboard         指标卡片 + 设施汇总
//!         - Layout            机房布局画布
//!         - Tokens / Power / Thermal   图表视图（终端中为占位页）
//!
//!     在导航栏按 Enter → 切换到对应页面
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod modal;
mod navigation;
mod page;

pub use app::App;
pub use modal::{Modal, ModalState};
pub use navigation::{FocusPanel, NavItemId, NavigationState};
pub use page::Page;
