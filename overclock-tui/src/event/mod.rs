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
//！│  │   ┌─────────┐          │ LayoutIn  │          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 同步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │  overclock-core   │           │
//！│                                           │                   │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//! 
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//! 
//! 
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!         mod pointer;        // 鼠标坐标换算：终端格子 → 画布逻辑像素
//!
//!         pub use handler::{handle_event, poll_event};
//!         pub use pointer::cell_at;
//! 
//! 
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 tick_rate_ms
//! 
//!         · handle_event    事件分发
//! 
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Mouse(MouseEvent)            // 鼠标事件，仅在布局视图中处理
//!             Event::Resize(width, height)        // 终端窗口大小发生变化，下一帧重绘
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理（Esc / Enter 关闭）
//!                 - 全局快捷键，就地处理；
//!                 - 焦点位于导航面板，调用 handle_navigation_keys 处理
//!                 - 焦点位于内容面板，调用 handle_content_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 布局视图输入
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     键盘（焦点位于内容面板时）：
//!         ←/→/↑/↓     → LayoutInput::Move(Direction)
//!         Enter       → LayoutInput::AdvanceMode      （Zone → Column → Rack → Zone）
//!         Esc         → LayoutInput::ClearSelection
//!
//!     鼠标（不论焦点）：
//!         左键按下     → LayoutInput::Click(Point)
//!         移动         → LayoutInput::Hover(Point)
//!         移出画布     → LayoutInput::Leave           （仅当正在显示悬停提示时）
//!
//!     画布区域由 view::layout::facility_canvas_area(app.viewport) 给出，
//!     与渲染时使用同一份计算，因此点击位置与画面一一对应。
//! 

mod handler;
mod keymap;
mod pointer;

pub use handler::{handle_event, poll_event};
pub use pointer::cell_at;
