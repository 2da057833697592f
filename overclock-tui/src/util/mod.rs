//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │键盘/鼠标 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化与恢复，以及日志订阅器的安装。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 文件日志（tracing + tracing-appender）
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use logging::init_logging;
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//!     初始化终端：
//!
//!             pub fn init_terminal() -> Result<Term> {
//!                 enable_raw_mode()?;                                     // 1. 启用原始模式
//!                 execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;  // 2. 备用屏幕 + 鼠标
//!                 Terminal::new(CrosstermBackend::new(stdout))            // 3. 创建终端对象
//!             }
//!
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显：按键不会显示在终端上
//!
//!         · Alternate Screen（备用屏幕）
//!             - 退出后自动恢复主屏幕内容（不会覆盖原有内容）
//!
//!         · Mouse Capture（鼠标捕获）
//!             - 布局视图的画布需要点击与移动事件
//!             - 终端会上报 MouseEventKind::Down / Moved
//!
//!
//!     日志：
//!         终端被 TUI 占用，日志写入 <data_dir>/overclock/logs/overclock.log。
//!         过滤级别取自环境变量 OVERCLOCK_LOG，缺省时使用配置文件中的 log_level。
//!
//!             let _guard = init_logging(&config)?;    // guard 必须活到 main 结束
//!
//!
//!     恢复终端：
//!         无论程序是正常退出还是发生错误，都必须调用 restore_terminal()！
//!         否则终端会保持在原始模式，并持续上报鼠标事件。
//!
//!     —— 去往 src/app.rs 主循环吧
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
