//! Overclock TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置服务 (`backend/`)
//!
//!
//! main.rs
//! Overclock TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService::load()  // 读取配置，失败时回退为默认值并记下错误
//!     init_logging()              // 日志写入数据目录下的文件，不污染备用屏幕
//!     set_theme / set_language    // 应用配置中的主题与语言
//!     init_terminal()             // 初始化终端，得到 terminal: Terminal<...>
//!     model::App::new()           // 创建 APP 实例（按 seed 生成设施模型）
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//!
//! 当启动程序时，main.rs：
//!     `init_terminal()`         // from util/terminal.rs
//!
//!     有：
//!         · enable_raw_mode()
//!             - 以关闭终端行缓冲模式、关闭回显与允许读取单个按键事件
//!         · execute!(io::stdout , EnterAlternateScreen , EnableMouseCapture)?
//!             - 切换到 备用屏幕，并开启鼠标捕获（布局视图的点击 / 悬停）
//!         · 返回 Terminal 对象
//!
//!
//!     App::new()              // from model/app.rs
//!     创建终端初始状态（在 /app.rs 下细嗦）
//!
//!
//!     进入主循环 app::run()   // from /app.rs

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{AppConfig, ConfigService, LocalConfigService};
use i18n::{set_language, t, Language};
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::set_theme;

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取配置（损坏的配置文件不阻止启动，稍后以弹窗提示）
    let config_service = LocalConfigService::new();
    let (config, config_error) = match config_service.load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(format!("{e:#}"))),
    };

    // 2. 初始化日志（guard 必须存活到程序结束）
    let _log_guard = init_logging(&config)?;
    tracing::info!("Config loaded from {}", config_service.path().display());
    if let Some(ref error) = config_error {
        tracing::warn!("Falling back to default config: {error}");
    }

    // 3. 应用主题与语言
    set_theme(config.theme);
    if let Some(lang) = Language::from_code(&config.language) {
        set_language(lang);
    } else {
        tracing::warn!("Unknown language code {:?}, keeping default", config.language);
    }

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new(config, Box::new(config_service));
    if let Some(error) = config_error {
        app.modal.show_error(t().modal.config_error_title, error);
    }

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Application exited with error: {e:#}");
    }

    // 8. 返回结果
    result
}
