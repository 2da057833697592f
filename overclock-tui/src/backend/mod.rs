//!
//! src/backend/mod.rs
//! Backend 层：与界面无关的外部资源
//!
//! 布局视图的数据全部来自 overclock-core 在内存中生成的设施模型，
//! 这里只剩配置文件的读写。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（JSON）
//!
//!
//!     配置文件位置：
//!         <config_dir>/overclock/config.json
//!
//!         {
//!             "theme": "dark",            // dark | light
//!             "language": "en-US",        // en-US | zh-CN
//!             "seed": 42,                 // 可选，固定设施生成结果
//!             "tickRateMs": 100,          // 事件轮询间隔
//!             "logLevel": "info"          // 可被 OVERCLOCK_LOG 覆盖
//!         }
//!
//!     所有字段都有默认值，文件不存在时使用默认配置；
//!     文件损坏时同样回退默认配置，并在启动后弹出错误提示。
//!

mod config_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
