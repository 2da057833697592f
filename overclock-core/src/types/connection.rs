//! 链路类型定义

use serde::{Deserialize, Serialize};

/// 链路介质
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// 光纤
    Fiber,
    /// 铜缆
    Copper,
}

/// 两个机柜之间的物理链路（无向）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// 起点机柜 ID
    pub from: String,
    /// 终点机柜 ID
    pub to: String,
    /// 链路介质
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,
}

impl Connection {
    /// 创建链路
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, connection_type: ConnectionType) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            connection_type,
        }
    }

    /// 创建光纤链路
    #[must_use]
    pub fn fiber(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(from, to, ConnectionType::Fiber)
    }

    /// 是否连接 `a` 与 `b`（不区分方向）
    pub fn links(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// 是否以 `rack_id` 为任一端点
    pub fn touches(&self, rack_id: &str) -> bool {
        self.from == rack_id || self.to == rack_id
    }
}
