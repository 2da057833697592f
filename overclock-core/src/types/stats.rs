//! 聚合统计类型定义

use serde::Serialize;

/// 一组机柜的聚合统计
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RackStats {
    /// 机柜总数
    pub total_racks: usize,
    /// 在线机柜数
    pub active_racks: usize,
    /// 总功耗（kW）
    pub total_power: f64,
    /// 平均温度（°F），空集合时为 `None`
    pub avg_temperature: Option<f64>,
    /// GPU 总数
    pub total_gpus: usize,
    /// 在线 GPU 数
    pub active_gpus: usize,
}

impl RackStats {
    /// 集合是否为空
    pub fn is_empty(&self) -> bool {
        self.total_racks == 0
    }
}
