//! 机柜相关类型定义

use serde::{Deserialize, Serialize};

/// 机柜角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RackType {
    /// 主配线区（唯一的分发根节点）
    #[serde(rename = "MDA")]
    Mda,
    /// 设备配线区（计算机柜）
    #[serde(rename = "EDA")]
    Eda,
    /// 水平配线区（预留，当前布局未使用）
    #[serde(rename = "HDA")]
    Hda,
}

impl RackType {
    /// 机柜 ID 前缀
    pub fn id_prefix(self) -> &'static str {
        match self {
            RackType::Mda => "mda",
            RackType::Eda => "eda",
            RackType::Hda => "hda",
        }
    }
}

/// 机柜状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RackStatus {
    /// 在线
    Active,
    /// 离线
    Inactive,
    /// 维护中
    Maintenance,
}

/// 机柜
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rack {
    /// 机柜 ID（EDA 为 `eda-<col>-<row>`）
    pub id: String,
    /// 网格 X
    pub x: i32,
    /// 网格 Y
    pub y: i32,
    /// 机柜角色
    #[serde(rename = "type")]
    pub rack_type: RackType,
    /// 机柜状态
    pub status: RackStatus,
    /// 所属区域 ID（仅 EDA）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    /// 功耗（kW，仅 EDA）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_draw: Option<f64>,
    /// 温度（°F，仅 EDA）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl Rack {
    /// 创建 MDA 机柜（无区域、无指标）
    #[must_use]
    pub fn mda(id: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            rack_type: RackType::Mda,
            status: RackStatus::Active,
            zone_id: None,
            power_draw: None,
            temperature: None,
        }
    }

    /// 创建 EDA 机柜
    #[must_use]
    pub fn eda(
        id: impl Into<String>,
        x: i32,
        y: i32,
        status: RackStatus,
        power_draw: f64,
        temperature: f64,
    ) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            rack_type: RackType::Eda,
            status,
            zone_id: Some(zone_id_for_column(x)),
            power_draw: Some(power_draw),
            temperature: Some(temperature),
        }
    }

    /// 是否在线
    pub fn is_active(&self) -> bool {
        self.status == RackStatus::Active
    }

    /// 是否离线
    pub fn is_offline(&self) -> bool {
        self.status == RackStatus::Inactive
    }

    /// 是否为 MDA
    pub fn is_mda(&self) -> bool {
        self.rack_type == RackType::Mda
    }

    /// 是否为 EDA
    pub fn is_eda(&self) -> bool {
        self.rack_type == RackType::Eda
    }
}

/// 每个区域覆盖的网格列数
pub const COLUMNS_PER_ZONE: i32 = 6;

/// 根据网格列计算所属区域 ID（`zone-{floor(x/6)+1}`）
#[must_use]
pub fn zone_id_for_column(x: i32) -> String {
    format!("zone-{}", x.div_euclid(COLUMNS_PER_ZONE) + 1)
}
