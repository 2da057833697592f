//! 区域类型定义

use serde::{Deserialize, Serialize};

/// 区域（EDA 机柜的纵向分带）
///
/// 坐标与尺寸均以网格单元为单位，会话期间不会变更。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// 区域 ID（如 `zone-1`）
    pub id: String,
    /// 显示名称（如 `Zone A`）
    pub name: String,
    /// 左上角网格 X
    pub start_x: i32,
    /// 左上角网格 Y
    pub start_y: i32,
    /// 宽度（网格单元）
    pub width: i32,
    /// 高度（网格单元）
    pub height: i32,
}

impl Zone {
    /// 创建区域
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_x: i32,
        start_y: i32,
        width: i32,
        height: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_x,
            start_y,
            width,
            height,
        }
    }

    /// 网格列是否落在本区域的名义范围内（不考虑视觉间隙）
    #[must_use]
    pub fn spans_column(&self, x: i32) -> bool {
        x >= self.start_x && x < self.start_x + self.width
    }
}
