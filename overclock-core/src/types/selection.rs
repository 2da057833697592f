//! 选择状态类型定义

use std::fmt;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// 选择类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKind {
    None,
    Zone,
    Column,
    Rack,
}

/// 当前选中的实体
///
/// 列选择以列序号保存，`id()` 输出其十进制字符串形式。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// 未选择
    #[default]
    None,
    /// 选中区域（区域 ID）
    Zone(String),
    /// 选中列（列序号）
    Column(i32),
    /// 选中机柜（机柜 ID）
    Rack(String),
}

impl Selection {
    /// 选择类别
    pub fn kind(&self) -> SelectionKind {
        match self {
            Selection::None => SelectionKind::None,
            Selection::Zone(_) => SelectionKind::Zone,
            Selection::Column(_) => SelectionKind::Column,
            Selection::Rack(_) => SelectionKind::Rack,
        }
    }

    /// 选择 ID 的字符串形式
    pub fn id(&self) -> Option<String> {
        match self {
            Selection::None => None,
            Selection::Zone(id) | Selection::Rack(id) => Some(id.clone()),
            Selection::Column(col) => Some(col.to_string()),
        }
    }

    /// 从 (类别, ID) 还原选择
    pub fn from_parts(kind: SelectionKind, id: Option<&str>) -> CoreResult<Self> {
        let require = |id: Option<&str>| {
            id.map(str::to_string).ok_or_else(|| {
                CoreError::Validation(format!("selection of kind {kind:?} requires an id"))
            })
        };

        match kind {
            SelectionKind::None => Ok(Selection::None),
            SelectionKind::Zone => Ok(Selection::Zone(require(id)?)),
            SelectionKind::Rack => Ok(Selection::Rack(require(id)?)),
            SelectionKind::Column => {
                let raw = require(id)?;
                raw.trim()
                    .parse::<i32>()
                    .map(Selection::Column)
                    .map_err(|_| CoreError::Validation(format!("invalid column id: '{raw}'")))
            }
        }
    }

    /// 是否选中了指定区域
    pub fn is_zone(&self, zone_id: &str) -> bool {
        matches!(self, Selection::Zone(id) if id == zone_id)
    }

    /// 是否选中了指定机柜
    pub fn is_rack(&self, rack_id: &str) -> bool {
        matches!(self, Selection::Rack(id) if id == rack_id)
    }

    /// 是否为空选择
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::None => write!(f, "none"),
            Selection::Zone(id) => write!(f, "zone:{id}"),
            Selection::Column(col) => write!(f, "column:{col}"),
            Selection::Rack(id) => write!(f, "rack:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_id_is_stringified_index() {
        let sel = Selection::Column(7);
        assert_eq!(sel.kind(), SelectionKind::Column);
        assert_eq!(sel.id().as_deref(), Some("7"));
    }

    #[test]
    fn from_parts_parses_column() {
        let sel = Selection::from_parts(SelectionKind::Column, Some("12")).unwrap();
        assert_eq!(sel, Selection::Column(12));
    }

    #[test]
    fn from_parts_rejects_bad_column() {
        let err = Selection::from_parts(SelectionKind::Column, Some("twelve")).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn from_parts_requires_id_for_rack() {
        assert!(Selection::from_parts(SelectionKind::Rack, None).is_err());
        assert_eq!(
            Selection::from_parts(SelectionKind::None, None).unwrap(),
            Selection::None
        );
    }

    #[test]
    fn membership_checks_match_kind_and_id() {
        let zone = Selection::Zone("zone-1".into());
        assert!(zone.is_zone("zone-1"));
        assert!(!zone.is_zone("zone-2"));
        assert!(!zone.is_rack("zone-1"));
        assert!(Selection::Rack("eda-1-0".into()).is_rack("eda-1-0"));
    }
}
