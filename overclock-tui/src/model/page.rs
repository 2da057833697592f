//! 页面状态定义

use super::NavItemId;
use crate::i18n::t;

/// 页面枚举（对应侧边栏的五个视图）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 仪表盘
    #[default]
    Dashboard,
    /// 机房布局
    Layout,
    /// Token 吞吐图表
    Tokens,
    /// 电力图表
    Power,
    /// 散热图表
    Thermal,
}

impl Page {
    /// 获取页面标题
    pub fn title(self) -> &'static str {
        let nav = &t().nav;
        match self {
            Page::Dashboard => nav.dashboard,
            Page::Layout => nav.layout,
            Page::Tokens => nav.tokens,
            Page::Power => nav.power,
            Page::Thermal => nav.thermal,
        }
    }
}

impl From<NavItemId> for Page {
    fn from(id: NavItemId) -> Self {
        match id {
            NavItemId::Dashboard => Page::Dashboard,
            NavItemId::Layout => Page::Layout,
            NavItemId::Tokens => Page::Tokens,
            NavItemId::Power => Page::Power,
            NavItemId::Thermal => Page::Thermal,
        }
    }
}
