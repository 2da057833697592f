//! 应用主状态

use overclock_core::services::{FacilityModel, LayoutState};
use ratatui::layout::Rect;

use super::{FocusPanel, ModalState, NavigationState, Page};
use crate::backend::{AppConfig, ConfigService};
use crate::i18n::t;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 布局视图 ===
    /// 设施模型（唯一写入者是 update 层）
    pub facility: FacilityModel,
    /// 布局视图的选择与导航状态
    pub layout: LayoutState,
    /// 最近一次绘制时的终端区域（鼠标坐标换算用）
    pub viewport: Rect,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前配置
    pub config: AppConfig,
    config_service: Box<dyn ConfigService>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: AppConfig, config_service: Box<dyn ConfigService>) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!("Generating facility with seed {seed}");

        let mut modal = ModalState::new();
        let facility = match FacilityModel::with_seed(seed) {
            Ok(facility) => facility,
            Err(e) => {
                if e.is_expected() {
                    tracing::warn!("Facility generation failed: {e}");
                } else {
                    tracing::error!("Facility generation failed: {e}");
                }
                modal.show_error(t().common.error, e.to_string());
                FacilityModel::default()
            }
        };

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Dashboard,
            status_message: None,
            facility,
            layout: LayoutState::new(),
            viewport: Rect::default(),
            modal,
            config,
            config_service,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 将当前配置写回磁盘，失败时只提示不中断
    pub fn persist_config(&mut self) {
        if let Err(e) = self.config_service.save(&self.config) {
            tracing::warn!("Failed to save config: {e:#}");
            self.set_status(format!("{}: {e}", t().status_bar.save_failed));
        }
    }
}
