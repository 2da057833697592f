//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：帮助与错误弹窗的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `dashboard.*`, `layout.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 仪表盘文本
    pub dashboard: DashboardTexts,
    /// 布局视图文本
    pub layout: LayoutTexts,
    /// 占位页面文本
    pub placeholder: PlaceholderTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
    pub close: &'static str,
    pub error: &'static str,
    /// 空集合的平均值
    pub not_available: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows: &'static str,    // "↑↓←→"
    pub arrows_ud: &'static str, // "↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,     // "导航" / "Navigate"
    pub switch_panel: &'static str, // "切换面板" / "Switch panel"
    pub open: &'static str,         // "打开" / "Open"
    pub next_mode: &'static str,    // "切换模式" / "Toggle mode"
    pub clear: &'static str,        // "清除选择" / "Clear"
    pub help: &'static str,         // "帮助" / "Help"
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub dashboard: &'static str,
    pub layout: &'static str,
    pub tokens: &'static str,
    pub power: &'static str,
    pub thermal: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 仪表盘文本
pub struct DashboardTexts {
    pub gpus_online: &'static str,
    pub power_draw: &'static str,
    pub token_throughput: &'static str,
    pub pue: &'static str,
    pub temperature: &'static str,
    pub unit_utilization: &'static str,
    pub unit_megawatts: &'static str,
    pub unit_tokens: &'static str,
    pub unit_ratio: &'static str,
    pub unit_fahrenheit: &'static str,
    pub facility: &'static str,
}

/// 布局视图文本
pub struct LayoutTexts {
    pub subtitle: &'static str,
    pub canvas: &'static str,
    /// 导航面板
    pub navigation: &'static str,
    pub mode: &'static str,
    pub mode_zone: &'static str,
    pub mode_column: &'static str,
    pub mode_rack: &'static str,
    pub controls: &'static str,
    pub stats: &'static str,
    pub total_racks: &'static str,
    pub active: &'static str,
    pub zones: &'static str,
    /// 选择详情面板
    pub details: SelectionTexts,
}

/// 选择详情面板文本
pub struct SelectionTexts {
    pub zone_details: &'static str,
    pub column_details: &'static str,
    pub rack_details: &'static str,
    pub nothing_selected: &'static str,
    pub zone: &'static str,
    pub column: &'static str,
    pub racks_online: &'static str,
    pub total_power: &'static str,
    pub avg_temp: &'static str,
    pub systems: &'static str,
    pub gpus: &'static str,
    pub network: &'static str,
    pub online: &'static str,
    pub offline: &'static str,
    pub maintenance: &'static str,
    pub rack_id: &'static str,
    pub power_draw: &'static str,
    pub temperature: &'static str,
    pub status: &'static str,
    pub distribution_root: &'static str,
}

/// 占位页面文本（图表视图）
pub struct PlaceholderTexts {
    pub message: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub close_hint: &'static str,
    pub config_error_title: &'static str,
    pub help: HelpTexts,
}

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub layout: &'static str,
    pub switch_panel: &'static str,
    pub move_or_navigate: &'static str,
    pub open_or_mode: &'static str,
    pub clear_selection: &'static str,
    pub mouse: &'static str,
    pub toggle_theme: &'static str,
    pub cycle_language: &'static str,
    pub show_help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub theme_changed: &'static str,
    pub language_changed: &'static str,
    pub links_initialized: &'static str,
    pub save_failed: &'static str,
}
