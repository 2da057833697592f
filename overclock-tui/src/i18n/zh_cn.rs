//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, DashboardTexts, HelpTexts, HintTexts, KeyNames, LayoutTexts,
    ModalTexts, NavTexts, PlaceholderTexts, SelectionTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Overclock",
        quit: "退出",
        close: "关闭",
        error: "错误",
        not_available: "无",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows: "↑↓←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            navigate: "导航",
            switch_panel: "切换面板",
            open: "打开",
            next_mode: "切换模式",
            clear: "清除选择",
            help: "帮助",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "主页",
        dashboard: "仪表盘",
        layout: "布局",
        tokens: "Token",
        power: "电力",
        thermal: "散热",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    dashboard: DashboardTexts {
        gpus_online: "在线 GPU",
        power_draw: "功耗",
        token_throughput: "Token 吞吐",
        pue: "PUE",
        temperature: "温度",
        unit_utilization: "利用率",
        unit_megawatts: "兆瓦",
        unit_tokens: "每秒 Token 数",
        unit_ratio: "比值",
        unit_fahrenheit: "华氏度",
        facility: "设施",
    },

    layout: LayoutTexts {
        subtitle: "MDA（主配线区）与 EDA（设备配线区）配置",
        canvas: "机房布局",
        navigation: "导航",
        mode: "模式：",
        mode_zone: "区域",
        mode_column: "列",
        mode_rack: "机柜",
        controls: "操作：",
        stats: "统计：",
        total_racks: "机柜总数：",
        active: "在线：",
        zones: "区域：",
        details: SelectionTexts {
            zone_details: "区域详情",
            column_details: "列详情",
            rack_details: "机柜详情",
            nothing_selected: "点击或使用方向键进行选择",
            zone: "区域：",
            column: "列：",
            racks_online: "在线机柜：",
            total_power: "总功耗：",
            avg_temp: "平均温度：",
            systems: "系统：",
            gpus: "GPU：",
            network: "网络：",
            online: "在线",
            offline: "离线",
            maintenance: "维护中",
            rack_id: "机柜 ID：",
            power_draw: "功耗：",
            temperature: "温度：",
            status: "状态：",
            distribution_root: "主配线上联",
        },
    },

    placeholder: PlaceholderTexts {
        message: "终端中暂不支持图表视图",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        close_hint: "按 Esc 或 Enter 关闭",
        config_error_title: "配置错误",
        help: HelpTexts {
            title: "帮助",
            global: "全局快捷键",
            layout: "布局视图",
            switch_panel: "切换面板",
            move_or_navigate: "导航 / 移动光标",
            open_or_mode: "打开页面 / 切换模式",
            clear_selection: "清除选择",
            mouse: "点击选择，悬停查看详情",
            toggle_theme: "切换主题",
            cycle_language: "切换语言",
            show_help: "显示帮助",
            quit: "退出",
        },
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        theme_changed: "主题已切换",
        language_changed: "语言已切换",
        links_initialized: "条光纤链路已初始化",
        save_failed: "配置保存失败",
    },
};
