//! 英文翻译 (en-US)

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
        quit: "Quit",
        close: "Close",
        error: "Error",
        not_available: "N/A",
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
            navigate: "Navigate",
            switch_panel: "Switch panel",
            open: "Open",
            next_mode: "Toggle mode",
            clear: "Clear",
            help: "Help",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Home",
        dashboard: "Dash",
        layout: "Layout",
        tokens: "Tokens",
        power: "Power",
        thermal: "Thermal",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    dashboard: DashboardTexts {
        gpus_online: "GPUs Online",
        power_draw: "Power Draw",
        token_throughput: "Token Throughput",
        pue: "PUE",
        temperature: "Temperature",
        unit_utilization: "utilization",
        unit_megawatts: "megawatts",
        unit_tokens: "tokens per second",
        unit_ratio: "ratio",
        unit_fahrenheit: "fahrenheit",
        facility: "Facility",
    },

    layout: LayoutTexts {
        subtitle: "MDA (Main Distribution Area) and EDA (Equipment Distribution Area) Configuration",
        canvas: "Datacenter Layout",
        navigation: "Navigation",
        mode: "Mode:",
        mode_zone: "Zone",
        mode_column: "Column",
        mode_rack: "Rack",
        controls: "Controls:",
        stats: "Stats:",
        total_racks: "Total Racks:",
        active: "Active:",
        zones: "Zones:",
        details: SelectionTexts {
            zone_details: "Zone Details",
            column_details: "Column Details",
            rack_details: "Rack Details",
            nothing_selected: "Click or use the arrow keys to select",
            zone: "Zone:",
            column: "Column:",
            racks_online: "Racks Online:",
            total_power: "Total Power:",
            avg_temp: "Avg Temp:",
            systems: "Systems:",
            gpus: "GPUs:",
            network: "Network:",
            online: "Online",
            offline: "Offline",
            maintenance: "Maintenance",
            rack_id: "Rack ID:",
            power_draw: "Power Draw:",
            temperature: "Temperature:",
            status: "Status:",
            distribution_root: "Main distribution uplink",
        },
    },

    placeholder: PlaceholderTexts {
        message: "Chart view is not available in the terminal",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        close_hint: "Press Esc or Enter to close",
        config_error_title: "Config Error",
        help: HelpTexts {
            title: "Help",
            global: "Global shortcuts",
            layout: "Layout view",
            switch_panel: "Switch panel",
            move_or_navigate: "Navigate / move cursor",
            open_or_mode: "Open page / toggle mode",
            clear_selection: "Clear selection",
            mouse: "Click to select, hover for details",
            toggle_theme: "Toggle theme",
            cycle_language: "Switch language",
            show_help: "Show help",
            quit: "Quit",
        },
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        theme_changed: "Theme switched",
        language_changed: "Language switched",
        links_initialized: "fiber links initialized",
        save_failed: "Failed to save config",
    },
};
