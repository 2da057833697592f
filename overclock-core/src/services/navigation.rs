//! 选择与导航状态机
//!
//! 键盘光标（模式 + 位置）与鼠标点击都汇入同一个 [`LayoutState`]，
//! 所有变更只经由 [`LayoutState::apply`] 一个入口完成，
//! “由光标推导选择” 作为一个原子步骤执行。

use crate::services::hit_test::hit_test;
use crate::services::tooltip::{tooltip_at, Tooltip};
use crate::services::FacilityModel;
use crate::types::{zone_id_for_column, RackType, Selection};
use crate::utils::geometry::{Point, GRID_COLUMNS, RACK_ROW_MAX, RACK_ROW_MIN};

/// 导航模式（按固定顺序循环：区域 → 列 → 机柜 → 区域）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavMode {
    #[default]
    Zone,
    Column,
    Rack,
}

impl NavMode {
    /// 下一个模式
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            NavMode::Zone => NavMode::Column,
            NavMode::Column => NavMode::Rack,
            NavMode::Rack => NavMode::Zone,
        }
    }

    /// 模式名称
    pub fn label(self) -> &'static str {
        match self {
            NavMode::Zone => "zone",
            NavMode::Column => "column",
            NavMode::Rack => "rack",
        }
    }

    /// 水平移动规则
    pub fn horizontal(self) -> AxisRule {
        match self {
            NavMode::Zone => AxisRule::new(6, 0, 12),
            NavMode::Column | NavMode::Rack => AxisRule::new(1, 0, GRID_COLUMNS - 1),
        }
    }

    /// 垂直移动规则；区域与列模式下禁止垂直移动
    pub fn vertical(self) -> Option<AxisRule> {
        match self {
            NavMode::Rack => Some(AxisRule::new(1, RACK_ROW_MIN, RACK_ROW_MAX)),
            NavMode::Zone | NavMode::Column => None,
        }
    }
}

/// 单轴移动规则：步长与闭区间 `[min, max]`，越界回绕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRule {
    pub step: i32,
    pub min: i32,
    pub max: i32,
}

impl AxisRule {
    pub const fn new(step: i32, min: i32, max: i32) -> Self {
        Self { step, min, max }
    }

    /// 正向移动：位于上界时回到下界
    pub fn forward(self, value: i32) -> i32 {
        if value >= self.max {
            self.min
        } else {
            (value + self.step).clamp(self.min, self.max)
        }
    }

    /// 反向移动：位于下界时回到上界
    pub fn backward(self, value: i32) -> i32 {
        if value <= self.min {
            self.max
        } else {
            (value - self.step).clamp(self.min, self.max)
        }
    }
}

/// 方向键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// 键盘光标（网格坐标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

impl Cursor {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// 按模式规则移动后的新位置
    #[must_use]
    pub fn moved(self, mode: NavMode, direction: Direction) -> Self {
        let h = mode.horizontal();
        match (direction, mode.vertical()) {
            (Direction::Left, _) => Self::new(h.backward(self.x), self.y),
            (Direction::Right, _) => Self::new(h.forward(self.x), self.y),
            (Direction::Up, Some(v)) => Self::new(self.x, v.backward(self.y)),
            (Direction::Down, Some(v)) => Self::new(self.x, v.forward(self.y)),
            (Direction::Up | Direction::Down, None) => self,
        }
    }
}

/// 状态机输入
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutInput {
    /// 切换到下一个导航模式（不改变光标与选择）
    AdvanceMode,
    /// 方向键移动光标，并由移动后的光标重新推导选择
    Move(Direction),
    /// 鼠标点击（逻辑像素）
    Click(Point),
    /// 鼠标移动（逻辑像素）
    Hover(Point),
    /// 鼠标离开画布
    Leave,
    /// 清除选择
    ClearSelection,
}

/// 布局视图状态
///
/// 选择状态是 “光标投影 + 鼠标覆盖” 的结果，不单独维护。
/// 悬停提示独立于选择。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutState {
    mode: NavMode,
    cursor: Cursor,
    selection: Selection,
    hover: Option<Tooltip>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前导航模式
    pub fn mode(&self) -> NavMode {
        self.mode
    }

    /// 当前光标
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// 当前选择
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// 当前悬停提示
    pub fn hover(&self) -> Option<&Tooltip> {
        self.hover.as_ref()
    }

    /// 视图卸载时重置
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 唯一的状态更新入口；返回可见状态是否发生变化
    pub fn apply(&mut self, facility: &FacilityModel, input: LayoutInput) -> bool {
        let before = self.clone();

        match input {
            LayoutInput::AdvanceMode => {
                self.mode = self.mode.next();
                log::debug!("Navigation mode -> {}", self.mode.label());
            }
            LayoutInput::Move(direction) => {
                self.cursor = self.cursor.moved(self.mode, direction);
                if let Some(selection) = selection_for_cursor(facility, self.mode, self.cursor) {
                    self.selection = selection;
                }
            }
            LayoutInput::Click(p) => {
                self.selection = hit_test(facility, p);
            }
            LayoutInput::Hover(p) => {
                self.hover = tooltip_at(facility, p);
            }
            LayoutInput::Leave => {
                self.hover = None;
            }
            LayoutInput::ClearSelection => {
                self.selection = Selection::None;
            }
        }

        let changed = *self != before;
        if changed && self.selection != before.selection {
            log::debug!("Selection {} -> {}", before.selection, self.selection);
        }
        changed
    }
}

/// 由 (模式, 光标) 推导选择
///
/// 机柜模式下只有 `eda-{x}-{y}` 确实存在时才产生选择，否则返回 `None`
/// （调用方保持原选择）。
pub fn selection_for_cursor(
    facility: &FacilityModel,
    mode: NavMode,
    cursor: Cursor,
) -> Option<Selection> {
    match mode {
        NavMode::Zone => Some(Selection::Zone(zone_id_for_column(cursor.x))),
        NavMode::Column => Some(Selection::Column(cursor.x)),
        NavMode::Rack => {
            let rack_id = format!("{}-{}-{}", RackType::Eda.id_prefix(), cursor.x, cursor.y);
            facility
                .find_rack(&rack_id)
                .map(|rack| Selection::Rack(rack.id.clone()))
        }
    }
}
