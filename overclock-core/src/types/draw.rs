//! 绘图指令类型定义

use crate::utils::geometry::{LogicalRect, Point};

/// RGBA 颜色（alpha ∈ [0, 1]）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// 不透明颜色
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// 半透明颜色
    pub const fn translucent(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// 虚线样式（实线段长度, 间隔长度）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    pub on: f64,
    pub off: f64,
}

impl Dash {
    pub const fn new(on: f64, off: f64) -> Self {
        Self { on, off }
    }
}

/// 单条绘图指令
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// 填充矩形
    FillRect { rect: LogicalRect, color: Rgba },
    /// 描边矩形
    StrokeRect {
        rect: LogicalRect,
        color: Rgba,
        dash: Option<Dash>,
    },
    /// 折线
    Path {
        points: Vec<Point>,
        color: Rgba,
        dash: Option<Dash>,
    },
    /// 填充圆
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    /// 描边圆
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    /// 文本标签（`at` 为基线左端）
    Text { at: Point, text: String, color: Rgba },
}
