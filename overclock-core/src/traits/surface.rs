//! 绘图表面抽象
//!
//! 渲染器只产出指令，具体的像素写入由平台层实现本 trait 完成
//! （终端 Canvas、位图缓冲区、测试记录器等）。

use crate::types::{Dash, DrawCommand, Rgba};
use crate::utils::geometry::{LogicalRect, Point};

/// 2D 即时模式绘图表面
pub trait Surface {
    /// 表面当前是否可绘制（不可用时所有绘制操作均为空操作）
    fn is_available(&self) -> bool {
        true
    }

    /// 填充矩形
    fn fill_rect(&mut self, rect: LogicalRect, color: Rgba);

    /// 描边矩形
    fn stroke_rect(&mut self, rect: LogicalRect, color: Rgba, dash: Option<Dash>);

    /// 折线
    fn stroke_path(&mut self, points: &[Point], color: Rgba, dash: Option<Dash>);

    /// 填充圆
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    /// 描边圆
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba);

    /// 文本
    fn text(&mut self, at: Point, text: &str, color: Rgba);

    /// 执行一条指令
    fn execute(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::FillRect { rect, color } => self.fill_rect(*rect, *color),
            DrawCommand::StrokeRect { rect, color, dash } => self.stroke_rect(*rect, *color, *dash),
            DrawCommand::Path {
                points,
                color,
                dash,
            } => self.stroke_path(points, *color, *dash),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => self.fill_circle(*center, *radius, *color),
            DrawCommand::StrokeCircle {
                center,
                radius,
                color,
            } => self.stroke_circle(*center, *radius, *color),
            DrawCommand::Text { at, text, color } => self.text(*at, text, *color),
        }
    }
}

/// 将收到的指令原样记录下来的表面（测试与调试用）
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// 已记录的指令
    pub commands: Vec<DrawCommand>,
    /// 模拟表面不可用
    pub unavailable: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建一个不可用的表面
    pub fn unavailable() -> Self {
        Self {
            commands: Vec::new(),
            unavailable: true,
        }
    }
}

impl Surface for RecordingSurface {
    fn is_available(&self) -> bool {
        !self.unavailable
    }

    fn fill_rect(&mut self, rect: LogicalRect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: LogicalRect, color: Rgba, dash: Option<Dash>) {
        self.commands.push(DrawCommand::StrokeRect { rect, color, dash });
    }

    fn stroke_path(&mut self, points: &[Point], color: Rgba, dash: Option<Dash>) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            color,
            dash,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
        });
    }

    fn text(&mut self, at: Point, text: &str, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            at,
            text: text.to_string(),
            color,
        });
    }
}
