//! 布局视图服务层
//!
//! ```text
//!   鼠标 / 键盘
//!       │
//!       ▼
//! ┌──────────────┐   hit_test / tooltip_at   ┌──────────────┐
//! │ LayoutState  │ ────────────────────────► │ FacilityModel│
//! │  (navigation)│ ◄──────────────────────── │  (facility)  │
//! └──────┬───────┘        只读查询            └──────┬───────┘
//!        │ selection                                 │
//!        ▼                                           ▼
//! ┌──────────────┐        DrawList          ┌──────────────┐
//! │   renderer   │ ───────────────────────► │   Surface    │
//! └──────────────┘                          └──────────────┘
//! ```

mod facility;
mod hit_test;
mod navigation;
mod renderer;
mod tooltip;

pub use facility::{FacilityModel, EDA_ROWS, GPUS_PER_RACK, MDA_RACK_ID, OFFLINE_RACK_ID};
pub use hit_test::{column_at, hit_test, rack_at, zone_at};
pub use navigation::{
    selection_for_cursor, AxisRule, Cursor, Direction, LayoutInput, LayoutState, NavMode,
};
pub use renderer::{dot_color, paint, palette, render, ring_color, DrawList, ZONE_DASH};
pub use tooltip::{tooltip_at, HoverTarget, Tooltip};
