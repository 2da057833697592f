//! Overclock Core Library
//!
//! Provides the layout-view logic of the Overclock datacenter dashboard, including:
//! - Facility Model (zones, racks, MDA → EDA fiber links, aggregate stats)
//! - Selection & Navigation state machine (keyboard cursor + mouse selection)
//! - Spatial hit-testing (pixel → grid → zone / column / rack)
//! - Renderer (drawing-command list replayed onto any 2D surface) and hover tooltips
//!
//! This library is platform-independent: drawing goes through the [`Surface`] trait,
//! so any immediate-mode surface (terminal canvas, raster buffer, test recorder) can host it.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{FacilityModel, LayoutInput, LayoutState};
pub use traits::Surface;
