//! Drawing surface abstraction trait definition

mod surface;

pub use surface::{RecordingSurface, Surface};
