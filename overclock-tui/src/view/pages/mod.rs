//! 页面视图

pub mod dashboard;
pub mod facility;
pub mod placeholder;
