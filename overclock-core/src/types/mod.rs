//! 类型定义模块

mod connection;
mod draw;
mod rack;
mod selection;
mod stats;
mod zone;

pub use connection::{Connection, ConnectionType};
pub use draw::{Dash, DrawCommand, Rgba};
pub use rack::{zone_id_for_column, Rack, RackStatus, RackType, COLUMNS_PER_ZONE};
pub use selection::{Selection, SelectionKind};
pub use stats::RackStats;
pub use zone::Zone;
