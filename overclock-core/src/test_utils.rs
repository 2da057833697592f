//! 测试辅助模块
//!
//! 提供可复现的设施模型工厂方法。

use crate::services::FacilityModel;
use crate::types::{Rack, RackStatus, Zone};

/// 测试使用的固定种子
pub const TEST_SEED: u64 = 42;

/// 标准布局（固定种子）
pub fn standard_facility() -> FacilityModel {
    FacilityModel::with_seed(TEST_SEED).unwrap()
}

/// 标准布局并初始化链路
pub fn connected_facility() -> FacilityModel {
    let mut facility = standard_facility();
    facility.initialize_connections();
    facility
}

/// 只有 MDA 与两个 EDA 的最小布局
pub fn small_facility() -> FacilityModel {
    let zones = vec![
        Zone::new("zone-1", "Zone A", 0, 3, 6, 12),
        Zone::new("zone-2", "Zone B", 6, 3, 6, 12),
        Zone::new("zone-3", "Zone C", 12, 3, 6, 12),
    ];
    let racks = vec![
        Rack::mda("mda-1", 9, 1),
        Rack::eda("eda-0-0", 0, 3, RackStatus::Active, 6.0, 70.0),
        Rack::eda("eda-1-0", 1, 3, RackStatus::Maintenance, 8.0, 72.0),
    ];
    FacilityModel::new(zones, racks).unwrap()
}
