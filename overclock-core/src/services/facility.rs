//! 设施模型：区域、机柜与 MDA → EDA 光纤链路

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CoreError, CoreResult};
use crate::types::{
    zone_id_for_column, Connection, Rack, RackStats, RackStatus, RackType, Zone,
};
use crate::utils::geometry::{GRID_COLUMNS, RACK_ROW_MIN};

/// 每个机柜的 GPU 数量
pub const GPUS_PER_RACK: usize = 32;

/// 每列 EDA 机柜数量
pub const EDA_ROWS: i32 = 12;

/// 标准布局中的 MDA 机柜 ID
pub const MDA_RACK_ID: &str = "mda-1";

/// 标准布局中固定离线的机柜（第 5 列第 6 行）
pub const OFFLINE_RACK_ID: &str = "eda-5-6";

/// 设施模型
///
/// 由应用层持有，整个会话期间存活。读路径（命中测试、渲染、统计）共享，
/// 写路径只有链路初始化与少量辅助变更。
#[derive(Debug, Clone, Default)]
pub struct FacilityModel {
    zones: Vec<Zone>,
    racks: Vec<Rack>,
    connections: Vec<Connection>,
}

impl FacilityModel {
    /// 从区域与机柜列表构建模型，并校验不变量
    ///
    /// - 恰好一个 MDA 机柜
    /// - 机柜 ID 唯一
    /// - 每个 EDA 机柜的 `zone_id` 等于 `zone-{floor(x/6)+1}` 且该区域存在
    pub fn new(zones: Vec<Zone>, racks: Vec<Rack>) -> CoreResult<Self> {
        let mda_count = racks.iter().filter(|r| r.is_mda()).count();
        if mda_count != 1 {
            return Err(CoreError::Validation(format!(
                "facility needs exactly one MDA rack, found {mda_count}"
            )));
        }

        let model = Self {
            zones,
            racks: Vec::with_capacity(racks.len()),
            connections: Vec::new(),
        };

        racks.into_iter().try_fold(model, |mut model, rack| {
            model.insert_rack(rack)?;
            Ok(model)
        })
    }

    /// 生成标准设施布局（3 个区域，1 个 MDA，18×12 个 EDA）
    pub fn generate<R: Rng>(rng: &mut R) -> CoreResult<Self> {
        let zones = vec![
            Zone::new("zone-1", "Zone A", 0, 3, 6, 12),
            Zone::new("zone-2", "Zone B", 6, 3, 6, 12),
            Zone::new("zone-3", "Zone C", 12, 3, 6, 12),
        ];

        let mut racks = Vec::with_capacity((GRID_COLUMNS * EDA_ROWS) as usize + 1);
        racks.push(Rack::mda(MDA_RACK_ID, 9, 1));

        for col in 0..GRID_COLUMNS {
            for row in 0..EDA_ROWS {
                let id = format!("{}-{col}-{row}", RackType::Eda.id_prefix());
                let rack = if id == OFFLINE_RACK_ID {
                    Rack::eda(id, col, row + RACK_ROW_MIN, RackStatus::Inactive, 0.0, 0.0)
                } else {
                    // 5-10 kW, 65-75°F
                    let power = rng.random_range(5.0..10.0);
                    let temperature = rng.random_range(65.0..75.0);
                    Rack::eda(id, col, row + RACK_ROW_MIN, RackStatus::Active, power, temperature)
                };
                racks.push(rack);
            }
        }

        Self::new(zones, racks)
    }

    /// 以固定种子生成标准布局（结果可复现）
    pub fn with_seed(seed: u64) -> CoreResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(&mut rng)
    }

    // ===== 读取 =====

    /// 全部区域
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// 全部机柜
    pub fn racks(&self) -> &[Rack] {
        &self.racks
    }

    /// 全部链路
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// 按 ID 查找机柜
    pub fn find_rack(&self, id: &str) -> Option<&Rack> {
        self.racks.iter().find(|r| r.id == id)
    }

    /// 按 ID 查找区域
    pub fn find_zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// 分发根节点
    pub fn mda(&self) -> Option<&Rack> {
        self.racks.iter().find(|r| r.is_mda())
    }

    // ===== 变更 =====

    /// 重建 MDA → 每个 EDA 的光纤链路，替换现有链路集合
    ///
    /// 幂等。没有 MDA 时保持原链路不变，返回 0。
    pub fn initialize_connections(&mut self) -> usize {
        let Some(mda) = self.mda() else {
            log::warn!("No MDA rack in facility, skipping connection initialization");
            return 0;
        };

        let connections: Vec<Connection> = self
            .racks
            .iter()
            .filter(|r| r.is_eda())
            .map(|rack| Connection::fiber(mda.id.clone(), rack.id.clone()))
            .collect();

        log::debug!(
            "Initialized {} fiber links from {}",
            connections.len(),
            mda.id
        );

        self.connections = connections;
        self.connections.len()
    }

    /// 添加机柜
    pub fn add_rack(&mut self, rack: Rack) -> CoreResult<()> {
        if rack.is_mda() && self.mda().is_some() {
            return Err(CoreError::Validation(format!(
                "facility already has an MDA rack, refusing {}",
                rack.id
            )));
        }
        self.insert_rack(rack)
    }

    /// 移除机柜，同时移除以其为端点的链路
    pub fn remove_rack(&mut self, id: &str) -> CoreResult<Rack> {
        let index = self
            .racks
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CoreError::RackNotFound(id.to_string()))?;

        self.connections.retain(|c| !c.touches(id));
        Ok(self.racks.remove(index))
    }

    /// 添加链路；同一无向机柜对已存在时不重复添加
    pub fn add_connection(&mut self, connection: Connection) -> bool {
        if self
            .connections
            .iter()
            .any(|c| c.links(&connection.from, &connection.to))
        {
            return false;
        }
        self.connections.push(connection);
        true
    }

    /// 移除 `a` 与 `b` 之间的链路（两个方向），返回移除数量
    pub fn remove_connection(&mut self, a: &str, b: &str) -> usize {
        let before = self.connections.len();
        self.connections.retain(|c| !c.links(a, b));
        before - self.connections.len()
    }

    fn insert_rack(&mut self, rack: Rack) -> CoreResult<()> {
        if self.find_rack(&rack.id).is_some() {
            return Err(CoreError::DuplicateRack(rack.id));
        }

        if rack.is_eda() {
            let expected = zone_id_for_column(rack.x);
            match rack.zone_id.as_deref() {
                Some(zone_id) if zone_id == expected => {}
                other => {
                    return Err(CoreError::Validation(format!(
                        "rack {} at column {} must belong to {expected}, found {other:?}",
                        rack.id, rack.x
                    )));
                }
            }
            if self.find_zone(&expected).is_none() {
                return Err(CoreError::ZoneNotFound(expected));
            }
        }

        self.racks.push(rack);
        Ok(())
    }

    // ===== 统计 =====

    /// 对满足条件的机柜子集做聚合
    ///
    /// 缺失的功耗 / 温度按 0 计入；空集合的平均温度为 `None`。
    pub fn aggregate<F>(&self, predicate: F) -> RackStats
    where
        F: Fn(&Rack) -> bool,
    {
        let subset: Vec<&Rack> = self.racks.iter().filter(|r| predicate(r)).collect();
        let total_racks = subset.len();
        let active_racks = subset.iter().filter(|r| r.is_active()).count();
        let total_power = subset.iter().map(|r| r.power_draw.unwrap_or(0.0)).sum();
        let avg_temperature = if total_racks == 0 {
            None
        } else {
            let sum: f64 = subset.iter().map(|r| r.temperature.unwrap_or(0.0)).sum();
            Some(sum / total_racks as f64)
        };

        RackStats {
            total_racks,
            active_racks,
            total_power,
            avg_temperature,
            total_gpus: total_racks * GPUS_PER_RACK,
            active_gpus: active_racks * GPUS_PER_RACK,
        }
    }

    /// 区域统计
    pub fn zone_stats(&self, zone_id: &str) -> RackStats {
        self.aggregate(|r| r.zone_id.as_deref() == Some(zone_id))
    }

    /// 列统计（`x` 等于该列的所有机柜）
    pub fn column_stats(&self, column: i32) -> RackStats {
        self.aggregate(|r| r.x == column)
    }

    /// 全设施统计
    pub fn totals(&self) -> RackStats {
        self.aggregate(|_| true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{small_facility, standard_facility};
    use crate::types::ConnectionType;

    #[test]
    fn standard_layout_shape() {
        let facility = standard_facility();
        assert_eq!(facility.zones().len(), 3);
        assert_eq!(facility.racks().len(), 1 + 18 * 12);
        assert_eq!(facility.mda().map(|r| r.id.as_str()), Some(MDA_RACK_ID));
        assert!(facility.connections().is_empty());
    }

    #[test]
    fn generated_metrics_within_ranges() {
        let facility = standard_facility();
        for rack in facility.racks().iter().filter(|r| r.is_eda() && r.is_active()) {
            let power = rack.power_draw.unwrap();
            let temp = rack.temperature.unwrap();
            assert!((5.0..10.0).contains(&power), "{} power {power}", rack.id);
            assert!((65.0..75.0).contains(&temp), "{} temp {temp}", rack.id);
        }
    }

    #[test]
    fn same_seed_same_facility() {
        let a = FacilityModel::with_seed(7).unwrap();
        let b = FacilityModel::with_seed(7).unwrap();
        assert_eq!(a.racks(), b.racks());
    }

    #[test]
    fn new_rejects_second_mda() {
        let zones = vec![Zone::new("zone-1", "Zone A", 0, 3, 6, 12)];
        let racks = vec![Rack::mda("mda-1", 9, 1), Rack::mda("mda-2", 10, 1)];
        let err = FacilityModel::new(zones, racks).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn new_rejects_wrong_zone_membership() {
        let zones = vec![
            Zone::new("zone-1", "Zone A", 0, 3, 6, 12),
            Zone::new("zone-2", "Zone B", 6, 3, 6, 12),
        ];
        let mut rack = Rack::eda("eda-7-0", 7, 3, RackStatus::Active, 6.0, 70.0);
        rack.zone_id = Some("zone-1".into());
        let err = FacilityModel::new(zones, vec![Rack::mda("mda-1", 9, 1), rack]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn new_rejects_rack_in_unknown_zone() {
        let zones = vec![Zone::new("zone-1", "Zone A", 0, 3, 6, 12)];
        let rack = Rack::eda("eda-13-0", 13, 3, RackStatus::Active, 6.0, 70.0);
        let err = FacilityModel::new(zones, vec![Rack::mda("mda-1", 9, 1), rack]).unwrap_err();
        assert_eq!(err, CoreError::ZoneNotFound("zone-3".into()));
    }

    #[test]
    fn initialize_without_mda_is_noop() {
        let mut facility = FacilityModel::default();
        assert_eq!(facility.initialize_connections(), 0);
        assert!(facility.connections().is_empty());
    }

    #[test]
    fn initialize_replaces_manual_links() {
        let mut facility = small_facility();
        facility.add_connection(Connection::new("eda-0-0", "eda-1-0", ConnectionType::Copper));
        let built = facility.initialize_connections();
        assert_eq!(built, 2);
        assert!(facility
            .connections()
            .iter()
            .all(|c| c.from == "mda-1" && c.connection_type == ConnectionType::Fiber));
    }

    #[test]
    fn add_connection_refuses_reverse_duplicate() {
        let mut facility = small_facility();
        assert!(facility.add_connection(Connection::fiber("eda-0-0", "eda-1-0")));
        assert!(!facility.add_connection(Connection::fiber("eda-1-0", "eda-0-0")));
        assert_eq!(facility.connections().len(), 1);
    }

    #[test]
    fn remove_connection_removes_both_orientations() {
        let mut facility = small_facility();
        facility.initialize_connections();
        assert_eq!(facility.remove_connection("eda-0-0", "mda-1"), 1);
        assert!(!facility
            .connections()
            .iter()
            .any(|c| c.links("mda-1", "eda-0-0")));
        assert_eq!(facility.connections().len(), 1);
    }

    #[test]
    fn remove_rack_drops_its_links() {
        let mut facility = small_facility();
        facility.initialize_connections();
        let removed = facility.remove_rack("eda-1-0").unwrap();
        assert_eq!(removed.id, "eda-1-0");
        assert!(facility.find_rack("eda-1-0").is_none());
        assert!(!facility.connections().iter().any(|c| c.touches("eda-1-0")));
    }

    #[test]
    fn remove_unknown_rack_is_not_found() {
        let mut facility = small_facility();
        assert_eq!(
            facility.remove_rack("eda-99-99").unwrap_err(),
            CoreError::RackNotFound("eda-99-99".into())
        );
    }

    #[test]
    fn add_rack_rejects_duplicate_id() {
        let mut facility = small_facility();
        let dup = Rack::eda("eda-0-0", 0, 3, RackStatus::Active, 5.0, 65.0);
        assert_eq!(
            facility.add_rack(dup).unwrap_err(),
            CoreError::DuplicateRack("eda-0-0".into())
        );
    }

    #[test]
    fn empty_subset_has_no_average() {
        let facility = standard_facility();
        let stats = facility.column_stats(20);
        assert!(stats.is_empty());
        assert_eq!(stats.avg_temperature, None);
        assert_eq!(stats.total_power, 0.0);
        assert_eq!(stats.total_gpus, 0);
    }

    #[test]
    fn column_stats_counts_offline_rack() {
        let facility = standard_facility();
        let stats = facility.column_stats(5);
        assert_eq!(stats.total_racks, 12);
        assert_eq!(stats.active_racks, 11);
        assert_eq!(stats.active_gpus, 11 * GPUS_PER_RACK);
    }

    #[test]
    fn column_under_mda_includes_it() {
        let facility = standard_facility();
        assert_eq!(facility.column_stats(9).total_racks, 13);
    }
}
