//! 安全庫存天數查詢

use inbound_core::{CategoryCluster, SafetyDaysPolicy};

/// 安全庫存計算器
pub struct SafetyStockCalculator;

impl SafetyStockCalculator {
    /// 依原始品類標籤查詢安全庫存天數
    ///
    /// 未知品類（含空值）套用 Others 的天數，不會失敗。
    pub fn days(policy: &SafetyDaysPolicy, raw_category: Option<&str>) -> u32 {
        policy.days_for(CategoryCluster::parse(raw_category))
    }

    /// 品類是否因無法辨識而退回 Others
    ///
    /// 空值與明確標記為 "Others" 的不算。
    pub fn is_fallback(raw_category: Option<&str>) -> bool {
        match raw_category {
            None | Some("") | Some("Others") => false,
            Some(raw) => CategoryCluster::parse(Some(raw)) == CategoryCluster::Others,
        }
    }
}
