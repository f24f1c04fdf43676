//! 依平台 SKU 篩選

use inbound_core::SkuRecord;

/// 保留 `mt_sku_id` 包含 `pattern` 的記錄（區分大小寫）
///
/// 在彙總之前對原始記錄執行；空字串不篩選。
pub fn filter_by_mt_sku(records: Vec<SkuRecord>, pattern: &str) -> Vec<SkuRecord> {
    if pattern.is_empty() {
        return records;
    }

    let before = records.len();
    let kept: Vec<SkuRecord> = records
        .into_iter()
        .filter(|r| r.mt_sku_id.contains(pattern))
        .collect();

    tracing::debug!("mt_sku_id 篩選 '{}': {} -> {} 筆", pattern, before, kept.len());
    kept
}
