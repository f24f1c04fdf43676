//! 補貨建議主計算器

use inbound_core::{InboundSuggestion, PlannerConfig, SkuRecord};
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::aggregation::WarehouseTotals;
use crate::coverage::coverage_after_inbound;
use crate::lot_sizing::LotSizingCalculator;
use crate::netting::NettingCalculator;
use crate::safety_stock::SafetyStockCalculator;
use crate::{CalcResult, CalcWarning};

/// 補貨計算器
///
/// 純函數式：每列獨立計算，不修改輸入、不保留狀態。
pub struct InboundCalculator {
    /// 計算參數
    config: PlannerConfig,

    /// 是否使用 rayon 並行計算
    parallel: bool,
}

impl InboundCalculator {
    /// 創建新的計算器
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            parallel: false,
        }
    }

    /// 建構器模式：設置是否並行計算
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// 計算所有列的補貨建議
    pub fn compute(&self, records: &[SkuRecord]) -> Vec<InboundSuggestion> {
        self.calculate(records).suggestions
    }

    /// 主計算入口，附帶警告信息
    pub fn calculate(&self, records: &[SkuRecord]) -> CalcResult {
        tracing::info!(
            "開始補貨計算：{} 筆記錄，時界 {} 天，提前期 {} 天",
            records.len(),
            self.config.horizon_days,
            self.config.leadtime_days
        );

        let start_time = std::time::Instant::now();

        let rows: Vec<(InboundSuggestion, Vec<CalcWarning>)> = if self.parallel {
            tracing::debug!("使用並行計算");
            records.par_iter().map(|r| self.calculate_row(r)).collect()
        } else {
            records.iter().map(|r| self.calculate_row(r)).collect()
        };

        let mut result = CalcResult::empty();
        for (suggestion, warnings) in rows {
            result.suggestions.push(suggestion);
            for warning in warnings {
                result.add_warning(warning);
            }
        }

        tracing::info!("補貨計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "需補貨 {} 筆，建議補貨量合計 {}",
            result.rows_needing_inbound(),
            result.total_suggested_units()
        );

        result
    }

    /// 單列計算
    fn calculate_row(&self, record: &SkuRecord) -> (InboundSuggestion, Vec<CalcWarning>) {
        let mut warnings = Vec::new();
        let raw_category = record.category_cluster.as_deref();

        // Step 1: 四倉彙總
        let totals = WarehouseTotals::from_record(record);

        // Step 2: 安全庫存天數
        let safety_stock_days = SafetyStockCalculator::days(&self.config.safety_days, raw_category);
        if SafetyStockCalculator::is_fallback(raw_category) {
            warnings.push(CalcWarning::warning(
                record.sku_id.clone(),
                record.mt_sku_id.clone(),
                format!("未知品類 '{}'，套用 Others 安全庫存天數", raw_category.unwrap_or_default()),
            ));
        }

        // Step 3: 淨需求
        let net = NettingCalculator::calculate(&totals, safety_stock_days, &self.config);

        // Step 4: MOQ / 包裝倍數
        let ib_suggest_units = LotSizingCalculator::apply(net.inbound_need_units, &self.config);

        // Step 5: 覆蓋天數
        let coverage_after_ib_days =
            coverage_after_inbound(net.available_units, ib_suggest_units, totals.avg_sales_30d);
        if totals.avg_sales_30d <= Decimal::ZERO {
            warnings.push(CalcWarning::info(
                record.sku_id.clone(),
                record.mt_sku_id.clone(),
                "近 30 天無銷量，覆蓋天數不適用".to_string(),
            ));
        }

        let suggestion = InboundSuggestion {
            sku_id: record.sku_id.clone(),
            mt_sku_id: record.mt_sku_id.clone(),
            shop_id: record.shop_id,
            shop_name: record.shop_name.clone(),
            item_name: record.item_name.clone(),
            category_cluster: record.category_cluster.clone(),
            avg_sales_30d: totals.avg_sales_30d,
            total_stock: totals.total_stock,
            total_inbound: totals.total_inbound,
            safety_stock_days,
            safety_units: net.safety_units,
            leadtime_units: net.leadtime_units,
            forecast_h_units: net.forecast_h_units,
            available_units: net.available_units,
            inbound_need_units: net.inbound_need_units,
            ib_suggest_units,
            coverage_after_ib_days,
        };

        (suggestion, warnings)
    }
}
