//! # Inbound Calculation Engine
//!
//! 補貨建議計算引擎

pub mod aggregation;
pub mod calculator;
pub mod coverage;
pub mod filter;
pub mod lot_sizing;
pub mod netting;
pub mod safety_stock;

// Re-export 主要類型
pub use aggregation::WarehouseTotals;
pub use calculator::InboundCalculator;
pub use filter::filter_by_mt_sku;
pub use netting::NetRequirement;

/// 補貨計算結果
#[derive(Debug, Clone, PartialEq)]
pub struct CalcResult {
    /// 補貨建議（與輸入順序一致）
    pub suggestions: Vec<inbound_core::InboundSuggestion>,

    /// 警告信息
    pub warnings: Vec<CalcWarning>,
}

impl CalcResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            suggestions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: CalcWarning) {
        self.warnings.push(warning);
    }

    /// 需要補貨的列數
    pub fn rows_needing_inbound(&self) -> usize {
        self.suggestions.iter().filter(|s| s.needs_inbound()).count()
    }

    /// 建議補貨量合計
    pub fn total_suggested_units(&self) -> rust_decimal::Decimal {
        self.suggestions.iter().map(|s| s.ib_suggest_units).sum()
    }
}

/// 計算警告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcWarning {
    pub sku_id: String,
    pub mt_sku_id: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl CalcWarning {
    pub fn new(sku_id: String, mt_sku_id: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            sku_id,
            mt_sku_id,
            message,
            severity,
        }
    }

    pub fn info(sku_id: String, mt_sku_id: String, message: String) -> Self {
        Self::new(sku_id, mt_sku_id, message, WarningSeverity::Info)
    }

    pub fn warning(sku_id: String, mt_sku_id: String, message: String) -> Self {
        Self::new(sku_id, mt_sku_id, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
}
