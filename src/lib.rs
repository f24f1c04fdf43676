//! # Inbound Planner
//!
//! 多倉零售 SKU 補貨建議：依現有庫存、在途量與近 30 天日均銷量，
//! 計算預測時界內的建議補貨量，並套用 MOQ 與包裝倍數。

pub mod cli;
pub mod logging;

// Re-export 主要類型
pub use inbound_calc::{filter_by_mt_sku, CalcResult, CalcWarning, InboundCalculator, WarningSeverity};
pub use inbound_core::{
    CategoryCluster, IbError, InboundSuggestion, PlannerConfig, SafetyDaysPolicy, SkuRecord, Warehouse,
};
pub use inbound_io::{load_records, load_records_file, sample_records, write_suggestions, write_suggestions_file};
