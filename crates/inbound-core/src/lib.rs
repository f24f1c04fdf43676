//! # Inbound Core
//!
//! 補貨建議的核心資料模型與類型定義

pub mod category;
pub mod config;
pub mod record;
pub mod suggestion;

// Re-export 主要類型
pub use category::{CategoryCluster, SafetyDaysPolicy};
pub use config::PlannerConfig;
pub use record::{SkuRecord, Warehouse};
pub use suggestion::InboundSuggestion;

/// 補貨計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum IbError {
    #[error("缺少必要欄位: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("參數超出範圍: {field} = {value}（允許 [{min}, {max}]）")]
    ConfigOutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("無效的數值 (第 {row} 列, 欄位 {column}): {value}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("CSV 錯誤: {0}")]
    Csv(String),

    #[error("IO 錯誤: {0}")]
    Io(String),

    #[error("配置檔錯誤: {0}")]
    ConfigFile(String),
}

pub type Result<T> = std::result::Result<T, IbError>;
