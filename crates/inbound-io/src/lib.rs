//! # Inbound IO
//!
//! 輸入表讀取、結果匯出與示範資料

pub mod export;
pub mod loader;
pub mod sample;

// Re-export 主要函數
pub use export::{write_suggestions, write_suggestions_file, OUTPUT_COLUMNS};
pub use loader::{load_records, load_records_file, MAX_CELL_ABS, REQUIRED_COLUMNS};
pub use sample::sample_records;
