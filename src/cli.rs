//! 命令列介面

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use inbound_calc::{filter_by_mt_sku, InboundCalculator, WarningSeverity};
use inbound_core::PlannerConfig;
use rust_decimal::Decimal;

/// 計算公式說明
pub const FORMULA_CAPTION: &str =
    "Inbound = Forecast(h) + Safety + Leadtime − (Stock + Inbound)，有設定時套用 MOQ/包裝倍數";

/// 補貨建議計算（預測時界內）
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "inbound-planner", version, about = "Inbound Planner：多倉 SKU 補貨建議")]
pub struct Cli {
    /// 輸入 CSV 檔案
    #[arg(short, long, required_unless_present = "sample", conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// 使用內建示範資料
    #[arg(long)]
    pub sample: bool,

    /// JSON 參數檔（命令列參數優先）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 預測時界（天）[7, 180]
    #[arg(long)]
    pub horizon_days: Option<u32>,

    /// 提前期（天）[0, 60]
    #[arg(long)]
    pub leadtime_days: Option<u32>,

    /// ELHA 安全庫存天數 [0, 90]
    #[arg(long)]
    pub safety_elha: Option<u32>,

    /// FMCG 安全庫存天數 [0, 90]
    #[arg(long)]
    pub safety_fmcg: Option<u32>,

    /// Others 安全庫存天數 [0, 90]
    #[arg(long)]
    pub safety_others: Option<u32>,

    /// 包裝倍數，0 = 不啟用 [0, 1000]
    #[arg(long)]
    pub pack_size: Option<u32>,

    /// 最小訂購量，0 = 不啟用 [0, 100000]
    #[arg(long)]
    pub moq_units: Option<u32>,

    /// 依 mt_sku_id 子字串篩選（區分大小寫）
    #[arg(long)]
    pub mt_sku_filter: Option<String>,

    /// 輸出 CSV 檔案（未指定時寫到 stdout）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 使用並行計算
    #[arg(long)]
    pub parallel: bool,
}

impl Cli {
    /// 組合參數：預設值 < JSON 參數檔 < 命令列參數
    pub fn planner_config(&self) -> anyhow::Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::from_json_file(path)
                .with_context(|| format!("讀取參數檔 '{}' 失敗", path.display()))?,
            None => PlannerConfig::default(),
        };

        if let Some(days) = self.horizon_days {
            config.horizon_days = days;
        }
        if let Some(days) = self.leadtime_days {
            config.leadtime_days = days;
        }
        if let Some(days) = self.safety_elha {
            config.safety_days.elha = days;
        }
        if let Some(days) = self.safety_fmcg {
            config.safety_days.fmcg = days;
        }
        if let Some(days) = self.safety_others {
            config.safety_days.others = days;
        }
        if let Some(pack) = self.pack_size {
            config.pack_size = pack;
        }
        if let Some(moq) = self.moq_units {
            config.moq_units = moq;
        }

        Ok(config)
    }
}

/// 單次執行摘要
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// 輸出列數
    pub rows: usize,
    /// 需補貨列數
    pub rows_needing_inbound: usize,
    /// 建議補貨量合計
    pub total_suggested_units: Decimal,
    /// 警告數
    pub warnings: usize,
}

/// 執行一次完整流程：參數 → 讀取 → 篩選 → 計算 → 匯出
pub fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let config = cli.planner_config()?;
    config.validate().context("參數檢查失敗")?;

    let records = match &cli.input {
        Some(path) => inbound_io::load_records_file(path)
            .with_context(|| format!("讀取輸入檔 '{}' 失敗", path.display()))?,
        None => {
            tracing::info!("未指定輸入檔，使用示範資料");
            inbound_io::sample_records()
        }
    };

    let records = match cli.mt_sku_filter.as_deref() {
        Some(pattern) => filter_by_mt_sku(records, pattern),
        None => records,
    };

    let calculator = InboundCalculator::new(config).with_parallel(cli.parallel);
    let result = calculator.calculate(&records);

    for warning in &result.warnings {
        match warning.severity {
            WarningSeverity::Info => {
                tracing::debug!("[{}/{}] {}", warning.sku_id, warning.mt_sku_id, warning.message)
            }
            WarningSeverity::Warning => {
                tracing::warn!("[{}/{}] {}", warning.sku_id, warning.mt_sku_id, warning.message)
            }
        }
    }

    match &cli.output {
        Some(path) => inbound_io::write_suggestions_file(path, &result.suggestions)
            .with_context(|| format!("寫出結果 '{}' 失敗", path.display()))?,
        None => inbound_io::write_suggestions(std::io::stdout().lock(), &result.suggestions)
            .context("寫出結果失敗")?,
    }

    tracing::info!("已計算完成，{} 列", result.suggestions.len());
    tracing::info!("公式: {}", FORMULA_CAPTION);

    Ok(RunSummary {
        rows: result.suggestions.len(),
        rows_needing_inbound: result.rows_needing_inbound(),
        total_suggested_units: result.total_suggested_units(),
        warnings: result.warnings.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_flags() {
        let cli = Cli::try_parse_from([
            "inbound-planner",
            "--input",
            "stock.csv",
            "--horizon-days",
            "60",
            "--safety-fmcg",
            "10",
            "--moq-units",
            "50",
            "--mt-sku-filter",
            "111",
            "--parallel",
        ])
        .unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("stock.csv")));
        assert_eq!(cli.mt_sku_filter.as_deref(), Some("111"));
        assert!(cli.parallel);

        let config = cli.planner_config().unwrap();
        assert_eq!(config.horizon_days, 60);
        assert_eq!(config.leadtime_days, 7);
        assert_eq!(config.safety_days.fmcg, 10);
        assert_eq!(config.safety_days.elha, 30);
        assert_eq!(config.moq_units, 50);
    }

    #[test]
    fn input_or_sample_required() {
        assert!(Cli::try_parse_from(["inbound-planner"]).is_err());
        assert!(Cli::try_parse_from(["inbound-planner", "--sample", "--input", "a.csv"]).is_err());
        assert!(Cli::try_parse_from(["inbound-planner", "--sample"]).is_ok());
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.json");
        std::fs::write(&path, r#"{"horizon_days": 120, "pack_size": 12}"#).unwrap();

        let cli = Cli {
            sample: true,
            config: Some(path),
            pack_size: Some(24),
            ..Cli::default()
        };

        let config = cli.planner_config().unwrap();
        assert_eq!(config.horizon_days, 120);
        assert_eq!(config.pack_size, 24);
    }

    #[test]
    fn out_of_range_rejected_before_loading() {
        let cli = Cli {
            input: Some(PathBuf::from("/nonexistent/stock.csv")),
            horizon_days: Some(365),
            ..Cli::default()
        };

        let err = run(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<inbound_core::IbError>(),
            Some(inbound_core::IbError::ConfigOutOfRange { field: "horizon_days", .. })
        ));
    }
}
