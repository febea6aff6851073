//! 補貨計劃示範程式

mod logging;
mod sample;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use reorder_calc::{PlanReport, ReorderCalculator};
use reorder_core::{parse_records, parse_records_report, ErrorPolicy, IngestReport, PlanningConfig};

#[derive(Parser, Debug)]
#[command(about = "Compute an inventory reorder plan from stock, demand and batch sizes", long_about = None)]
struct Args {
    /// JSON array of item records; the built-in sample is used when omitted
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// JSON planning config (error_policy, parallel_threshold)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("讀取配置檔失敗: {}", path.display()))?;
            PlanningConfig::from_json_str(&raw)
                .with_context(|| format!("配置檔格式錯誤: {}", path.display()))?
        }
        None => PlanningConfig::default(),
    };

    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("讀取輸入檔失敗: {}", path.display()))?,
        None => sample::SAMPLE_ITEMS_JSON.to_string(),
    };

    // 讀取階段與計算階段採用同一錯誤處理策略
    let ingested = match config.error_policy {
        ErrorPolicy::FailFast => {
            IngestReport::from_records(parse_records(&raw).context("輸入格式錯誤")?)
        }
        ErrorPolicy::ReportPerRecord => parse_records_report(&raw).context("輸入格式錯誤")?,
    };
    tracing::info!(
        "已載入 {} 筆物料記錄，讀取階段拒絕 {} 筆",
        ingested.total,
        ingested.rejected.len()
    );

    let report = ReorderCalculator::new(config)
        .run_ingested(ingested)
        .context("補貨計算失敗")?;

    print_report(&report);

    if !report.is_complete() {
        anyhow::bail!(
            "{} / {} 筆記錄被拒絕，補貨計劃不完整",
            report.rejected.len(),
            report.records_evaluated
        );
    }

    Ok(())
}

/// 輸出補貨計劃；拒絕清單先輸出至 stderr
fn print_report(report: &PlanReport) {
    for failure in &report.rejected {
        eprintln!(
            "Rejected record #{} ({}): {}",
            failure.index,
            failure.item_id.as_deref().unwrap_or("<unknown>"),
            failure.error
        );
    }
    print!("{}", render_plan(report));
}

/// 補貨計劃文字；不完整的計劃在標題上標示
fn render_plan(report: &PlanReport) -> String {
    let mut out = if report.is_complete() {
        "Reordering Plan:\n".to_string()
    } else {
        format!(
            "Reordering Plan (INCOMPLETE: {} of {} records rejected):\n",
            report.rejected.len(),
            report.records_evaluated
        )
    };

    for entry in &report.plan {
        out.push_str(&format!(
            "Item {}: Order {} units\n",
            entry.item_id, entry.units_to_order
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_for(json: &str, policy: ErrorPolicy) -> PlanReport {
        ReorderCalculator::new(PlanningConfig::new().with_error_policy(policy))
            .run_ingested(parse_records_report(json).unwrap())
            .unwrap()
    }

    #[test]
    fn test_render_sample_plan() {
        let report = report_for(sample::SAMPLE_ITEMS_JSON, ErrorPolicy::FailFast);

        assert_eq!(
            render_plan(&report),
            "Reordering Plan:\nItem A: Order 70 units\nItem C: Order 90 units\n"
        );
    }

    #[test]
    fn test_render_incomplete_plan_is_marked() {
        let json = r#"[
            {"item_id": "A", "current_stock": 50, "forecasted_demand": 120, "reorder_cost_per_unit": 5, "batch_size": 10},
            {"item_id": "B", "current_stock": 80, "reorder_cost_per_unit": 3, "batch_size": 20}
        ]"#;
        let report = report_for(json, ErrorPolicy::ReportPerRecord);

        let rendered = render_plan(&report);
        assert!(rendered.starts_with("Reordering Plan (INCOMPLETE: 1 of 2 records rejected):\n"));
        assert!(rendered.contains("Item A: Order 70 units"));
    }
}
