//! 補貨主計算器

use rayon::prelude::*;
use reorder_core::{
    ErrorPolicy, IngestReport, ItemRecord, PlanningConfig, RecordFailure, ReorderEntry,
    ReorderPlan,
};

use crate::batching::BatchSizingCalculator;
use crate::shortage::ShortageCalculator;
use crate::PlanReport;

/// 單筆記錄的計算結果
type ItemOutcome = reorder_core::Result<Option<ReorderEntry>>;

/// 補貨計算器
///
/// 無狀態：相同輸入永遠得到相同計劃。各物料互相獨立，
/// 輸出順序為輸入順序的過濾子序列。
#[derive(Debug, Clone, Default)]
pub struct ReorderCalculator {
    config: PlanningConfig,
}

impl ReorderCalculator {
    /// 創建新的補貨計算器
    pub fn new(config: PlanningConfig) -> Self {
        Self { config }
    }

    /// 獲取計劃配置引用
    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }

    /// 單物料補貨計算
    ///
    /// 無缺口時回傳 `None`；批量非正數或數值溢位時回傳錯誤。
    pub fn evaluate_item(item: &ItemRecord) -> ItemOutcome {
        item.validate()?;

        let shortage = ShortageCalculator::calculate(item)?;
        if shortage == 0 {
            tracing::trace!("物料 {} 無缺口，跳過", item.item_id);
            return Ok(None);
        }

        let units_to_order =
            BatchSizingCalculator::units_to_order(&item.item_id, shortage, item.batch_size)?;

        tracing::debug!(
            "物料 {}: 缺口 {}, 批量 {}, 訂購 {}",
            item.item_id,
            shortage,
            item.batch_size,
            units_to_order
        );

        Ok(Some(ReorderEntry::new(item.item_id.clone(), units_to_order)))
    }

    /// 主計算入口（任一記錄無效即中止）
    ///
    /// 回傳的錯誤必定屬於輸入中第一筆無效記錄，與是否並行無關。
    pub fn calculate(&self, items: &[ItemRecord]) -> reorder_core::Result<ReorderPlan> {
        tracing::info!("開始補貨計算：物料 {} 筆", items.len());
        let start_time = std::time::Instant::now();

        let plan = if self.config.should_parallelize(items.len()) {
            let mut plan = ReorderPlan::empty();
            for outcome in self.evaluate_parallel(items) {
                if let Some(entry) = outcome? {
                    plan.push(entry);
                }
            }
            plan
        } else {
            let mut plan = ReorderPlan::empty();
            for item in items {
                if let Some(entry) = Self::evaluate_item(item)? {
                    plan.push(entry);
                }
            }
            plan
        };

        tracing::info!(
            "補貨計算完成，耗時 {:?}，補貨項目 {} 筆",
            start_time.elapsed(),
            plan.len()
        );

        Ok(plan)
    }

    /// 逐筆回報模式：無效記錄列入拒絕清單，其餘照常計算
    pub fn calculate_report(&self, items: &[ItemRecord]) -> PlanReport {
        let indices: Vec<usize> = (0..items.len()).collect();
        self.build_report(items, &indices, Vec::new(), items.len())
    }

    /// 逐筆回報模式，並併入讀取階段被拒絕的記錄
    ///
    /// 拒絕清單依原始輸入位置排序。
    pub fn calculate_report_ingested(&self, ingested: IngestReport) -> PlanReport {
        let IngestReport {
            records,
            indices,
            rejected,
            total,
        } = ingested;
        self.build_report(&records, &indices, rejected, total)
    }

    /// 依配置的錯誤處理策略執行計算
    pub fn run(&self, items: &[ItemRecord]) -> reorder_core::Result<PlanReport> {
        match self.config.error_policy {
            ErrorPolicy::FailFast => {
                let plan = self.calculate(items)?;
                Ok(PlanReport::complete(plan, items.len()))
            }
            ErrorPolicy::ReportPerRecord => Ok(self.calculate_report(items)),
        }
    }

    /// 依配置的錯誤處理策略計算讀取結果
    ///
    /// 任一記錄無效即中止時，回傳輸入順序中第一筆無效記錄的錯誤（不論其在讀取或計算階段被拒絕）。
    pub fn run_ingested(&self, ingested: IngestReport) -> reorder_core::Result<PlanReport> {
        match self.config.error_policy {
            ErrorPolicy::FailFast if ingested.is_complete() => {
                let plan = self.calculate(&ingested.records)?;
                Ok(PlanReport::complete(plan, ingested.total))
            }
            ErrorPolicy::FailFast => {
                let total = ingested.total;
                let plan = self.calculate_report_ingested(ingested).into_plan()?;
                Ok(PlanReport::complete(plan, total))
            }
            ErrorPolicy::ReportPerRecord => Ok(self.calculate_report_ingested(ingested)),
        }
    }

    fn build_report(
        &self,
        items: &[ItemRecord],
        indices: &[usize],
        mut rejected: Vec<RecordFailure>,
        total: usize,
    ) -> PlanReport {
        tracing::info!(
            "開始補貨計算（逐筆回報）：物料 {} 筆，讀取階段拒絕 {} 筆",
            items.len(),
            rejected.len()
        );
        let start_time = std::time::Instant::now();

        let outcomes = if self.config.should_parallelize(items.len()) {
            self.evaluate_parallel(items)
        } else {
            items.iter().map(Self::evaluate_item).collect()
        };

        let mut report = PlanReport::new(total);
        for ((item, &index), outcome) in items.iter().zip(indices).zip(outcomes) {
            match outcome {
                Ok(Some(entry)) => report.plan.push(entry),
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!("第 {} 筆記錄（物料 {}）被拒絕: {}", index, item.item_id, error);
                    rejected.push(RecordFailure {
                        index,
                        item_id: Some(item.item_id.clone()),
                        error,
                    });
                }
            }
        }
        rejected.sort_by_key(|failure| failure.index);
        report.rejected = rejected;

        tracing::info!(
            "補貨計算完成，耗時 {:?}，補貨項目 {} 筆，拒絕 {} 筆",
            start_time.elapsed(),
            report.plan.len(),
            report.rejected.len()
        );

        report
    }

    /// 並行計算各物料，結果按輸入順序收集
    fn evaluate_parallel(&self, items: &[ItemRecord]) -> Vec<ItemOutcome> {
        tracing::debug!("並行計算 {} 筆物料", items.len());
        items.par_iter().map(Self::evaluate_item).collect()
    }
}
