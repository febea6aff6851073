//! 補貨計劃配置

use serde::{Deserialize, Serialize};

use crate::{ReorderError, Result};

/// 預設並行門檻（記錄筆數）
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// 計劃計算配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanningConfig {
    /// 無效記錄的處理策略
    pub error_policy: ErrorPolicy,

    /// 輸入筆數達到此門檻時改用並行計算
    ///
    /// 並行計算的輸出順序仍與輸入順序一致。
    pub parallel_threshold: usize,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::FailFast,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl PlanningConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 永不並行的配置
    pub fn sequential() -> Self {
        Self::default().with_parallel_threshold(usize::MAX)
    }

    /// 建構器模式：設置錯誤處理策略
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// 建構器模式：設置並行門檻
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// 從 JSON 讀取配置，缺少的欄位採用預設值
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(ReorderError::InvalidConfig(
                "parallel_threshold 必須大於 0".to_string(),
            ));
        }
        Ok(())
    }

    /// 指定筆數的輸入是否應並行計算
    pub fn should_parallelize(&self, record_count: usize) -> bool {
        record_count >= self.parallel_threshold
    }
}

/// 錯誤處理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// 任一記錄無效即中止整批計算
    #[default]
    FailFast,

    /// 逐筆回報：有效記錄照常計算，無效記錄列入拒絕清單
    ReportPerRecord,
}
