//! 輸入記錄讀取與驗證
//!
//! 將鬆散結構的 JSON 物件一次性轉換為固定欄位的 [`ItemRecord`]。
//! 缺少欄位或類型錯誤都會回報記錄序號、物料ID與欄位名稱，不做任何預設值補齊。
//!
//! 兩種讀取方式對應 [`ErrorPolicy`](crate::ErrorPolicy)：
//! - [`parse_records`]：任一記錄無效即中止
//! - [`parse_records_report`]：逐筆回報，無效記錄列入拒絕清單，其餘照常讀取

use serde_json::{Map, Value};

use crate::item::{fields, ItemRecord};
use crate::{ReorderError, Result};

const EXPECTED_STRING: &str = "字串";
const EXPECTED_INTEGER: &str = "整數（i64）";
const EXPECTED_NUMBER: &str = "數值";

/// 解析 JSON 陣列為補貨記錄列表
pub fn parse_records(json: &str) -> Result<Vec<ItemRecord>> {
    let value: Value = serde_json::from_str(json)?;
    records_from_json_value(&value)
}

/// 將 JSON 陣列轉換為補貨記錄列表，遇到第一筆無效記錄即回傳錯誤
pub fn records_from_json_value(value: &Value) -> Result<Vec<ItemRecord>> {
    json_array(value)?
        .iter()
        .enumerate()
        .map(|(index, item)| ItemRecord::from_json_value(index, item))
        .collect()
}

/// 逐筆解析 JSON 陣列
///
/// 只有整份輸入無法解析或頂層不是陣列時才回傳錯誤；單筆記錄的錯誤列入 [`IngestReport::rejected`]。
pub fn parse_records_report(json: &str) -> Result<IngestReport> {
    let value: Value = serde_json::from_str(json)?;
    records_report_from_json_value(&value)
}

pub fn records_report_from_json_value(value: &Value) -> Result<IngestReport> {
    let items = json_array(value)?;

    let mut report = IngestReport::new(items.len());
    for (index, item) in items.iter().enumerate() {
        match ItemRecord::from_json_value(index, item) {
            Ok(record) => {
                report.records.push(record);
                report.indices.push(index);
            }
            Err(error) => report.rejected.push(RecordFailure {
                index,
                item_id: error.item_id().map(str::to_string),
                error,
            }),
        }
    }

    Ok(report)
}

fn json_array(value: &Value) -> Result<&Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| ReorderError::InvalidInput("補貨輸入必須為 JSON 陣列".to_string()))
}

/// 被拒絕的記錄
#[derive(Debug)]
pub struct RecordFailure {
    /// 記錄在原始輸入中的位置
    pub index: usize,

    /// 物料ID（記錄不是物件或缺少 `item_id` 時為 `None`）
    pub item_id: Option<String>,

    pub error: ReorderError,
}

/// 逐筆解析結果
#[derive(Debug)]
pub struct IngestReport {
    /// 有效記錄，保持輸入順序
    pub records: Vec<ItemRecord>,

    /// `records` 中每筆記錄在原始輸入中的位置
    pub indices: Vec<usize>,

    /// 無效記錄
    pub rejected: Vec<RecordFailure>,

    /// 輸入記錄總數
    pub total: usize,
}

impl IngestReport {
    pub fn new(total: usize) -> Self {
        Self {
            records: Vec::new(),
            indices: Vec::new(),
            rejected: Vec::new(),
            total,
        }
    }

    /// 由已驗證的記錄建立（全部有效，位置即為順序）
    pub fn from_records(records: Vec<ItemRecord>) -> Self {
        let total = records.len();
        Self {
            indices: (0..total).collect(),
            records,
            rejected: Vec::new(),
            total,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl ItemRecord {
    /// 從單一 JSON 物件建立記錄
    ///
    /// `index` 為該記錄在輸入中的位置，僅用於錯誤訊息。多餘欄位會被忽略。
    pub fn from_json_value(index: usize, value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or(ReorderError::NotAnObject { index })?;

        let reader = FieldReader::new(index, object)?;

        Ok(Self {
            current_stock: reader.integer(fields::CURRENT_STOCK)?,
            forecasted_demand: reader.integer(fields::FORECASTED_DEMAND)?,
            reorder_cost_per_unit: reader.number(fields::REORDER_COST_PER_UNIT)?,
            batch_size: reader.integer(fields::BATCH_SIZE)?,
            item_id: reader.item_id,
        })
    }
}

/// 單筆記錄的欄位讀取器
struct FieldReader<'a> {
    index: usize,
    object: &'a Map<String, Value>,
    item_id: String,
}

impl<'a> FieldReader<'a> {
    fn new(index: usize, object: &'a Map<String, Value>) -> Result<Self> {
        let item_id = match object.get(fields::ITEM_ID) {
            None => {
                return Err(ReorderError::MissingField {
                    index,
                    item_id: None,
                    field: fields::ITEM_ID,
                })
            }
            Some(Value::String(id)) => id.clone(),
            Some(_) => {
                return Err(ReorderError::InvalidFieldType {
                    index,
                    item_id: None,
                    field: fields::ITEM_ID,
                    expected: EXPECTED_STRING,
                })
            }
        };

        Ok(Self {
            index,
            object,
            item_id,
        })
    }

    fn get(&self, field: &'static str) -> Result<&'a Value> {
        self.object
            .get(field)
            .ok_or_else(|| ReorderError::MissingField {
                index: self.index,
                item_id: Some(self.item_id.clone()),
                field,
            })
    }

    fn type_error(&self, field: &'static str, expected: &'static str) -> ReorderError {
        ReorderError::InvalidFieldType {
            index: self.index,
            item_id: Some(self.item_id.clone()),
            field,
            expected,
        }
    }

    fn integer(&self, field: &'static str) -> Result<i64> {
        self.get(field)?
            .as_i64()
            .ok_or_else(|| self.type_error(field, EXPECTED_INTEGER))
    }

    /// 任何 JSON 數值（整數或浮點數）皆可接受
    fn number(&self, field: &'static str) -> Result<f64> {
        self.get(field)?
            .as_f64()
            .ok_or_else(|| self.type_error(field, EXPECTED_NUMBER))
    }
}
