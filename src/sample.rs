//! 內建示範資料

/// 三筆示範物料：A、C 需補貨，B 庫存過剩
pub const SAMPLE_ITEMS_JSON: &str = include_str!("../data/sample_items.json");
