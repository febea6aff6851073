//! 補貨計劃模型

use serde::{Deserialize, Serialize};

/// 補貨計劃項目（計算結果）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderEntry {
    /// 物料ID
    pub item_id: String,

    /// 訂購數量（批量的正整數倍）
    pub units_to_order: i64,
}

impl ReorderEntry {
    /// 創建新的補貨項目
    pub fn new(item_id: String, units_to_order: i64) -> Self {
        Self {
            item_id,
            units_to_order,
        }
    }

    /// 以 `(物料ID, 數量)` 形式借用
    pub fn as_tuple(&self) -> (&str, i64) {
        (&self.item_id, self.units_to_order)
    }

    pub fn into_tuple(self) -> (String, i64) {
        (self.item_id, self.units_to_order)
    }
}

impl From<ReorderEntry> for (String, i64) {
    fn from(entry: ReorderEntry) -> Self {
        entry.into_tuple()
    }
}

/// 補貨計劃：依輸入順序排列的補貨項目
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReorderPlan {
    entries: Vec<ReorderEntry>,
}

impl ReorderPlan {
    /// 創建空的補貨計劃
    pub fn empty() -> Self {
        Self::default()
    }

    /// 追加補貨項目（保持輸入順序）
    pub fn push(&mut self, entry: ReorderEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReorderEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ReorderEntry] {
        &self.entries
    }

    /// 依物料ID查找第一筆補貨項目
    pub fn get(&self, item_id: &str) -> Option<&ReorderEntry> {
        self.entries.iter().find(|e| e.item_id == item_id)
    }

    /// 計劃總訂購數量；超出 i64 範圍時回傳 `None`
    pub fn total_units(&self) -> Option<i64> {
        self.entries
            .iter()
            .try_fold(0i64, |total, e| total.checked_add(e.units_to_order))
    }

    /// 轉換為 `(物料ID, 數量)` 列表
    pub fn into_pairs(self) -> Vec<(String, i64)> {
        self.entries.into_iter().map(ReorderEntry::into_tuple).collect()
    }
}

impl FromIterator<ReorderEntry> for ReorderPlan {
    fn from_iter<I: IntoIterator<Item = ReorderEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ReorderPlan {
    type Item = ReorderEntry;
    type IntoIter = std::vec::IntoIter<ReorderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReorderPlan {
    type Item = &'a ReorderEntry;
    type IntoIter = std::slice::Iter<'a, ReorderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> ReorderPlan {
        vec![
            ReorderEntry::new("A".to_string(), 70),
            ReorderEntry::new("C".to_string(), 90),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_plan_preserves_push_order() {
        let mut plan = ReorderPlan::empty();
        assert!(plan.is_empty());

        plan.push(ReorderEntry::new("C".to_string(), 90));
        plan.push(ReorderEntry::new("A".to_string(), 70));

        let ids: Vec<&str> = plan.iter().map(|e| e.item_id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A"]);
    }

    #[test]
    fn test_plan_lookup_and_totals() {
        let plan = sample_plan();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.get("C").map(|e| e.units_to_order), Some(90));
        assert!(plan.get("B").is_none());
        assert_eq!(plan.total_units(), Some(160));
        assert_eq!(ReorderPlan::empty().total_units(), Some(0));
    }

    #[test]
    fn test_total_units_overflow() {
        let plan: ReorderPlan = vec![
            ReorderEntry::new("A".to_string(), i64::MAX),
            ReorderEntry::new("B".to_string(), 10),
        ]
        .into_iter()
        .collect();

        assert_eq!(plan.total_units(), None);
    }

    #[test]
    fn test_entry_tuples() {
        let plan = sample_plan();
        let borrowed: Vec<(&str, i64)> = plan.entries().iter().map(ReorderEntry::as_tuple).collect();
        assert_eq!(borrowed, vec![("A", 70), ("C", 90)]);

        let owned: (String, i64) = ReorderEntry::new("E".to_string(), 10).into();
        assert_eq!(owned, ("E".to_string(), 10));
    }

    #[test]
    fn test_plan_into_pairs() {
        let pairs = sample_plan().into_pairs();
        assert_eq!(
            pairs,
            vec![("A".to_string(), 70), ("C".to_string(), 90)]
        );
    }

    #[test]
    fn test_plan_serializes_as_list() {
        let json = serde_json::to_string(&sample_plan()).unwrap();
        assert_eq!(
            json,
            r#"[{"item_id":"A","units_to_order":70},{"item_id":"C","units_to_order":90}]"#
        );
    }
}
