//! 列映射
//!
//! `ColumnMap` 是插入和更新语句的载荷：列名到参数值的有序映射。

use crate::value::{IntoValue, Value};

/// 列名到参数值的映射
///
/// 迭代顺序即插入顺序，保证生成的 SQL 文本稳定；相等比较只看键集合和值，不看顺序。
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    entries: Vec<(&'static str, Value)>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// 写入一列，列已存在时原地替换其值
    pub fn insert<V: IntoValue>(&mut self, column: &'static str, value: V) {
        let value = value.into_value();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按插入顺序返回列名
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    /// 合并另一个映射，后者覆盖同名列
    pub fn extend(&mut self, other: ColumnMap) {
        for (column, value) in other {
            self.insert(column, value);
        }
    }
}

impl PartialEq for ColumnMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(column, value)| other.get(column) == Some(value))
    }
}

impl IntoIterator for ColumnMap {
    type Item = (&'static str, Value);
    type IntoIter = std::vec::IntoIter<(&'static str, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: IntoValue> FromIterator<(&'static str, V)> for ColumnMap {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        let mut map = ColumnMap::new();
        for (column, value) in iter {
            map.insert(column, value);
        }
        map
    }
}
