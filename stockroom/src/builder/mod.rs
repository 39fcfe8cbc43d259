mod insert;
mod update;

pub use insert::InsertBuilder;
pub use update::UpdateBuilder;

use crate::Value;
use tokio_postgres::types::ToSql;

/// 转换好的查询参数
///
/// 持有由 `Value` 转换而来的 `ToSql` 参数，供执行器以引用数组的形式传给 tokio-postgres
pub(crate) struct PreparedParams {
    params: Vec<Box<dyn ToSql + Sync + Send>>,
}

impl PreparedParams {
    pub(crate) fn new(values: &[Value]) -> Self {
        Self {
            params: values.iter().map(Value::to_sql_param).collect(),
        }
    }

    pub(crate) fn as_params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect()
    }
}

/// 由列名生成 `"c1", "c2"` 形式的列表
fn quoted_columns<'a>(columns: impl Iterator<Item = &'a str>) -> String {
    columns
        .map(|name| format!("\"{}\"", name))
        .collect::<Vec<_>>()
        .join(", ")
}
