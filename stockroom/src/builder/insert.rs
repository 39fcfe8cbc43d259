use super::quoted_columns;
use crate::{ColumnMap, Executor, IntoValue, SqlResult};

/// INSERT 查询构建器
///
/// 列和值来自 `ColumnMap`，必须至少调用一次 `set`/`set_map` 才能 build
///
/// # Example
/// ```ignore
/// let affected = InsertBuilder::new("products")
///     .set_map(product.to_column_map())
///     .execute(&conn)
///     .await?;
/// ```
pub struct InsertBuilder<const SET_CALLED: bool = false> {
    table: &'static str,
    columns: ColumnMap,
}

impl InsertBuilder<false> {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: ColumnMap::new(),
        }
    }
}

impl<const SET_CALLED: bool> InsertBuilder<SET_CALLED> {
    /// 设置单列的值
    pub fn set<V: IntoValue>(self, column: &'static str, value: V) -> InsertBuilder<true> {
        let mut columns = self.columns;
        columns.insert(column, value);
        InsertBuilder {
            table: self.table,
            columns,
        }
    }

    /// 合并整个列映射
    pub fn set_map(self, map: ColumnMap) -> InsertBuilder<true> {
        let mut columns = self.columns;
        columns.extend(map);
        InsertBuilder {
            table: self.table,
            columns,
        }
    }
}

impl InsertBuilder<true> {
    /// 构建 SQL 语句
    ///
    /// 生成: `INSERT INTO table ("c1", "c2") VALUES ($1, $2)`
    pub fn build(self) -> SqlResult {
        let columns = quoted_columns(self.columns.columns());
        let placeholders = (1..=self.columns.len())
            .map(|idx| format!("${}", idx))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table, columns, placeholders
        );
        let values = self.columns.into_iter().map(|(_, value)| value).collect();

        SqlResult { sql, values }
    }

    /// 执行 INSERT 语句，返回受影响的行数
    ///
    /// 列映射为空时直接返回 `Error::EmptyColumnMap`，不会访问数据库
    pub async fn execute<E: Executor + ?Sized>(self, executor: &E) -> Result<u64, crate::Error> {
        if self.columns.is_empty() {
            return Err(crate::Error::EmptyColumnMap { table: self.table });
        }
        let sql_result = self.build();
        tracing::debug!(sql = %sql_result.sql, params = sql_result.values.len(), "executing insert");
        executor.execute(&sql_result.sql, &sql_result.values).await
    }
}
