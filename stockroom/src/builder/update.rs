use crate::{ColumnMap, Executor, Expression, IntoValue, SqlResult};

/// UPDATE 查询构建器
///
/// 使用类型状态模式确保必须同时设置了 SET 和 FILTER 才能执行 update 操作
///
/// # Example
/// ```ignore
/// let affected = UpdateBuilder::new("products")
///     .set_map(change_set.to_column_map())
///     .filter(Column::new("product_id").eq(id))
///     .execute(&conn)
///     .await?;
/// ```
pub struct UpdateBuilder<const SET_CALLED: bool = false, const FILTER_CALLED: bool = false> {
    table: &'static str,
    /// 要更新的列和值
    updates: ColumnMap,
    /// WHERE 条件
    filter_expr: Option<Expression>,
}

impl UpdateBuilder<false, false> {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            updates: ColumnMap::new(),
            filter_expr: None,
        }
    }
}

impl<const SET_CALLED: bool, const FILTER_CALLED: bool> UpdateBuilder<SET_CALLED, FILTER_CALLED> {
    pub fn set<V: IntoValue>(
        self,
        column: &'static str,
        value: V,
    ) -> UpdateBuilder<true, FILTER_CALLED> {
        let mut updates = self.updates;
        updates.insert(column, value);
        UpdateBuilder::<true, FILTER_CALLED> {
            table: self.table,
            updates,
            filter_expr: self.filter_expr,
        }
    }

    /// 合并整个列映射（映射可以为空，执行时会被拒绝）
    pub fn set_map(self, map: ColumnMap) -> UpdateBuilder<true, FILTER_CALLED> {
        let mut updates = self.updates;
        updates.extend(map);
        UpdateBuilder::<true, FILTER_CALLED> {
            table: self.table,
            updates,
            filter_expr: self.filter_expr,
        }
    }

    /// 添加额外的 WHERE 条件（AND 组合）
    pub fn filter(self, expr: Expression) -> UpdateBuilder<SET_CALLED, true> {
        let updated_expr = match self.filter_expr {
            Some(filter_expr) => filter_expr & expr,
            None => expr,
        };
        UpdateBuilder::<SET_CALLED, true> {
            table: self.table,
            updates: self.updates,
            filter_expr: Some(updated_expr),
        }
    }
}

// 只有 SET_CALLED = true 且 FILTER_CALLED = true 时才能 build 和 execute
impl UpdateBuilder<true, true> {
    /// 构建 SQL 语句
    pub fn build(self) -> SqlResult {
        let mut sql = String::new();
        sql.push_str("UPDATE ");
        sql.push_str(self.table);
        sql.push_str(" SET ");

        let mut values = Vec::with_capacity(self.updates.len() + 1);
        let mut param_idx = 1;

        // 构建 SET 子句
        for (i, (column, value)) in self.updates.into_iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&format!("\"{}\" = ${}", column, param_idx));
            param_idx += 1;
            values.push(value);
        }

        // 构建 WHERE 子句
        if let Some(filter_expr) = self.filter_expr {
            let (filter_sql, filter_values, _) = filter_expr.build_with_offset(param_idx);
            sql.push_str(" WHERE ");
            sql.push_str(&filter_sql);
            values.extend(filter_values);
        }

        SqlResult { sql, values }
    }

    /// 执行 UPDATE 语句，返回受影响的行数
    ///
    /// 没有任何列需要更新时返回 `Error::EmptyColumnMap`，不会访问数据库
    pub async fn execute<E: Executor + ?Sized>(self, executor: &E) -> Result<u64, crate::Error> {
        if self.updates.is_empty() {
            return Err(crate::Error::EmptyColumnMap { table: self.table });
        }
        let sql_result = self.build();
        tracing::debug!(sql = %sql_result.sql, params = sql_result.values.len(), "executing update");
        executor.execute(&sql_result.sql, &sql_result.values).await
    }
}
