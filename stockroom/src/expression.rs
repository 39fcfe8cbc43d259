use crate::value::{IntoValue, Value};

/// 列元信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// 列名
    pub name: &'static str,
}

impl Column {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// 返回带引号的列名
    pub fn quoted_name(&self) -> String {
        format!("\"{}\"", self.name)
    }

    /// 创建 column = value 表达式
    ///
    /// ```ignore
    /// let expr = Column::new("product_id").eq(id);
    /// let result = expr.build();
    /// // result.sql = "\"product_id\" = $1"
    /// ```
    pub fn eq<V: IntoValue>(&self, value: V) -> Expression {
        Expression::Eq {
            column: *self,
            value: value.into_value(),
        }
    }
}

/// WHERE 条件表达式
#[derive(Debug, Clone)]
pub enum Expression {
    /// column = value
    Eq { column: Column, value: Value },
    /// AND 组合表达式
    And(Box<Expression>, Box<Expression>),
}

/// 表达式生成的 SQL 结果
#[derive(Debug, Clone)]
pub struct SqlResult {
    /// SQL 字符串（带 $1, $2 等占位符）
    pub sql: String,
    /// 绑定的参数值（按顺序）
    pub values: Vec<Value>,
}

impl Expression {
    /// 用 AND 组合两个表达式
    pub fn and(self, other: Expression) -> Expression {
        Expression::And(Box::new(self), Box::new(other))
    }

    /// 生成完整的 SQL 结果，占位符从 $1 开始
    pub fn build(self) -> SqlResult {
        let (sql, values, _) = self.build_with_offset(1);
        SqlResult { sql, values }
    }

    /// 从 `start_param` 开始编号占位符
    ///
    /// 返回 (sql, values, next_param_index)
    pub(crate) fn build_with_offset(self, start_param: usize) -> (String, Vec<Value>, usize) {
        match self {
            Expression::Eq { column, value } => (
                format!("{} = ${}", column.quoted_name(), start_param),
                vec![value],
                start_param + 1,
            ),
            Expression::And(left, right) => {
                let (left_sql, mut values, next_param) = left.build_with_offset(start_param);
                let (right_sql, right_values, next_param) = right.build_with_offset(next_param);
                values.extend(right_values);
                (
                    format!("({} AND {})", left_sql, right_sql),
                    values,
                    next_param,
                )
            }
        }
    }
}

impl std::ops::BitAnd for Expression {
    type Output = Expression;

    fn bitand(self, rhs: Expression) -> Expression {
        self.and(rhs)
    }
}
