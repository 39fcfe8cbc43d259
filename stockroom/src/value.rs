//! SQL 参数值类型
//!
//! 提供 `Value` 枚举和 `IntoValue` trait，用于把 Rust 值放进列映射并绑定到 SQL 查询参数。

use tokio_postgres::types::ToSql;

/// 存储 SQL 参数值的枚举
///
/// 支持常见的数据库类型，包括 PostgreSQL 特有类型
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // 基础类型
    Bool(bool),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),

    // UUID
    Uuid(uuid::Uuid),

    // chrono 时间类型
    NaiveDate(chrono::NaiveDate),
    DateTimeUtc(chrono::DateTime<chrono::Utc>),

    // 精确数值
    Decimal(rust_decimal::Decimal),

    // JSON
    Json(serde_json::Value),
}

impl Value {
    /// 转换为 tokio-postgres 可绑定的参数
    pub fn to_sql_param(&self) -> Box<dyn ToSql + Sync + Send> {
        match self {
            Value::Bool(v) => Box::new(*v),
            Value::I16(v) => Box::new(*v),
            Value::I32(v) => Box::new(*v),
            Value::I64(v) => Box::new(*v),
            Value::F32(v) => Box::new(*v),
            Value::F64(v) => Box::new(*v),
            Value::String(v) => Box::new(v.clone()),
            Value::Bytes(v) => Box::new(v.clone()),
            Value::Uuid(v) => Box::new(*v),
            Value::NaiveDate(v) => Box::new(*v),
            Value::DateTimeUtc(v) => Box::new(*v),
            Value::Decimal(v) => Box::new(*v),
            Value::Json(v) => Box::new(v.clone()),
        }
    }
}

/// 将 Rust 类型转换为 Value 的 trait
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

// 基础类型实现
impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for i16 {
    fn into_value(self) -> Value {
        Value::I16(self)
    }
}

impl IntoValue for i32 {
    fn into_value(self) -> Value {
        Value::I32(self)
    }
}

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::I64(self)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::F32(self)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::F64(self)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoValue for Vec<u8> {
    fn into_value(self) -> Value {
        Value::Bytes(self)
    }
}

impl<T: IntoValue + Clone> IntoValue for &T {
    fn into_value(self) -> Value {
        self.clone().into_value()
    }
}

impl IntoValue for uuid::Uuid {
    fn into_value(self) -> Value {
        Value::Uuid(self)
    }
}

impl IntoValue for chrono::NaiveDate {
    fn into_value(self) -> Value {
        Value::NaiveDate(self)
    }
}

impl IntoValue for chrono::DateTime<chrono::Utc> {
    fn into_value(self) -> Value {
        Value::DateTimeUtc(self)
    }
}

impl IntoValue for rust_decimal::Decimal {
    fn into_value(self) -> Value {
        Value::Decimal(self)
    }
}

impl IntoValue for serde_json::Value {
    fn into_value(self) -> Value {
        Value::Json(self)
    }
}
