//! stockroom：基于列映射的数据访问层
//!
//! - [`ColumnMap`]：列名到参数值的映射，是 INSERT/UPDATE 的载荷
//! - [`Record`] / [`ChangeSet`]：完整记录与部分更新变更集
//! - [`InsertBuilder`] / [`UpdateBuilder`]：基于列映射构建 SQL
//! - [`Executor`]：执行 SQL 的最小能力集合

mod builder;
mod column_map;
mod conn;
mod error;
mod executor;
mod expression;
mod record;
mod value;

pub use stockroom_macro::Record;

pub use builder::{InsertBuilder, UpdateBuilder};
pub use column_map::ColumnMap;
pub use conn::{Connection, PooledConnection, Transaction, config_from_url};
pub use error::Error;
pub use executor::Executor;
pub use expression::{Column, Expression, SqlResult};
pub use record::{ChangeSet, Record, insert_record, update_record};
pub use value::{IntoValue, Value};
