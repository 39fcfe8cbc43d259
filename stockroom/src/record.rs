use crate::builder::{InsertBuilder, UpdateBuilder};
use crate::{Column, ColumnMap, Error, Executor, IntoValue};

/// 可整体写入一张表的领域记录
///
/// 通常由 `#[derive(Record)]` 根据字段上的 `#[record(column = "...")]` 生成。
pub trait Record {
    const TABLE_NAME: &'static str;
    const PK_COLUMN: &'static str;
    /// 所有映射列，按字段声明顺序
    const COLUMN_NAMES: &'static [&'static str];

    /// 生成包含全部映射列（含主键）的列映射
    fn to_column_map(&self) -> ColumnMap;
}

/// 部分更新的变更集
///
/// 每个字段都是 `Option`，只有 `Some` 的字段会出现在列映射中。
pub trait ChangeSet {
    fn to_column_map(&self) -> ColumnMap;

    /// 没有任何字段被设置
    fn is_empty(&self) -> bool {
        self.to_column_map().is_empty()
    }
}

/// 把整条记录插入 `R::TABLE_NAME`
pub async fn insert_record<R, E>(executor: &E, record: &R) -> Result<u64, Error>
where
    R: Record,
    E: Executor + ?Sized,
{
    InsertBuilder::new(R::TABLE_NAME)
        .set_map(record.to_column_map())
        .execute(executor)
        .await
}

/// 按主键更新 `R::TABLE_NAME` 中的一行，只写入变更集里设置了的列
///
/// 返回受影响的行数，行数是否符合预期由调用方判断。
pub async fn update_record<R, P, C, E>(executor: &E, pk: P, change_set: &C) -> Result<u64, Error>
where
    R: Record,
    P: IntoValue,
    C: ChangeSet + ?Sized,
    E: Executor + ?Sized,
{
    UpdateBuilder::new(R::TABLE_NAME)
        .set_map(change_set.to_column_map())
        .filter(Column::new(R::PK_COLUMN).eq(pk))
        .execute(executor)
        .await
}
