use super::{ProductChangeSet, RepositoryError};
use crate::domain::Product;
use stockroom::{ColumnMap, Executor, InsertBuilder, Record, insert_record, update_record};
use uuid::Uuid;

/// 插入一个商品，列映射手写
pub async fn insert_product<E>(executor: &E, product: &Product) -> Result<(), stockroom::Error>
where
    E: Executor + ?Sized,
{
    let mut columns = ColumnMap::with_capacity(9);
    columns.insert("product_id", product.id);
    columns.insert("article_number", &product.article_number);
    columns.insert("name", &product.name);
    columns.insert("description", &product.description);
    columns.insert("color", &product.color);
    columns.insert("size", &product.size);
    columns.insert("stock_availability", product.stock_availability);
    columns.insert("price_cents", product.price_cents);
    columns.insert("on_sale", product.on_sale);

    InsertBuilder::new("products")
        .set_map(columns)
        .execute(executor)
        .await?;
    Ok(())
}

/// 插入一个商品，列映射来自 `#[derive(Record)]`
pub async fn insert_product_record<E>(executor: &E, product: &Product) -> Result<(), stockroom::Error>
where
    E: Executor + ?Sized,
{
    insert_record(executor, product).await?;
    Ok(())
}

/// 按 id 更新一个商品，只写入变更集中设置了的列
///
/// 受影响行数必须恰好为 1，否则返回 [`RepositoryError::RowCount`]。
pub async fn update_product<E>(
    executor: &E,
    id: Uuid,
    changes: &ProductChangeSet,
) -> Result<(), RepositoryError>
where
    E: Executor + ?Sized,
{
    let affected = update_record::<Product, _, _, _>(executor, id, changes).await?;
    if affected != 1 {
        return Err(RepositoryError::RowCount { affected });
    }
    tracing::debug!(table = Product::TABLE_NAME, %id, "updated product");
    Ok(())
}
