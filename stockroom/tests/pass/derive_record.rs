// 测试：#[derive(Record)] 生成 Record 实现
use stockroom::{ColumnMap, Record};

#[derive(Debug, Clone, Default, Record)]
#[record(table = "products")]
pub struct Product {
    #[record(column = "product_id", primary_key)]
    pub id: uuid::Uuid,
    #[record(column = "name")]
    pub name: String,
    #[record(column = "price_cents")]
    pub price_cents: i32,
    // 没有 column 标签的字段不参与映射
    pub scratch: Vec<String>,
}

fn main() {
    let product = Product::default();
    let map: ColumnMap = product.to_column_map();

    assert_eq!(Product::TABLE_NAME, "products");
    assert_eq!(Product::PK_COLUMN, "product_id");
    assert_eq!(Product::COLUMN_NAMES, &["product_id", "name", "price_cents"]);
    assert_eq!(map.len(), 3);
}
