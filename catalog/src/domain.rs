use stockroom::Record;
use uuid::Uuid;

/// 商品
///
/// 每个字段的 `column` 标签同时被 `#[derive(Record)]` 和 stockroom-gen 读取。
#[derive(Debug, Clone, Default, PartialEq, Record)]
#[record(table = "products")]
pub struct Product {
    #[record(column = "product_id", primary_key)]
    pub id: Uuid,
    #[record(column = "article_number")]
    pub article_number: String,
    #[record(column = "name")]
    pub name: String,
    #[record(column = "description")]
    pub description: String,
    #[record(column = "color")]
    pub color: String,
    #[record(column = "size")]
    pub size: String,
    #[record(column = "stock_availability")]
    pub stock_availability: i32,
    #[record(column = "price_cents")]
    pub price_cents: i32,
    #[record(column = "on_sale")]
    pub on_sale: bool,
}
