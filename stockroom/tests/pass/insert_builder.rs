// 测试：InsertBuilder 基本用法
use stockroom::{InsertBuilder, Record};

#[derive(Debug, Record)]
#[record(table = "products")]
pub struct Product {
    #[record(column = "product_id", primary_key)]
    pub id: i64,
    #[record(column = "name")]
    pub name: String,
}

fn main() {
    // 方式1：逐列设置
    let _builder = InsertBuilder::new("products")
        .set("product_id", 1i64)
        .set("name", "Gouda")
        .build();

    // 方式2：通过 Record::to_column_map()
    let product = Product {
        id: 1,
        name: "Gouda".to_string(),
    };
    let _builder2 = InsertBuilder::new(Product::TABLE_NAME)
        .set_map(product.to_column_map())
        .build();
}
