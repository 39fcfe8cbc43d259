// 测试：UpdateBuilder 同时设置 SET 和 FILTER 后可以 build
use stockroom::{ChangeSet, Column, ColumnMap, UpdateBuilder};

#[derive(Debug, Default)]
pub struct ProductChangeSet {
    pub name: Option<String>,
    pub on_sale: Option<bool>,
}

impl ChangeSet for ProductChangeSet {
    fn to_column_map(&self) -> ColumnMap {
        let mut map = ColumnMap::new();
        if let Some(value) = &self.name {
            map.insert("name", value);
        }
        if let Some(value) = &self.on_sale {
            map.insert("on_sale", value);
        }
        map
    }
}

fn main() {
    let changes = ProductChangeSet {
        name: Some("Cheddar cheese".to_string()),
        ..Default::default()
    };

    let result = UpdateBuilder::new("products")
        .set_map(changes.to_column_map())
        .filter(Column::new("product_id").eq(1i64))
        .build();
    assert_eq!(
        result.sql,
        "UPDATE products SET \"name\" = $1 WHERE \"product_id\" = $2"
    );

    // 先 filter 再 set
    let _ = UpdateBuilder::new("products")
        .filter(Column::new("product_id").eq(1i64))
        .set("on_sale", true)
        .build();
}
