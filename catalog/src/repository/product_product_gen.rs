// Code generated by stockroom-gen. DO NOT EDIT.
// source: catalog::domain::Product

/// Partial update of [`crate::domain::Product`]. `None` leaves the stored column unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChangeSet {
    pub id: Option<uuid::Uuid>,
    pub article_number: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub stock_availability: Option<i32>,
    pub price_cents: Option<i32>,
    pub on_sale: Option<bool>,
}
impl ::stockroom::ChangeSet for ProductChangeSet {
    fn to_column_map(&self) -> ::stockroom::ColumnMap {
        let mut map = ::stockroom::ColumnMap::new();
        if let Some(value) = &self.id {
            map.insert("product_id", value);
        }
        if let Some(value) = &self.article_number {
            map.insert("article_number", value);
        }
        if let Some(value) = &self.name {
            map.insert("name", value);
        }
        if let Some(value) = &self.description {
            map.insert("description", value);
        }
        if let Some(value) = &self.color {
            map.insert("color", value);
        }
        if let Some(value) = &self.size {
            map.insert("size", value);
        }
        if let Some(value) = &self.stock_availability {
            map.insert("stock_availability", value);
        }
        if let Some(value) = &self.price_cents {
            map.insert("price_cents", value);
        }
        if let Some(value) = &self.on_sale {
            map.insert("on_sale", value);
        }
        map
    }
}
