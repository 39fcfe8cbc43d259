//! catalog：商品目录的数据访问
//!
//! 同一张 `products` 表的三种写法：
//! - [`repository::insert_product`]：手写列映射
//! - [`repository::insert_product_record`]：`#[derive(Record)]` 读取字段标签
//! - [`repository::update_product`]：使用 stockroom-gen 生成的 [`repository::ProductChangeSet`]

pub mod domain;
pub mod repository;

pub use domain::Product;
pub use repository::{ProductChangeSet, RepositoryError};

/// 建表语句
pub const SCHEMA: &str = include_str!("../schema.sql");
