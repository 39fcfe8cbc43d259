mod product;
mod product_product_gen;

pub use product::{insert_product, insert_product_record, update_product};
pub use product_product_gen::ProductChangeSet;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("executing update: {0}")]
    Execute(#[from] stockroom::Error),

    #[error("update affected {affected} rows, but expected exactly 1")]
    RowCount { affected: u64 },
}
