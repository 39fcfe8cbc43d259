use async_trait::async_trait;
use catalog::repository::{insert_product, insert_product_record, update_product};
use catalog::{Product, ProductChangeSet, RepositoryError};
use std::sync::Mutex;
use stockroom::{ChangeSet, ColumnMap, Error, Executor, Record, Value};
use uuid::Uuid;

const PRODUCT_ID: Uuid = Uuid::from_u128(0xb34081c7_9f33_4b04_ba33_3a112199f8c2);

/// Records every statement and answers with a fixed row count.
struct RecordingExecutor {
    affected: u64,
    fail: bool,
    statements: Mutex<Vec<(String, Vec<Value>)>>,
}

impl RecordingExecutor {
    fn affecting(affected: u64) -> Self {
        Self {
            affected,
            fail: false,
            statements: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::affecting(0)
        }
    }

    fn statements(&self) -> Vec<(String, Vec<Value>)> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl Executor for RecordingExecutor {
    async fn execute(&self, query: &str, values: &[Value]) -> Result<u64, Error> {
        self.statements
            .lock()
            .unwrap()
            .push((query.to_string(), values.to_vec()));
        if self.fail {
            return Err(Error::Backend("connection reset".into()));
        }
        Ok(self.affected)
    }

    async fn batch_execute(&self, _query: &str) -> Result<(), Error> {
        Ok(())
    }
}

fn cheddar_changes() -> ProductChangeSet {
    ProductChangeSet {
        article_number: Some("12345678".to_string()),
        name: Some("Cheddar cheese".to_string()),
        ..Default::default()
    }
}

fn sample_product() -> Product {
    Product {
        id: PRODUCT_ID,
        article_number: "87654321".to_string(),
        name: "Gouda".to_string(),
        description: "aged".to_string(),
        color: "yellow".to_string(),
        size: "500g".to_string(),
        stock_availability: 12,
        price_cents: 499,
        on_sale: true,
    }
}

#[test]
fn test_change_set_maps_only_set_fields() {
    let expected: ColumnMap = [
        ("article_number", "12345678"),
        ("name", "Cheddar cheese"),
    ]
    .into_iter()
    .collect();

    let map = cheddar_changes().to_column_map();

    assert_eq!(map, expected);
    assert_eq!(map.len(), 2);
}

#[test]
fn test_change_set_keeps_zero_values() {
    let changes = ProductChangeSet {
        stock_availability: Some(0),
        on_sale: Some(false),
        description: Some(String::new()),
        ..Default::default()
    };

    let map = changes.to_column_map();

    assert_eq!(map.get("stock_availability"), Some(&Value::I32(0)));
    assert_eq!(map.get("on_sale"), Some(&Value::Bool(false)));
    assert_eq!(map.get("description"), Some(&Value::String(String::new())));
    assert_eq!(map.len(), 3);
}

#[test]
fn test_empty_change_set() {
    let changes = ProductChangeSet::default();
    assert!(changes.is_empty());
    assert!(changes.to_column_map().is_empty());
}

#[test]
fn test_derived_mapping_covers_every_column() {
    let map = sample_product().to_column_map();

    assert_eq!(Product::TABLE_NAME, "products");
    assert_eq!(Product::PK_COLUMN, "product_id");
    assert_eq!(map.columns().collect::<Vec<_>>(), Product::COLUMN_NAMES);
    assert_eq!(map.get("product_id"), Some(&Value::Uuid(PRODUCT_ID)));
    assert_eq!(map.get("price_cents"), Some(&Value::I32(499)));
}

#[tokio::test]
async fn test_insert_product() {
    let executor = RecordingExecutor::affecting(1);

    insert_product(&executor, &sample_product()).await.unwrap();

    let statements = executor.statements();
    assert_eq!(statements.len(), 1);
    let (sql, values) = &statements[0];
    assert_eq!(
        sql,
        "INSERT INTO products (\"product_id\", \"article_number\", \"name\", \"description\", \
         \"color\", \"size\", \"stock_availability\", \"price_cents\", \"on_sale\") \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"
    );
    assert_eq!(values[0], Value::Uuid(PRODUCT_ID));
    assert_eq!(values[8], Value::Bool(true));
}

#[tokio::test]
async fn test_hand_written_and_derived_inserts_match() {
    let hand_written = RecordingExecutor::affecting(1);
    let derived = RecordingExecutor::affecting(1);
    let product = sample_product();

    insert_product(&hand_written, &product).await.unwrap();
    insert_product_record(&derived, &product).await.unwrap();

    assert_eq!(hand_written.statements(), derived.statements());
}

#[tokio::test]
async fn test_insert_product_returns_executor_error() {
    let executor = RecordingExecutor::failing();

    let err = insert_product(&executor, &sample_product())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Backend(_)));
}

#[tokio::test]
async fn test_update_product() {
    let executor = RecordingExecutor::affecting(1);

    update_product(&executor, PRODUCT_ID, &cheddar_changes())
        .await
        .unwrap();

    let statements = executor.statements();
    assert_eq!(statements.len(), 1);
    let (sql, values) = &statements[0];
    assert_eq!(
        sql,
        "UPDATE products SET \"article_number\" = $1, \"name\" = $2 WHERE \"product_id\" = $3"
    );
    assert_eq!(
        values,
        &vec![
            Value::String("12345678".to_string()),
            Value::String("Cheddar cheese".to_string()),
            Value::Uuid(PRODUCT_ID),
        ]
    );
}

#[tokio::test]
async fn test_update_missing_product() {
    let executor = RecordingExecutor::affecting(0);

    let err = update_product(&executor, Uuid::new_v4(), &cheddar_changes())
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::RowCount { affected: 0 }));
    assert_eq!(
        err.to_string(),
        "update affected 0 rows, but expected exactly 1"
    );
}

#[tokio::test]
async fn test_update_more_than_one_row() {
    let executor = RecordingExecutor::affecting(2);

    let err = update_product(&executor, PRODUCT_ID, &cheddar_changes())
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::RowCount { affected: 2 }));
}

#[tokio::test]
async fn test_update_execution_failure() {
    let executor = RecordingExecutor::failing();

    let err = update_product(&executor, PRODUCT_ID, &cheddar_changes())
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::Execute(Error::Backend(_))));
    assert!(err.to_string().starts_with("executing update"));
}

#[tokio::test]
async fn test_update_with_empty_change_set_skips_round_trip() {
    let executor = RecordingExecutor::affecting(1);

    let err = update_product(&executor, PRODUCT_ID, &ProductChangeSet::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::Execute(Error::EmptyColumnMap { table: "products" })
    ));
    assert!(executor.statements().is_empty());
}
