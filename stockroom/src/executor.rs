//! 执行器抽象层
//!
//! 提供统一的数据库执行接口，支持 `tokio_postgres::Client`、`deadpool_postgres::Client`
//! 以及它们的事务。上层只依赖这组很窄的能力，不依赖具体后端。

use crate::builder::PreparedParams;
use crate::{Error, Value};
use async_trait::async_trait;
use tokio_postgres::GenericClient;

/// 统一的数据库执行器 trait
///
/// 参数以 `Value` 传入，由 PostgreSQL 实现负责转换为 `ToSql`，
/// 因此非 PostgreSQL 的实现（例如测试替身）无需接触 tokio-postgres 类型。
#[async_trait]
pub trait Executor: Send + Sync {
    /// 执行一个不返回行的 SQL 语句（如 INSERT、UPDATE）
    ///
    /// # Returns
    ///
    /// 返回受影响的行数
    async fn execute(&self, query: &str, values: &[Value]) -> Result<u64, Error>;

    /// 批量执行 SQL（用于建表等场景）
    ///
    /// 一次执行多条 SQL 语句，语句之间用分号分隔。不支持参数化查询。
    async fn batch_execute(&self, query: &str) -> Result<(), Error>;
}

async fn execute_on<C>(client: &C, query: &str, values: &[Value]) -> Result<u64, Error>
where
    C: GenericClient + Sync,
{
    let prepared = PreparedParams::new(values);
    let stmt = client.prepare(query).await?;
    client
        .execute(&stmt, &prepared.as_params())
        .await
        .map_err(Error::from)
}

/// 为 `tokio_postgres::Client` 实现 `Executor` trait
#[async_trait]
impl Executor for tokio_postgres::Client {
    async fn execute(&self, query: &str, values: &[Value]) -> Result<u64, Error> {
        execute_on(self, query, values).await
    }

    async fn batch_execute(&self, query: &str) -> Result<(), Error> {
        tokio_postgres::Client::batch_execute(self, query)
            .await
            .map_err(Error::from)
    }
}

/// 为 `tokio_postgres::Transaction` 实现 `Executor` trait
#[async_trait]
impl<'a> Executor for tokio_postgres::Transaction<'a> {
    async fn execute(&self, query: &str, values: &[Value]) -> Result<u64, Error> {
        execute_on(self, query, values).await
    }

    async fn batch_execute(&self, query: &str) -> Result<(), Error> {
        tokio_postgres::Transaction::batch_execute(self, query)
            .await
            .map_err(Error::from)
    }
}

/// 为 `deadpool_postgres::Client` 实现 `Executor` trait
///
/// `deadpool_postgres::Client` 通过 `Deref` 实现为 `tokio_postgres::Client`，
/// 所以我们可以直接调用底层的方法。
#[async_trait]
impl Executor for deadpool_postgres::Client {
    async fn execute(&self, query: &str, values: &[Value]) -> Result<u64, Error> {
        let client: &tokio_postgres::Client = self;
        execute_on(client, query, values).await
    }

    async fn batch_execute(&self, query: &str) -> Result<(), Error> {
        let client: &tokio_postgres::Client = self;
        Executor::batch_execute(client, query).await
    }
}

/// 为 `deadpool_postgres::Transaction` 实现 `Executor` trait
#[async_trait]
impl<'a> Executor for deadpool_postgres::Transaction<'a> {
    async fn execute(&self, query: &str, values: &[Value]) -> Result<u64, Error> {
        let tx: &tokio_postgres::Transaction<'a> = self;
        execute_on(tx, query, values).await
    }

    async fn batch_execute(&self, query: &str) -> Result<(), Error> {
        let tx: &tokio_postgres::Transaction<'a> = self;
        Executor::batch_execute(tx, query).await
    }
}

/// 引用同样可以作为执行器
#[async_trait]
impl<E: Executor + ?Sized> Executor for &E {
    async fn execute(&self, query: &str, values: &[Value]) -> Result<u64, Error> {
        (**self).execute(query, values).await
    }

    async fn batch_execute(&self, query: &str) -> Result<(), Error> {
        (**self).batch_execute(query).await
    }
}
