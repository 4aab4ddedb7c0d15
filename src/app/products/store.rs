//! 产品数据访问上下文

use async_trait::async_trait;

use super::model::{NewProduct, Product};

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// 更新时没有写入任何行：记录在读写之间被修改或删除
    #[error("concurrent modification detected")]
    Conflict,
    /// 没有可分配的标识符
    #[error("product id space exhausted")]
    IdsExhausted,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 产品集合
///
/// 每个变更操作立即提交，没有跨操作的事务。
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 全部产品，按标识符排序
    async fn list(&self) -> StoreResult<Vec<Product>>;

    async fn find(&self, id: i32) -> StoreResult<Option<Product>>;

    /// 插入新产品，返回带有存储分配标识符的记录
    async fn insert(&self, product: NewProduct) -> StoreResult<Product>;

    /// 按标识符整体替换记录；未写入任何行时返回 [`StoreError::Conflict`]
    async fn update(&self, product: &Product) -> StoreResult<()>;

    /// 删除记录，返回是否确实删除了一行
    async fn remove(&self, id: i32) -> StoreResult<bool>;

    async fn exists(&self, id: i32) -> StoreResult<bool>;

    /// 存储连通性检查
    async fn ping(&self) -> StoreResult<()>;
}
