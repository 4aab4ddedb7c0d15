//! 产品业务服务

use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use super::model::{NewProduct, Product};
use super::store::{ProductStore, StoreError};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.store.list().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Product, CoreError> {
        self.store.find(id).await?.ok_or(CoreError::NotFound)
    }

    /// 请求体中的 `id` 被忽略，由存储分配
    pub async fn create(&self, product: Product) -> Result<Product, CoreError> {
        product.validate()?;

        let product = self.store.insert(NewProduct::from(product)).await?;
        info!("创建产品: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// 整体替换记录
    ///
    /// 存储报告冲突时再查询一次记录是否存在：不存在视为 404，
    /// 仍然存在则冲突无法恢复，作为服务端错误返回。
    pub async fn update(&self, id: i32, product: Product) -> Result<(), CoreError> {
        if product.id != id {
            return Err(CoreError::BadRequest(format!(
                "path id {} does not match body id {}",
                id, product.id
            )));
        }
        product.validate()?;

        match self.store.update(&product).await {
            Ok(()) => {
                info!("更新产品: {} ({})", product.name, id);
                Ok(())
            }
            Err(StoreError::Conflict) => {
                if !self.store.exists(id).await? {
                    return Err(CoreError::NotFound);
                }
                warn!("产品 {} 更新冲突且记录仍然存在", id);
                Err(CoreError::Conflict)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<(), CoreError> {
        let product = self.store.find(id).await?.ok_or(CoreError::NotFound)?;

        // 查询与删除之间被并发删除时同样视为不存在
        if !self.store.remove(product.id).await? {
            return Err(CoreError::NotFound);
        }
        info!("删除产品: {}", id);
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), CoreError> {
        Ok(self.store.ping().await?)
    }
}
