//! 内存产品存储

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::model::{NewProduct, Product};
use super::store::{ProductStore, StoreError, StoreResult};

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

/// 基于 `BTreeMap` 的存储，标识符从 1 开始单调递增且不复用
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> StoreResult<Vec<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find(&self, id: i32) -> StoreResult<Option<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn insert(&self, product: NewProduct) -> StoreResult<Product> {
        let mut inner = self.inner.write().await;
        inner.last_id = inner
            .last_id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted)?;
        let product = product.with_id(inner.last_id);
        inner.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&product.id) {
            Some(row) => {
                *row = product.clone();
                Ok(())
            }
            None => Err(StoreError::Conflict),
        }
    }

    async fn remove(&self, id: i32) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&id).is_some())
    }

    async fn exists(&self, id: i32) -> StoreResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.rows.contains_key(&id))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(name: &str, price: f64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            price,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = MemoryProductStore::new();
        let first = store.insert(widget("a", 1.0)).await.unwrap();
        let second = store.insert(widget("b", 2.0)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_remove() {
        let store = MemoryProductStore::new();
        let first = store.insert(widget("a", 1.0)).await.unwrap();
        assert!(store.remove(first.id).await.unwrap());
        assert!(!store.remove(first.id).await.unwrap());

        let second = store.insert(widget("b", 2.0)).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_insert_fails_when_ids_run_out() {
        let store = MemoryProductStore {
            inner: RwLock::new(Inner {
                rows: BTreeMap::new(),
                last_id: i32::MAX,
            }),
        };

        let result = store.insert(widget("last", 1.0)).await;
        assert!(matches!(result, Err(StoreError::IdsExhausted)));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_row_is_conflict() {
        let store = MemoryProductStore::new();
        let ghost = widget("ghost", 0.0).with_id(99);

        let result = store.update(&ghost).await;
        assert!(matches!(result, Err(StoreError::Conflict)));
        assert!(!store.exists(99).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let store = MemoryProductStore::new();
        let mut product = store.insert(widget("a", 1.0)).await.unwrap();
        product.name = "renamed".to_string();
        product.description = Some("new".to_string());

        store.update(&product).await.unwrap();
        assert_eq!(store.find(product.id).await.unwrap(), Some(product));
    }
}
