//! 产品资源：模型、存储、服务与 HTTP 处理器

pub mod handler;
pub mod memory;
pub mod model;
pub mod postgres;
pub mod service;
pub mod store;

pub use memory::MemoryProductStore;
pub use model::{NewProduct, Product};
pub use postgres::PgProductStore;
pub use service::ProductService;
pub use store::{ProductStore, StoreError, StoreResult};
