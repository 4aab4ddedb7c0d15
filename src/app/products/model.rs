//! 产品数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 产品
///
/// `id` 由存储在创建时分配，请求体中可省略（缺省为 0）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
pub struct Product {
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 1, max = 200, message = "name must be between 1 and 200 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
}

/// 待插入的产品，不含标识符
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl NewProduct {
    /// 由存储分配的标识符组装成完整记录
    pub fn with_id(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

impl From<Product> for NewProduct {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_defaults_when_absent() {
        let product: Product = serde_json::from_value(json!({
            "name": "Widget",
            "price": 10
        }))
        .unwrap();

        assert_eq!(product.id, 0);
        assert_eq!(product.description, None);
        assert_eq!(product.price, 10.0);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_fields() {
        let empty_name = Product {
            id: 0,
            name: String::new(),
            description: None,
            price: 1.0,
        };
        assert!(empty_name.validate().is_err());

        let negative_price = Product {
            id: 0,
            name: "Widget".to_string(),
            description: None,
            price: -0.5,
        };
        let errors = negative_price.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_new_product_drops_id() {
        let product = Product {
            id: 42,
            name: "Widget".to_string(),
            description: Some("blue".to_string()),
            price: 3.5,
        };

        let stored = NewProduct::from(product.clone()).with_id(7);
        assert_eq!(stored.id, 7);
        assert_eq!(stored.name, product.name);
        assert_eq!(stored.description, product.description);
    }
}
