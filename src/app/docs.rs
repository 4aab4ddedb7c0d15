//! API 文档，仅在非生产环境挂载

use axum::{
    response::{Html, Json},
    routing::get,
    Router,
};
use serde_json::{json, Value};

use crate::app::AppState;

pub const OPENAPI_PATH: &str = "/docs/openapi.json";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/docs", get(swagger_ui))
        .route(OPENAPI_PATH, get(openapi_spec))
}

pub async fn swagger_ui() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Product API</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({
                url: '/docs/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true
            });
        };
    </script>
</body>
</html>
"#,
    )
}

pub async fn openapi_spec() -> Json<Value> {
    Json(openapi_document())
}

/// 五个产品操作的 OpenAPI 3.0 描述
pub fn openapi_document() -> Value {
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int32" }
    });
    let product_body = json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/Product" }
            }
        }
    });
    let product_response = |description: &str| {
        json!({
            "description": description,
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/Product" }
                }
            }
        })
    };

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Product API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/api/products": {
                "get": {
                    "operationId": "listProducts",
                    "responses": {
                        "200": {
                            "description": "All products",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Product" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "operationId": "createProduct",
                    "requestBody": product_body.clone(),
                    "responses": {
                        "201": product_response("Created product"),
                        "400": { "description": "Invalid product" }
                    }
                }
            },
            "/api/products/{id}": {
                "get": {
                    "operationId": "getProduct",
                    "parameters": [id_param.clone()],
                    "responses": {
                        "200": product_response("Product"),
                        "404": { "description": "Not found" }
                    }
                },
                "put": {
                    "operationId": "updateProduct",
                    "parameters": [id_param.clone()],
                    "requestBody": product_body,
                    "responses": {
                        "204": { "description": "Updated" },
                        "400": { "description": "Path id and body id differ, or invalid product" },
                        "404": { "description": "Not found" }
                    }
                },
                "delete": {
                    "operationId": "deleteProduct",
                    "parameters": [id_param],
                    "responses": {
                        "204": { "description": "Deleted" },
                        "404": { "description": "Not found" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Product": {
                    "type": "object",
                    "required": ["name", "price"],
                    "properties": {
                        "id": { "type": "integer", "format": "int32" },
                        "name": { "type": "string", "minLength": 1, "maxLength": 200 },
                        "description": { "type": "string", "nullable": true, "maxLength": 2000 },
                        "price": { "type": "number", "format": "double", "minimum": 0 }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_all_operations() {
        let doc = openapi_document();
        let paths = &doc["paths"];

        for method in ["get", "post"] {
            assert!(paths["/api/products"][method].is_object());
        }
        for method in ["get", "put", "delete"] {
            assert!(paths["/api/products/{id}"][method].is_object());
        }
    }
}
