//! 请求提取器
//!
//! 包装 axum 的 `Json` 与 `Path`，提取失败统一转换为 [`CoreError::BadRequest`]，
//! 即空响应体的 400。

use axum::extract::{FromRequest, FromRequestParts};

use crate::core::error::CoreError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(CoreError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(CoreError))]
pub struct ApiPath<T>(pub T);
