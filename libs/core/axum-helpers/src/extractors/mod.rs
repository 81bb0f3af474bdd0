//! Custom extractors for Axum handlers.
//!
//! Wrap axum's own extractors so rejections render through [`AppError`]
//! with the standard error envelope instead of axum's plain-text bodies.
//!
//! [`AppError`]: crate::errors::AppError

pub mod json;
pub mod query;

pub use json::JsonBody;
pub use query::QueryParams;
