//! Extractors whose rejections share the [`AppError`] JSON body.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body. A body that is missing, malformed or of the wrong
/// shape is answered with 400 `BAD_REQUEST` instead of axum's plain-text
/// 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
