//! Request body extractor.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body whose rejections go through [`AppError`].
///
/// A malformed body, an unknown enum value or a missing content type all
/// answer 400 with the usual `{"error": ...}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
