//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use crate::models::UserId;

/// Largest request body accepted, in bytes (100kb)
pub const BODY_LIMIT: usize = 100 * 1024;

/// Extract a user id from the path.
///
/// The id is read leniently by [`parse_id`]. Anything with no leading
/// number can never match a stored user, so it is rejected as not found
/// rather than as a bad request.
pub struct UserIdParam(pub UserId);

impl<S> FromRequestParts<S> for UserIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        parse_id(&raw).map(Self).ok_or(ApiError::NotFound)
    }
}

/// Read the integer at the start of `raw`, ignoring whatever follows.
///
/// Leading whitespace and one sign character are skipped, and a `0x`
/// prefix switches to hex, so `"1.5"` and `"2abc"` read as 1 and 2.
/// Returns `None` when there are no digits or the value is negative or
/// out of range, none of which can be a stored id.
pub fn parse_id(raw: &str) -> Option<UserId> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = s
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }

    let value = UserId::from_str_radix(&s[..end], radix).ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

/// JSON body with body-parser semantics.
///
/// Only `application/json` bodies are parsed. A missing body, an empty body,
/// a top-level array, or a different content type yields `T::default()`.
/// Malformed JSON or a top-level scalar is a 400, an oversized body a 413.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                ApiError::BadRequest(format!("Failed to read request body: {}", e))
            }
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(invalid_json)?;
        match value {
            Value::Object(_) => serde_json::from_value(value).map(Self).map_err(invalid_json),
            // Arrays carry no named fields
            Value::Array(_) => Ok(Self(T::default())),
            _ => Err(ApiError::BadRequest(
                "Invalid JSON body: expected an object or array".to_owned(),
            )),
        }
    }
}

fn invalid_json(e: serde_json::Error) -> ApiError {
    ApiError::BadRequest(format!("Invalid JSON body: {}", e))
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = content_type.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json")
}
