//! JSON extractor that tolerates missing bodies.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Json, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

const EMPTY_OBJECT: &[u8] = b"{}";

/// JSON body extractor with body-parser semantics.
///
/// - no JSON `Content-Type` (or none at all): the body is ignored and `T` is
///   built from `{}`
/// - JSON `Content-Type` with an empty body: same as above
/// - JSON `Content-Type` with a body: malformed input is rejected with the
///   parser's own status (400) before the handler runs
/// - a top-level array reads as `{}`; a top-level string, number, boolean or
///   `null` is rejected with 400
///
/// `T` should therefore tolerate an empty object, typically by making its
/// fields `Option`.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::LenientJson;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateItem {
///     name: Option<String>,
/// }
///
/// async fn create_item(LenientJson(payload): LenientJson<CreateItem>) -> String {
///     format!("Creating item: {:?}", payload.name)
/// }
///
/// let app = Router::new().route("/items", post(create_item));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        let body: &[u8] = if json && !bytes.is_empty() {
            &bytes
        } else {
            EMPTY_OBJECT
        };

        let Json(raw) = Json::<Value>::from_bytes(body)?;
        let body = match raw {
            Value::Object(_) => body,
            Value::Array(_) => EMPTY_OBJECT,
            _ => {
                return Err(AppError::BadRequest(
                    "JSON body must be an object or an array".to_string(),
                ));
            }
        };

        let Json(value) = Json::<T>::from_bytes(body)?;
        Ok(LenientJson(value))
    }
}

/// `application/json` or any `application/*+json` type, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
