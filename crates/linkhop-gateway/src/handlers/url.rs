use crate::error::Result;
use crate::model::{CreateUrlRequest, CreateUrlResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkhop_core::{LongUrl, ShortCode, StorageError, ValidationError};
use linkhop_redirector::RedirectorError;
use tracing::debug;
use url::Url;

pub async fn create_url_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateUrlResponse>)> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "unreadable shorten request");
        ValidationError::Missing
    })?;

    let original_url = LongUrl::parse(request.url)?;
    let short_code = state.shortener().shorten(original_url).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUrlResponse {
            short_url: short_code.to_url(state.base_url()),
        }),
    ))
}

pub async fn redirect_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    // A segment that does not decode to UTF-8 cannot match any stored code.
    let Path(short_id) = path.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "undecodable short code");
        RedirectorError::NotFound(rejection.body_text())
    })?;

    let record = state
        .redirector()
        .resolve(&ShortCode::new_unchecked(short_id))
        .await?;

    let location = location_header(&record.original_url)?;
    Ok((StatusCode::MOVED_PERMANENTLY, [(LOCATION, location)]).into_response())
}

/// The stored URL as a `Location` value.
///
/// URLs that are not plain visible ASCII (IDN hosts, raw UTF-8 paths) fall
/// back to their normalized serialization, which is always ASCII.
/// `HeaderValue::from_str` admits obs-text bytes, so it cannot be the check.
fn location_header(original_url: &str) -> std::result::Result<HeaderValue, RedirectorError> {
    if original_url.bytes().all(|b| (0x21..0x7f).contains(&b)) {
        if let Ok(value) = HeaderValue::from_str(original_url) {
            return Ok(value);
        }
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            RedirectorError::Storage(StorageError::InvalidData(format!(
                "stored url is not a valid location: {original_url}"
            )))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_urls_are_used_verbatim() {
        assert_eq!(
            location_header("https://www.example.com").unwrap(),
            "https://www.example.com"
        );
    }

    #[test]
    fn non_ascii_urls_are_normalized() {
        assert_eq!(
            location_header("https://bücher.example/straße").unwrap(),
            "https://xn--bcher-kva.example/stra%C3%9Fe"
        );
    }

    #[test]
    fn spaces_are_percent_encoded() {
        assert_eq!(
            location_header("https://example.com/a b").unwrap(),
            "https://example.com/a%20b"
        );
    }

    #[test]
    fn unusable_urls_are_reported_as_storage_faults() {
        assert!(matches!(
            location_header("not a url\u{7f}"),
            Err(RedirectorError::Storage(StorageError::InvalidData(_)))
        ));
    }
}
