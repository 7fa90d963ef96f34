use std::io::Read;

use bytes::Bytes;
use flate2::read::GzDecoder;
use reqwest::StatusCode;
use reqwest::header::CONTENT_ENCODING;

use crate::error::RequestError;

/// Reads a completed response down to its decoded body bytes.
///
/// Any status other than 200 becomes a classified [`RequestError::Api`]
/// carrying the status code and the target URI. On success the body is
/// gunzipped when the `Content-Encoding` header says so, and passed through
/// unchanged otherwise.
///
/// Structured decoding is the caller's job; this only yields bytes.
pub(crate) async fn read_body(
    response: reqwest::Response,
    uri: &str,
) -> Result<Bytes, RequestError> {
    if response.status() != StatusCode::OK {
        return Err(RequestError::api(response.status().as_u16(), Some(uri)));
    }

    let gzipped = response
        .headers()
        .get(CONTENT_ENCODING)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|encoding| encoding.eq_ignore_ascii_case("gzip"));

    let body = response.bytes().await?;
    if gzipped { gunzip(&body) } else { Ok(body) }
}

fn gunzip(body: &[u8]) -> Result<Bytes, RequestError> {
    let mut decoded = Vec::with_capacity(body.len() * 2);
    GzDecoder::new(body)
        .read_to_end(&mut decoded)
        .map_err(|err| RequestError::Decode(format!("gzip: {err}")))?;
    Ok(Bytes::from(decoded))
}
