//! Concurrent GET / POST batches

use crate::error::{HttpError, HttpResult};
use futures::future::try_join_all;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Request headers for one request
pub type Headers = HashMap<String, String>;

/// A completed response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers; repeated names keep the last value
    pub headers: BTreeMap<String, String>,
    /// Body as text
    pub text: String,
    /// Parsed body when the response is JSON
    pub json: Option<serde_json::Value>,
}

/// A POST body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Structured value, serialized before sending
    Json(serde_json::Value),
    /// Pre-serialized body, which must be valid JSON
    Raw(String),
}

impl Payload {
    /// Validate and serialize into the request body
    fn into_body(self, index: usize) -> HttpResult<String> {
        match self {
            Payload::Json(value) => Ok(value.to_string()),
            Payload::Raw(text) => match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(_) => Ok(text),
                Err(e) => Err(HttpError::InvalidJsonPayload {
                    index,
                    message: e.to_string(),
                }),
            },
        }
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::Json(value)
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Raw(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Raw(text.to_string())
    }
}

/// GET every URL concurrently with a fresh client.
///
/// `headers`, when given, must hold one map per URL.
pub async fn fetch_all(
    urls: &[String],
    headers: Option<&[Headers]>,
) -> HttpResult<Vec<HttpResponse>> {
    fetch_all_with(&Client::new(), urls, headers).await
}

/// GET every URL concurrently using `client`
pub async fn fetch_all_with(
    client: &Client,
    urls: &[String],
    headers: Option<&[Headers]>,
) -> HttpResult<Vec<HttpResponse>> {
    let header_maps = resolve_headers(urls.len(), headers)?;
    log::debug!("Sending {} GET request(s)", urls.len());

    let requests = urls
        .iter()
        .zip(header_maps)
        .map(|(url, headers)| send(client.get(url).headers(headers)));

    try_join_all(requests).await
}

/// POST every payload to `url` concurrently with a fresh client.
///
/// All payloads are validated before any request is sent. `headers` must
/// hold one map per payload.
pub async fn post_all(
    url: &str,
    payloads: Vec<Payload>,
    headers: &[Headers],
) -> HttpResult<Vec<HttpResponse>> {
    post_all_with(&Client::new(), url, payloads, headers).await
}

/// POST every payload to `url` concurrently using `client`
pub async fn post_all_with(
    client: &Client,
    url: &str,
    payloads: Vec<Payload>,
    headers: &[Headers],
) -> HttpResult<Vec<HttpResponse>> {
    let header_maps = resolve_headers(payloads.len(), Some(headers))?;
    let bodies = payloads
        .into_iter()
        .enumerate()
        .map(|(index, payload)| payload.into_body(index))
        .collect::<HttpResult<Vec<String>>>()?;

    log::debug!("Sending {} POST request(s) to {}", bodies.len(), url);

    let requests = bodies
        .into_iter()
        .zip(header_maps)
        .map(|(body, headers)| send(client.post(url).headers(headers).body(body)));

    try_join_all(requests).await
}

/// One header map per request, defaulting to empty maps
fn resolve_headers(count: usize, headers: Option<&[Headers]>) -> HttpResult<Vec<HeaderMap>> {
    match headers {
        None => Ok(vec![HeaderMap::new(); count]),
        Some(list) if list.len() != count => Err(HttpError::LengthMismatch {
            expected: count,
            actual: list.len(),
        }),
        Some(list) => list.iter().map(to_header_map).collect(),
    }
}

fn to_header_map(headers: &Headers) -> HttpResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let invalid = |message: String| HttpError::InvalidHeader {
            name: name.clone(),
            message,
        };
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

async fn send(request: RequestBuilder) -> HttpResult<HttpResponse> {
    let response = request.send().await?;
    let status = response.status().as_u16();

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("json"));

    let headers: BTreeMap<String, String> = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    let text = response.text().await?;
    let json = if is_json {
        serde_json::from_str(&text).ok()
    } else {
        None
    };

    Ok(HttpResponse {
        status,
        headers,
        text,
        json,
    })
}

#[cfg(test)]
#[path = "requests_test.rs"]
mod tests;
