//! Blocking REST transport shared by the backend clients
//!
//! One logical call per method. A `401` carrying a digest challenge is answered
//! once with an `Authorization` header; any other failure surfaces unchanged.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, WWW_AUTHENTICATE};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::infrastructure::digest::{cnonce, Credentials, DigestChallenge};
use crate::infrastructure::{InfraError, InfraResult};

const USER_AGENT: &str = concat!("mongocli/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Envelope of paginated list responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_count: u64,
}

/// Error body returned by both APIs on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    #[serde(default)]
    detail: String,
    #[serde(default)]
    error_code: String,
    #[serde(default)]
    reason: String,
}

/// HTTP client bound to one base URL and one set of API keys.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl ApiClient {
    pub fn new(base_url: &str, credentials: Option<Credentials>) -> InfraResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| InfraError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(InfraError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not a base URL".into(),
            });
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(InfraError::Client)?;
        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve path segments (each percent-encoded) and query against the base URL.
    pub fn url(&self, segments: &[&str], query: &[(&str, String)]) -> InfraResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| InfraError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "not a base URL".into(),
            })?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    pub fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> InfraResult<T> {
        let url = self.url(segments, query)?;
        let response = self.execute(Method::GET, url.clone(), None::<&()>)?;
        decode(url, response)
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> InfraResult<T> {
        let url = self.url(segments, &[])?;
        let response = self.execute(Method::POST, url.clone(), Some(body))?;
        decode(url, response)
    }

    fn execute<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> InfraResult<Response> {
        let build = |authorization: Option<&str>| -> RequestBuilder {
            let mut request = self
                .client
                .request(method.clone(), url.clone())
                .header(ACCEPT, "application/json");
            if let Some(body) = body {
                request = request.json(body);
            }
            if let Some(authorization) = authorization {
                request = request.header(AUTHORIZATION, authorization);
            }
            request
        };

        debug!(method = %method, url = %url, "sending request");
        let response = send(&method, &url, build(None))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            if let (Some(credentials), Some(challenge)) =
                (&self.credentials, digest_challenge(&response))
            {
                trace!("answering digest challenge");
                let challenge = DigestChallenge::parse(&challenge)?;
                let authorization = challenge.authorization(
                    credentials,
                    method.as_str(),
                    &request_uri(&url),
                    &cnonce(),
                    1,
                );
                let response = send(&method, &url, build(Some(&authorization)))?;
                return check_status(&method, &url, response);
            }
        }

        check_status(&method, &url, response)
    }
}

fn send(method: &Method, url: &Url, request: RequestBuilder) -> InfraResult<Response> {
    request.send().map_err(|source| InfraError::Http {
        method: method.to_string(),
        url: url.to_string(),
        source,
    })
}

fn digest_challenge(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(WWW_AUTHENTICATE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| {
            value
                .trim_start()
                .get(..6)
                .is_some_and(|scheme| scheme.eq_ignore_ascii_case("digest"))
        })
        .map(str::to_string)
}

/// `uri` directive value: path plus query of the request URL.
fn request_uri(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

fn check_status(method: &Method, url: &Url, response: Response) -> InfraResult<Response> {
    let status = response.status();
    debug!(status = status.as_u16(), "received response");
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().unwrap_or_default();
    let body: ErrorResponse = serde_json::from_str(&text).unwrap_or_else(|_| ErrorResponse {
        detail: text.trim().to_string(),
        ..Default::default()
    });
    let detail = if body.detail.is_empty() {
        body.reason
    } else {
        body.detail
    };
    Err(InfraError::Api {
        method: method.to_string(),
        url: url.to_string(),
        status: status.as_u16(),
        error_code: body.error_code,
        detail,
    })
}

fn decode<T: DeserializeOwned>(url: Url, response: Response) -> InfraResult<T> {
    response.json::<T>().map_err(|source| InfraError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_base_with_trailing_slash_when_building_url_then_appends_segments() {
        let client = ApiClient::new("https://cloud.mongodb.com/", None).unwrap();
        let url = client
            .url(&["api", "atlas", "v1.0", "orgs", "o1", "apiKeys"], &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://cloud.mongodb.com/api/atlas/v1.0/orgs/o1/apiKeys"
        );
    }

    #[test]
    fn given_base_with_path_prefix_when_building_url_then_keeps_prefix() {
        let client = ApiClient::new("https://om.example.com/mms", None).unwrap();
        let url = client
            .url(&["api", "public", "v1.0"], &[("pageNum", "3".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://om.example.com/mms/api/public/v1.0?pageNum=3"
        );
    }

    #[test]
    fn given_segment_with_slash_when_building_url_then_percent_encodes() {
        let client = ApiClient::new("https://cloud.mongodb.com/", None).unwrap();
        let url = client.url(&["groups", "a/b"], &[]).unwrap();
        assert_eq!(url.path(), "/groups/a%2Fb");
    }

    #[test]
    fn given_query_when_computing_request_uri_then_includes_it() {
        let url = Url::parse("https://h/api/x?pageNum=1").unwrap();
        assert_eq!(request_uri(&url), "/api/x?pageNum=1");
    }

    #[test]
    fn given_garbage_base_url_when_creating_client_then_fails() {
        let err = ApiClient::new("not a url", None).unwrap_err();
        assert!(matches!(err, InfraError::InvalidUrl { .. }));
    }
}
