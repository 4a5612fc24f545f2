use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

const RATE_LIMIT_HEADER: &str = "x-ratelimit-limit";
const RATE_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// All errors that can occur when using the Unsplash client.
///
/// The first five variants are the API taxonomy: the request reached
/// Unsplash and was rejected with a non-2xx status. Each carries the
/// message, the HTTP status and the raw response body. The remaining
/// variants never come from an HTTP status.
#[derive(Error, Debug)]
pub enum UnsplashError {
    /// The access key is missing or invalid (HTTP 401).
    #[error("authentication failed ({status}): {message}")]
    Authentication {
        message: String,
        status: u16,
        body: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("not found ({status}): {message}")]
    NotFound {
        message: String,
        status: u16,
        body: String,
    },

    /// The request parameters were rejected (HTTP 422).
    #[error("validation failed ({status}): {message}")]
    Validation {
        message: String,
        /// Itemized messages from the `errors` array of the response.
        errors: Vec<String>,
        status: u16,
        body: String,
    },

    /// The hourly request quota is exhausted (HTTP 429).
    #[error("rate limited ({remaining}/{limit} remaining): {message}")]
    RateLimit {
        message: String,
        /// `X-Ratelimit-Limit`, or 0 when absent.
        limit: u32,
        /// `X-Ratelimit-Remaining`, or 0 when absent.
        remaining: u32,
        status: u16,
        body: String,
    },

    /// Any other non-2xx response.
    #[error("API error {status}: {message}")]
    Api {
        message: String,
        status: u16,
        body: String,
    },

    /// The request never completed: DNS, connect, TLS, timeout, or a
    /// failure while reading the body.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A successful response did not match the expected schema.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The client could not be built from the supplied settings.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    /// The request was rejected before anything was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Coarse classification of an [`UnsplashError`], handy for `match`-free
/// comparisons and for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Authentication,
    NotFound,
    Validation,
    RateLimit,
    Api,
    Http,
    Decode,
    InvalidConfig,
    InvalidRequest,
}

impl UnsplashError {
    /// Classify a non-2xx response.
    ///
    /// This is a pure function of the status, headers and body. Both the
    /// async and the blocking transport call it, so the two always agree.
    pub fn from_response_parts(status: StatusCode, headers: &HeaderMap, body: String) -> Self {
        let errors = itemized_errors(&body);
        let message = if errors.is_empty() {
            body.clone()
        } else {
            errors.join(", ")
        };
        let status = status.as_u16();

        match status {
            401 => Self::Authentication {
                message,
                status,
                body,
            },
            404 => Self::NotFound {
                message,
                status,
                body,
            },
            422 => Self::Validation {
                message,
                errors,
                status,
                body,
            },
            429 => Self::RateLimit {
                message,
                limit: header_u32(headers, RATE_LIMIT_HEADER),
                remaining: header_u32(headers, RATE_REMAINING_HEADER),
                status,
                body,
            },
            _ => Self::Api {
                message,
                status,
                body,
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::RateLimit { .. } => ErrorKind::RateLimit,
            Self::Api { .. } => ErrorKind::Api,
            Self::Http(_) => ErrorKind::Http,
            Self::Decode(_) => ErrorKind::Decode,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
        }
    }

    /// `true` when the API answered with a non-2xx status, as opposed to
    /// the request failing on the way there or the answer failing to decode.
    pub fn is_api_error(&self) -> bool {
        self.http_status().is_some()
    }

    /// Human-readable message. For API errors this is the joined `errors`
    /// array, or the raw body when there is none.
    pub fn message(&self) -> String {
        match self {
            Self::Authentication { message, .. }
            | Self::NotFound { message, .. }
            | Self::Validation { message, .. }
            | Self::RateLimit { message, .. }
            | Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of the rejected request; `None` for non-API errors.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. }
            | Self::NotFound { status, .. }
            | Self::Validation { status, .. }
            | Self::RateLimit { status, .. }
            | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of the rejected request; `None` for non-API errors.
    pub fn http_body(&self) -> Option<&str> {
        match self {
            Self::Authentication { body, .. }
            | Self::NotFound { body, .. }
            | Self::Validation { body, .. }
            | Self::RateLimit { body, .. }
            | Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Strings from a top-level `{"errors": [...]}` object. Anything else
/// (non-JSON, another shape, non-string items) yields an empty list.
fn itemized_errors(body: &str) -> Vec<String> {
    let Ok(serde_json::Value::Object(data)) = serde_json::from_str::<serde_json::Value>(body) else {
        return Vec::new();
    };
    let Some(serde_json::Value::Array(items)) = data.get("errors") else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| item.as_str().map(str::to_owned))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}

fn header_u32(headers: &HeaderMap, name: &str) -> u32 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// A convenience alias for `Result<T, UnsplashError>`.
pub type Result<T> = std::result::Result<T, UnsplashError>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn classify(status: u16, body: &str) -> UnsplashError {
        UnsplashError::from_response_parts(
            StatusCode::from_u16(status).unwrap(),
            &HeaderMap::new(),
            body.to_string(),
        )
    }

    #[test]
    fn status_codes_map_to_variants() {
        let body = r#"{"errors":["nope"]}"#;
        let cases = [
            (401, ErrorKind::Authentication),
            (404, ErrorKind::NotFound),
            (422, ErrorKind::Validation),
            (429, ErrorKind::RateLimit),
            (500, ErrorKind::Api),
            (403, ErrorKind::Api),
            (400, ErrorKind::Api),
        ];
        for (status, kind) in cases {
            let err = classify(status, body);
            assert_eq!(err.kind(), kind, "status {status}");
            assert_eq!(err.http_status(), Some(status));
            assert_eq!(err.http_body(), Some(body));
            assert_eq!(err.message(), "nope");
            assert!(err.is_api_error());
        }
    }

    #[test]
    fn validation_errors_are_joined() {
        let err = classify(422, r#"{"errors": ["a","b"]}"#);
        match err {
            UnsplashError::Validation {
                ref message,
                ref errors,
                ..
            } => {
                assert_eq!(errors, &["a".to_string(), "b".to_string()]);
                assert_eq!(message, "a, b");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn non_json_body_becomes_message() {
        let err = classify(422, "<html>bad gateway</html>");
        assert_eq!(err.message(), "<html>bad gateway</html>");
        match err {
            UnsplashError::Validation { errors, .. } => assert!(errors.is_empty()),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn empty_or_malformed_errors_fall_back_to_body() {
        for body in [
            r#"{"errors": []}"#,
            r#"{"errors": "oops"}"#,
            r#"{"errors": ["ok", 3]}"#,
            r#"{"error": "singular"}"#,
            r#"["a", "b"]"#,
            "",
        ] {
            assert_eq!(classify(500, body).message(), body);
        }
    }

    #[test]
    fn rate_limit_reads_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("50"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("10"));
        let err = UnsplashError::from_response_parts(
            StatusCode::TOO_MANY_REQUESTS,
            &headers,
            "Rate Limit Exceeded".to_string(),
        );
        match err {
            UnsplashError::RateLimit {
                limit,
                remaining,
                message,
                ..
            } => {
                assert_eq!(limit, 50);
                assert_eq!(remaining, 10);
                assert_eq!(message, "Rate Limit Exceeded");
            }
            other => panic!("expected RateLimit, got {other:?}"),
        }
    }

    #[test]
    fn rate_limit_defaults_to_zero() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("lots"));
        let err = UnsplashError::from_response_parts(
            StatusCode::TOO_MANY_REQUESTS,
            &headers,
            String::new(),
        );
        assert!(matches!(
            err,
            UnsplashError::RateLimit {
                limit: 0,
                remaining: 0,
                ..
            }
        ));
    }

    #[test]
    fn non_api_errors_have_no_status() {
        let err = UnsplashError::InvalidRequest("path must start with '/'".into());
        assert_eq!(err.http_status(), None);
        assert_eq!(err.http_body(), None);
        assert!(!err.is_api_error());
        assert_eq!(err.message(), "invalid request: path must start with '/'");

        let decode = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        assert_eq!(UnsplashError::from(decode).kind(), ErrorKind::Decode);
    }
}
