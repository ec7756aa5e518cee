use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("HTTP status {0}: {1}")]
    HttpStatus(StatusCode, String),
}

impl ApiError {
    /// Status and body of a non-success response, if that is what this is
    pub fn http_status(&self) -> Option<(StatusCode, &str)> {
        match self {
            ApiError::HttpStatus(status, body) => Some((*status, body.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status() {
        let err = ApiError::HttpStatus(StatusCode::NOT_FOUND, "{}".to_string());
        assert_eq!(err.http_status(), Some((StatusCode::NOT_FOUND, "{}")));
        assert_eq!(err.to_string(), "HTTP status 404 Not Found: {}");
    }
}
