use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Errors returned while looking up an IP set.
///
/// Every error is terminal for the lookup that produced it; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The request URL could not be built from the base URL, owner, and id.
    #[error("Error creating request: {0}")]
    RequestConstruction(String),

    /// The request could not be sent or the connection failed.
    #[error("Error during making a request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a status other than `200 OK`.
    #[error("HTTP request error. Response code: {0}")]
    RequestFailed(u16),

    /// The response Content-Type is missing or not in the allow-list.
    #[error("Content-Type is not a text type. Got: {0}")]
    UnsupportedContentType(String),

    /// The response body could not be read to the end.
    #[error("Error while reading response body. {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The response body is not a valid IP set document.
    #[error("Error while parsing response body. {}", String::from_utf8_lossy(.body))]
    Decode {
        #[source]
        source: serde_json::Error,
        body: Vec<u8>,
    },

    /// A required configuration value is absent or empty.
    #[error("required field is not set: {0}")]
    MissingField(String),

    #[error("Invalid CIDR `{cidr}`: {source}")]
    InvalidCidr {
        cidr: String,
        #[source]
        source: ipnetwork::IpNetworkError,
    },

    #[error("Invalid lastUpdate timestamp `{value}`: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message_carries_status_code() {
        assert_eq!(
            Error::RequestFailed(401).to_string(),
            "HTTP request error. Response code: 401"
        );
        assert!(Error::RequestFailed(404).to_string().contains("404"));
    }

    #[test]
    fn test_decode_message_carries_raw_body() {
        let body = b"{ not json".to_vec();
        let source = serde_json::from_slice::<serde_json::Value>(&body).unwrap_err();
        let error = Error::Decode { source, body };
        assert_eq!(
            error.to_string(),
            "Error while parsing response body. { not json"
        );
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            Error::MissingField("apikey".to_string()).to_string(),
            "required field is not set: apikey"
        );
    }
}
