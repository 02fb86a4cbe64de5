//! Error types for the listing decoder.

use std::fmt;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when decoding responses or assembling trees.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Structural decode failure (malformed JSON or an unexpected outer shape)
    Decode(String),

    /// A record could not be encoded back to JSON
    Encode(String),

    /// A supported kind whose payload did not decode as its record
    Payload {
        /// Kind discriminator of the failing envelope
        kind: String,
        /// Decoder message
        message: String,
    },

    /// The first listing of a post-and-comments pair held no post
    MissingPost,

    /// Errors reported by the API inside a `json.errors` array
    Api(Vec<String>),

    /// No parent with a matching full ID exists in the tree
    Orphan {
        /// Full ID of the node that could not be placed
        full_id: String,
        /// Parent full ID that was searched for
        parent_id: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(msg) => write!(f, "Decode error: {msg}"),
            Error::Encode(msg) => write!(f, "Encode error: {msg}"),
            Error::Payload { kind, message } => {
                write!(f, "Invalid {kind} payload: {message}")
            }
            Error::MissingPost => write!(f, "Decode error: listing holds no post"),
            Error::Api(errors) => write!(f, "API error: {}", errors.join("; ")),
            Error::Orphan { full_id, parent_id } => {
                write!(f, "No parent {parent_id} in tree for {full_id}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::Orphan {
            full_id: "t1_b".to_string(),
            parent_id: "t1_a".to_string(),
        };
        assert_eq!(err.to_string(), "No parent t1_a in tree for t1_b");

        let err = Error::Api(vec!["RATELIMIT".to_string(), "TOO_LONG".to_string()]);
        assert_eq!(err.to_string(), "API error: RATELIMIT; TOO_LONG");
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
