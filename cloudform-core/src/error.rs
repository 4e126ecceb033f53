//! Error types shared by the cloudform crates

use thiserror::Error;

/// Result alias used across cloudform-core
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading, decoding, or rendering templates
#[derive(Debug, Error)]
pub enum Error {
    /// An intrinsic function had arguments of the wrong shape
    #[error("Invalid {function} arguments: {reason}")]
    InvalidIntrinsic { function: String, reason: String },

    /// A YAML short-form tag that is not a CloudFormation intrinsic
    #[error("Unknown YAML tag '!{0}'")]
    UnknownTag(String),

    /// YAML that has no equivalent in the JSON template model
    #[error("Invalid YAML template: {0}")]
    InvalidYaml(String),

    /// A resource entry was decoded as the wrong catalog type
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Resource entry carries a key CloudFormation does not define
    #[error("Unknown resource attribute '{0}'")]
    UnknownResourceKey(String),

    /// The properties of a resource do not match its catalog shape
    #[error("Invalid properties for {type_name}: {message}")]
    InvalidProperties { type_name: String, message: String },

    /// Could not determine the template format from a path
    #[error("Unsupported template format: {0}")]
    UnsupportedFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_intrinsic(function: &str, reason: impl Into<String>) -> Self {
        Error::InvalidIntrinsic {
            function: function.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_intrinsic_message() {
        let err = Error::invalid_intrinsic("Fn::Join", "expected a 2-element list");
        assert_eq!(
            err.to_string(),
            "Invalid Fn::Join arguments: expected a 2-element list"
        );
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = Error::TypeMismatch {
            expected: "AWS::EMR::Cluster".to_string(),
            actual: "AWS::S3::Bucket".to_string(),
        };
        assert!(err.to_string().contains("expected AWS::EMR::Cluster"));
    }
}
