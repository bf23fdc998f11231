use std::path::Path;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures surfaced by the kubernetes access layer.
///
/// A missing object is never an error: reads return `None` and deletes succeed.
#[derive(Debug, Error)]
pub enum Error {
    /// The api server rejected a write because the object already exists or was changed concurrently.
    #[error("{kind} [{name}] conflicts with the current server state: {message}")]
    Conflict { kind: String, name: String, message: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("fail to load kubernetes config from {location}: {reason}")]
    Configuration { location: String, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("controller request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid controller response: {0}")]
    Json(#[from] serde_json::Error),
    /// The api server answered a delete with a failure status.
    #[error("{kind} [{name}] delete returned status {reason}: {message}")]
    UnexpectedStatus { kind: String, name: String, reason: String, message: String },
    #[error("kubernetes api request failed: {0}")]
    Kube(#[from] kube::Error),
}

impl Error {
    /// Map an api error of a write on `kind/name`, keeping 409 apart so callers can report a domain conflict.
    pub(crate) fn from_write(error: kube::Error, kind: &str, name: &str) -> Self {
        match error {
            kube::Error::Api(response) if response.code == 409 => Error::Conflict {
                kind: kind.to_string(),
                name: name.to_string(),
                message: response.message,
            },
            error => Error::Kube(error),
        }
    }

    pub(crate) fn configuration(path: Option<&Path>, reason: impl ToString) -> Self {
        Error::Configuration {
            location: path.map(|p| p.display().to_string()).unwrap_or_else(|| "the default location".to_string()),
            reason: reason.to_string(),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict { .. })
    }

    /// HTTP status code reported by the api server, if this error came from it.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Conflict { .. } => Some(409),
            Error::Kube(kube::Error::Api(response)) => Some(response.code),
            Error::Http(error) => error.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn api_error(code: u16, reason: &str) -> kube::Error {
        kube::Error::Api(kube::error::ErrorResponse {
            status: "Failure".to_string(),
            message: format!("{reason} happened"),
            reason: reason.to_string(),
            code,
        })
    }

    #[test]
    fn test_write_conflict_is_distinct() {
        let error = Error::from_write(api_error(409, "AlreadyExists"), "ConfigMap", "cm-a");
        assert!(error.is_conflict());
        assert_eq!(error.status_code(), Some(409));
        assert_eq!(error.to_string(), "ConfigMap [cm-a] conflicts with the current server state: AlreadyExists happened");

        let error = Error::from_write(api_error(422, "Invalid"), "ConfigMap", "cm-a");
        assert!(!error.is_conflict());
        assert_eq!(error.status_code(), Some(422));
    }

    #[test]
    fn test_configuration_message() {
        let error = Error::configuration(None, "no context");
        assert_eq!(error.to_string(), "fail to load kubernetes config from the default location: no context");
        let error = Error::configuration(Some(Path::new("/tmp/kubeconfig")), "missing");
        assert_eq!(error.to_string(), "fail to load kubernetes config from /tmp/kubeconfig: missing");
    }
}
