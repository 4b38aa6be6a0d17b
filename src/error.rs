//! Fetch Errors
//!
//! Failure kinds shared by every data source, plus the user-facing text the
//! status banner shows for each of them.

use serde::Deserialize;
use thiserror::Error;

/// Data-source failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No response at all (connection refused, DNS, CORS, aborted body)
    #[error("server unreachable: {0}")]
    Unreachable(String),

    #[error("endpoint not found (404)")]
    NotFound,

    #[error("server error ({status})")]
    Server { status: u16 },

    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// Body did not match the expected schema
    #[error("malformed upstream response: {0}")]
    Malformed(String),
}

/// Error payload returned by the portfolio backend
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl FetchError {
    /// Classify a response status. `None` for 2xx.
    ///
    /// `body` is only consulted for statuses that are neither 404 nor 5xx.
    pub fn from_status(status: u16, reason: Option<&str>, body: &str) -> Option<Self> {
        match status {
            200..=299 => None,
            0 => Some(FetchError::Unreachable("no response".to_string())),
            404 => Some(FetchError::NotFound),
            500..=u16::MAX => Some(FetchError::Server { status }),
            _ => {
                let message = serde_json::from_str::<ErrorBody>(body)
                    .ok()
                    .and_then(|b| b.message)
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| format!("Erreur {}: {}", status, reason.unwrap_or("")).trim_end().to_string());
                Some(FetchError::Status { status, message })
            }
        }
    }

    /// Text shown to the visitor
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Unreachable(_) => {
                "Impossible de contacter le serveur. Vérifiez votre connexion.".to_string()
            }
            FetchError::NotFound => "L'API n'a pas été trouvée. Vérifiez l'URL du backend.".to_string(),
            FetchError::Server { .. } => "Erreur serveur. Veuillez réessayer plus tard.".to_string(),
            FetchError::Status { message, .. } => message.clone(),
            FetchError::Malformed(_) => "Réponse inattendue du serveur.".to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Malformed(err.to_string())
        } else {
            FetchError::Unreachable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_not_an_error() {
        assert_eq!(FetchError::from_status(200, Some("OK"), ""), None);
        assert_eq!(FetchError::from_status(204, None, ""), None);
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(FetchError::from_status(404, Some("Not Found"), ""), Some(FetchError::NotFound));
        assert_eq!(FetchError::from_status(503, None, ""), Some(FetchError::Server { status: 503 }));
        assert!(matches!(FetchError::from_status(0, None, ""), Some(FetchError::Unreachable(_))));
    }

    #[test]
    fn test_other_status_uses_body_message() {
        let body = r#"{"error":"Forbidden","message":"API rate limit exceeded","code":403}"#;
        let err = FetchError::from_status(403, Some("Forbidden"), body).unwrap();
        assert_eq!(err.user_message(), "API rate limit exceeded");
    }

    #[test]
    fn test_other_status_without_body_message() {
        let err = FetchError::from_status(418, Some("I'm a teapot"), "not json").unwrap();
        assert_eq!(
            err,
            FetchError::Status { status: 418, message: "Erreur 418: I'm a teapot".to_string() }
        );
    }

    #[test]
    fn test_user_messages_are_distinct() {
        let unreachable = FetchError::Unreachable("refused".to_string()).user_message();
        let not_found = FetchError::NotFound.user_message();
        let server = FetchError::Server { status: 500 }.user_message();
        assert_ne!(unreachable, not_found);
        assert_ne!(not_found, server);
        assert_ne!(unreachable, server);
    }
}
