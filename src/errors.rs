use thiserror::Error;

/// Failure kinds surfaced by the provider clients.
///
/// "Not found" is an explicit kind rather than an opaque string code so
/// callers can match on it: the app registry lookup and the lambda trigger
/// deletion both treat it as a positive signal, everything else is fatal.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The referenced resource does not exist.
    #[error("{service}: not found: {message}")]
    NotFound {
        service: &'static str,
        message: String,
    },

    /// The provider rejected the call due to rate limiting.
    #[error("{service}: throttled: {message}")]
    Throttled {
        service: &'static str,
        message: String,
    },

    /// Any other provider failure, transport errors included.
    #[error("{service}: {message}")]
    Other {
        service: &'static str,
        message: String,
    },
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguishable() {
        let err = ProviderError::NotFound {
            service: "lambda",
            message: "function gone".to_string(),
        };
        assert!(err.is_not_found());

        let err = ProviderError::Throttled {
            service: "cognito-idp",
            message: "rate exceeded".to_string(),
        };
        assert!(!err.is_not_found());
    }
}
