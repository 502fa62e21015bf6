use review_agg_models::Platform;
use thiserror::Error;

/// Errors a source client is allowed to surface.
///
/// Upstream failures never appear here: a provider that times out, rejects
/// the request, or returns a non-OK payload degrades to an empty snapshot
/// inside the client instead. Only configuration problems escalate.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Checked before any network call is made.
    #[error("{platform} credential is not configured")]
    MissingCredential { platform: Platform },

    #[error("{platform} identifier is empty")]
    EmptyIdentifier { platform: Platform },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_platform() {
        let err = SourceError::MissingCredential {
            platform: Platform::Google,
        };
        assert_eq!(err.to_string(), "google credential is not configured");

        let err = SourceError::EmptyIdentifier {
            platform: Platform::Facebook,
        };
        assert_eq!(err.to_string(), "facebook identifier is empty");
    }
}
