//! Credential configuration for the authorization step
//!
//! Credentials are read once, at startup, into an [`AuthConfig`] value that
//! is handed to the [`Authorizer`](crate::services::Authorizer). Nothing
//! past that point looks at the environment.
//!
//! ## Configuration Sources
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values.
//!
//! ## Per-service Keys (`<SERVICE>` is `YOUTUBE` or `SPOTIFY`)
//! - `<SERVICE>_ACCESS_TOKEN`: an already-authorized bearer token, or
//! - `<SERVICE>_CLIENT_ID`, `<SERVICE>_CLIENT_SECRET`, `<SERVICE>_REFRESH_TOKEN`:
//!   exchanged for an access token at startup
//! - `<SERVICE>_API_BASE`, `<SERVICE>_TOKEN_URL`: optional endpoint overrides

use std::fmt;

use crate::error::{TransferError, TransferResult};

/// How an access token is obtained for one service
#[derive(Clone, PartialEq, Eq)]
pub enum TokenGrant {
    /// Token is already authorized
    Access(String),
    /// Token is minted from a long-lived refresh token
    Refresh {
        client_id: String,
        client_secret: String,
        refresh_token: String,
    },
}

impl fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenGrant::Access(_) => f.write_str("Access(<redacted>)"),
            TokenGrant::Refresh { client_id, .. } => f
                .debug_struct("Refresh")
                .field("client_id", client_id)
                .field("client_secret", &"<redacted>")
                .field("refresh_token", &"<redacted>")
                .finish(),
        }
    }
}

/// Credentials and endpoints for one remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAuth {
    pub service: &'static str,
    pub grant: TokenGrant,
    pub api_base: String,
    pub token_url: String,
}

/// Credentials for both catalogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub youtube: ServiceAuth,
    pub spotify: ServiceAuth,
}

struct ServiceVars {
    service: &'static str,
    prefix: &'static str,
    default_api_base: &'static str,
    default_token_url: &'static str,
}

const YOUTUBE: ServiceVars = ServiceVars {
    service: "YouTube",
    prefix: "YOUTUBE",
    default_api_base: "https://www.googleapis.com/youtube/v3",
    default_token_url: "https://oauth2.googleapis.com/token",
};

const SPOTIFY: ServiceVars = ServiceVars {
    service: "Spotify",
    prefix: "SPOTIFY",
    default_api_base: "https://api.spotify.com/v1",
    default_token_url: "https://accounts.spotify.com/api/token",
};

impl AuthConfig {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> TransferResult<Self> {
        // Silently ignored when no .env file exists
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> TransferResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            youtube: service_auth(&YOUTUBE, &lookup)?,
            spotify: service_auth(&SPOTIFY, &lookup)?,
        })
    }
}

fn service_auth<F>(vars: &ServiceVars, lookup: &F) -> TransferResult<ServiceAuth>
where
    F: Fn(&str) -> Option<String>,
{
    let key = |suffix: &str| format!("{}_{}", vars.prefix, suffix);

    let grant = if let Some(token) = lookup(&key("ACCESS_TOKEN")) {
        TokenGrant::Access(token)
    } else {
        let client_id = lookup(&key("CLIENT_ID"));
        let client_secret = lookup(&key("CLIENT_SECRET"));
        let refresh_token = lookup(&key("REFRESH_TOKEN"));

        match (client_id, client_secret, refresh_token) {
            (Some(client_id), Some(client_secret), Some(refresh_token)) => TokenGrant::Refresh {
                client_id,
                client_secret,
                refresh_token,
            },
            _ => {
                return Err(TransferError::ConfigError {
                    message: format!(
                        "{} credentials not found. Set {} or all of {}, {}, {}",
                        vars.service,
                        key("ACCESS_TOKEN"),
                        key("CLIENT_ID"),
                        key("CLIENT_SECRET"),
                        key("REFRESH_TOKEN"),
                    ),
                })
            }
        }
    };

    Ok(ServiceAuth {
        service: vars.service,
        grant,
        api_base: lookup(&key("API_BASE"))
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| vars.default_api_base.to_string()),
        token_url: lookup(&key("TOKEN_URL")).unwrap_or_else(|| vars.default_token_url.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_access_tokens_with_default_endpoints() {
        let config = AuthConfig::from_lookup(lookup_from(&[
            ("YOUTUBE_ACCESS_TOKEN", "yt-token"),
            ("SPOTIFY_ACCESS_TOKEN", "sp-token"),
        ]))
        .unwrap();

        assert_eq!(config.youtube.grant, TokenGrant::Access("yt-token".to_string()));
        assert_eq!(config.youtube.api_base, "https://www.googleapis.com/youtube/v3");
        assert_eq!(config.spotify.grant, TokenGrant::Access("sp-token".to_string()));
        assert_eq!(config.spotify.api_base, "https://api.spotify.com/v1");
        assert_eq!(config.spotify.token_url, "https://accounts.spotify.com/api/token");
    }

    #[test]
    fn test_refresh_grant_and_overrides() {
        let config = AuthConfig::from_lookup(lookup_from(&[
            ("YOUTUBE_ACCESS_TOKEN", "yt-token"),
            ("SPOTIFY_CLIENT_ID", "id"),
            ("SPOTIFY_CLIENT_SECRET", "secret"),
            ("SPOTIFY_REFRESH_TOKEN", "refresh"),
            ("SPOTIFY_API_BASE", "http://127.0.0.1:9000/v1/"),
            ("SPOTIFY_TOKEN_URL", "http://127.0.0.1:9000/token"),
        ]))
        .unwrap();

        assert_eq!(
            config.spotify.grant,
            TokenGrant::Refresh {
                client_id: "id".to_string(),
                client_secret: "secret".to_string(),
                refresh_token: "refresh".to_string(),
            }
        );
        assert_eq!(config.spotify.api_base, "http://127.0.0.1:9000/v1");
        assert_eq!(config.spotify.token_url, "http://127.0.0.1:9000/token");
    }

    #[test]
    fn test_access_token_wins_over_refresh_grant() {
        let config = AuthConfig::from_lookup(lookup_from(&[
            ("YOUTUBE_ACCESS_TOKEN", "yt-token"),
            ("YOUTUBE_CLIENT_ID", "id"),
            ("YOUTUBE_CLIENT_SECRET", "secret"),
            ("YOUTUBE_REFRESH_TOKEN", "refresh"),
            ("SPOTIFY_ACCESS_TOKEN", "sp-token"),
        ]))
        .unwrap();

        assert!(matches!(config.youtube.grant, TokenGrant::Access(_)));
    }

    #[test]
    fn test_incomplete_credentials_name_the_variables() {
        let result = AuthConfig::from_lookup(lookup_from(&[
            ("YOUTUBE_ACCESS_TOKEN", "yt-token"),
            ("SPOTIFY_CLIENT_ID", "id"),
        ]));

        match result {
            Err(TransferError::ConfigError { message }) => {
                assert!(message.contains("Spotify"));
                assert!(message.contains("SPOTIFY_ACCESS_TOKEN"));
                assert!(message.contains("SPOTIFY_REFRESH_TOKEN"));
            }
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let result = AuthConfig::from_lookup(lookup_from(&[
            ("YOUTUBE_ACCESS_TOKEN", "  "),
            ("SPOTIFY_ACCESS_TOKEN", "sp-token"),
        ]));
        assert!(matches!(result, Err(TransferError::ConfigError { .. })));
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let grant = TokenGrant::Refresh {
            client_id: "visible-id".to_string(),
            client_secret: "hidden-secret".to_string(),
            refresh_token: "hidden-refresh".to_string(),
        };
        let printed = format!("{grant:?}");
        assert!(printed.contains("visible-id"));
        assert!(!printed.contains("hidden"));
        assert!(!format!("{:?}", TokenGrant::Access("tok".to_string())).contains("tok"));
    }
}
