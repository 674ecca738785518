//! Authorization collaborator: turns configured grants into authorized clients
//!
//! Interactive browser flows are not handled here. A grant is either an
//! access token used as-is, or a refresh token exchanged once at startup
//! through the standard OAuth2 `refresh_token` grant.

use reqwest::Client;
use serde::Deserialize;
use shared::{logging, Stage};

use crate::config::{AuthConfig, ServiceAuth, TokenGrant};
use crate::error::{TransferError, TransferResult};
use crate::services::http::build_http_client;
use crate::services::{SpotifyClient, YouTubeClient};

/// Clients ready for use by the pipeline
pub struct AuthorizedClients {
    pub source: YouTubeClient,
    pub destination: SpotifyClient,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Produces authorized catalog clients from an explicit configuration
pub struct Authorizer {
    config: AuthConfig,
    http: Client,
}

impl Authorizer {
    pub fn new(config: AuthConfig) -> TransferResult<Self> {
        Ok(Self {
            config,
            http: build_http_client()?,
        })
    }

    /// Obtain access tokens for both services and build their clients
    pub async fn authorize(&self) -> TransferResult<AuthorizedClients> {
        let youtube_token = self.access_token(&self.config.youtube).await?;
        logging::log_success(Stage::Authorize, "YouTube authorization ready");

        let spotify_token = self.access_token(&self.config.spotify).await?;
        logging::log_success(Stage::Authorize, "Spotify authorization ready");

        Ok(AuthorizedClients {
            source: YouTubeClient::new(&self.config.youtube.api_base, youtube_token)?,
            destination: SpotifyClient::new(&self.config.spotify.api_base, spotify_token)?,
        })
    }

    /// Resolve one service's grant into a bearer token
    pub async fn access_token(&self, auth: &ServiceAuth) -> TransferResult<String> {
        match &auth.grant {
            TokenGrant::Access(token) => Ok(token.clone()),
            TokenGrant::Refresh {
                client_id,
                client_secret,
                refresh_token,
            } => {
                self.refresh(auth, client_id, client_secret, refresh_token)
                    .await
            }
        }
    }

    async fn refresh(
        &self,
        auth: &ServiceAuth,
        client_id: &str,
        client_secret: &str,
        refresh_token: &str,
    ) -> TransferResult<String> {
        let failure = |message: String| TransferError::Authorization {
            service: auth.service.to_string(),
            message,
        };

        let response = self
            .http
            .post(&auth.token_url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "refresh_token"), ("refresh_token", refresh_token)])
            .send()
            .await
            .map_err(|e| failure(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(failure(format!("token endpoint returned {status}: {}", body.trim())));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| failure(format!("invalid token response: {e}")))?;

        if token.access_token.is_empty() {
            return Err(failure("token endpoint returned an empty access token".to_string()));
        }

        Ok(token.access_token)
    }
}
