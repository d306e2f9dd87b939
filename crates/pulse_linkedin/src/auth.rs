use reqwest::{Client, Url};
use serde::Deserialize;
use std::env;
use thiserror::Error;

pub const AUTHORIZATION_URL: &str = "https://www.linkedin.com/oauth/v2/authorization";
pub const TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/accessToken";

const DEFAULT_SCOPES: &str = "r_organization_social rw_organization_admin";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable not found")]
    MissingVar(&'static str),
}

/// Client credentials for the authorization-code exchange, loaded from the
/// environment rather than baked into the binary.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scopes: String,
}

impl OAuthConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let client_id =
            env::var("LINKEDIN_CLIENT_ID").map_err(|_| ConfigError::MissingVar("LINKEDIN_CLIENT_ID"))?;
        let client_secret = env::var("LINKEDIN_CLIENT_SECRET")
            .map_err(|_| ConfigError::MissingVar("LINKEDIN_CLIENT_SECRET"))?;
        let redirect_uri = env::var("LINKEDIN_REDIRECT_URI")
            .map_err(|_| ConfigError::MissingVar("LINKEDIN_REDIRECT_URI"))?;
        let scopes = env::var("LINKEDIN_SCOPES").unwrap_or_else(|_| DEFAULT_SCOPES.to_string());

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
            scopes,
        })
    }

    /// URL the member opens in a browser to authorize the app.
    pub fn authorization_url(&self) -> String {
        Url::parse_with_params(
            AUTHORIZATION_URL,
            &[
                ("response_type", "code"),
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("scope", self.scopes.as_str()),
                ("state", "linkedin_pulse"),
            ],
        )
        .expect("Failed to build authorization URL")
        .into()
    }

    /// Exchange a pasted authorization code for a bearer token.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, reqwest::Error> {
        let form = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = Client::new().post(TOKEN_URL).form(&form).send().await?;
        let response = response.error_for_status()?;

        response.json().await
    }
}

#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}
