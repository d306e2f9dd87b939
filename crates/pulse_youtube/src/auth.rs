use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Write, stdin, stdout};
use std::path::Path;
use thiserror::Error;

pub const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

pub const SCOPES: &str = "https://www.googleapis.com/auth/yt-analytics.readonly \
                          https://www.googleapis.com/auth/youtube.readonly";

// Treat a token as expired this long before its actual expiry.
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Error reading credential file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error decoding credential file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Token request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Google installed-app client secrets file, as downloaded from the cloud
/// console. Only the fields this flow touches are decoded.
#[derive(Deserialize, Debug, Clone)]
pub struct ClientSecrets {
    pub installed: InstalledSecrets,
}

#[derive(Deserialize, Debug, Clone)]
pub struct InstalledSecrets {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_auth_uri")]
    pub auth_uri: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

fn default_auth_uri() -> String {
    String::from("https://accounts.google.com/o/oauth2/auth")
}

fn default_token_uri() -> String {
    String::from("https://oauth2.googleapis.com/token")
}

impl ClientSecrets {
    pub fn load(path: &Path) -> Result<Self, AuthError> {
        let file = File::open(path)?;
        let secrets = serde_json::from_reader(BufReader::new(file))?;

        Ok(secrets)
    }

    fn redirect_uri(&self) -> &str {
        self.installed
            .redirect_uris
            .first()
            .map(String::as_str)
            .unwrap_or(OOB_REDIRECT_URI)
    }

    /// Consent URL the channel owner opens in a browser. Requests offline
    /// access so a refresh token comes back with the first grant.
    pub fn authorization_url(&self) -> String {
        Url::parse_with_params(
            &self.installed.auth_uri,
            &[
                ("response_type", "code"),
                ("client_id", self.installed.client_id.as_str()),
                ("redirect_uri", self.redirect_uri()),
                ("scope", SCOPES),
                ("access_type", "offline"),
                ("prompt", "consent"),
            ],
        )
        .expect("Failed to build authorization URL")
        .into()
    }
}

/// Credential persisted to the token cache file between runs.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StoredToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
}

impl StoredToken {
    pub fn load(path: &Path) -> Option<Self> {
        let file = File::open(path).ok()?;

        serde_json::from_reader(BufReader::new(file)).ok()
    }

    pub fn save(&self, path: &Path) -> Result<(), AuthError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;

        Ok(())
    }

    /// Usable as-is when it expires comfortably after now. A token without a
    /// recorded expiry is never trusted.
    pub fn is_valid(&self) -> bool {
        match self.expiry {
            Some(expiry) => expiry - Utc::now() > Duration::seconds(EXPIRY_MARGIN_SECS),
            None => false,
        }
    }
}

#[derive(Deserialize, Debug)]
struct TokenGrant {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    expires_in: i64,
}

impl TokenGrant {
    // Refresh grants omit the refresh token, so carry the previous one over.
    fn into_stored(self, previous_refresh: Option<String>) -> StoredToken {
        StoredToken {
            access_token: self.access_token,
            refresh_token: self.refresh_token.or(previous_refresh),
            expiry: Some(Utc::now() + Duration::seconds(self.expires_in)),
        }
    }
}

/// Produce a usable credential: the cached token if still valid, else a
/// refresh grant, else the interactive consent flow. Whatever was obtained is
/// persisted back to `token_path` for the next run.
pub async fn obtain_token(
    secrets: &ClientSecrets,
    token_path: &Path,
) -> Result<StoredToken, AuthError> {
    if let Some(cached) = StoredToken::load(token_path) {
        if cached.is_valid() {
            return Ok(cached);
        }

        if let Some(refresh_token) = cached.refresh_token.clone() {
            let grant = refresh(secrets, &refresh_token).await?;
            let token = grant.into_stored(Some(refresh_token));
            token.save(token_path)?;

            return Ok(token);
        }
    }

    let token = run_consent_flow(secrets).await?;
    token.save(token_path)?;

    Ok(token)
}

async fn refresh(
    secrets: &ClientSecrets,
    refresh_token: &str,
) -> Result<TokenGrant, reqwest::Error> {
    let form = [
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
        ("client_id", secrets.installed.client_id.as_str()),
        ("client_secret", secrets.installed.client_secret.as_str()),
    ];

    let response = Client::new()
        .post(&secrets.installed.token_uri)
        .form(&form)
        .send()
        .await?;
    let response = response.error_for_status()?;

    response.json().await
}

async fn exchange_code(secrets: &ClientSecrets, code: &str) -> Result<TokenGrant, reqwest::Error> {
    let form = [
        ("grant_type", "authorization_code"),
        ("code", code),
        ("redirect_uri", secrets.redirect_uri()),
        ("client_id", secrets.installed.client_id.as_str()),
        ("client_secret", secrets.installed.client_secret.as_str()),
    ];

    let response = Client::new()
        .post(&secrets.installed.token_uri)
        .form(&form)
        .send()
        .await?;
    let response = response.error_for_status()?;

    response.json().await
}

// Prints the consent URL and blocks on a pasted authorization code. Killing
// the process before the code is entered is the only cancellation path.
async fn run_consent_flow(secrets: &ClientSecrets) -> Result<StoredToken, AuthError> {
    println!("Authorize here: {}", secrets.authorization_url());
    print!("Enter authorization code: ");
    stdout().flush()?;

    let mut code = String::new();
    stdin().read_line(&mut code)?;

    let grant = exchange_code(secrets, code.trim()).await?;

    Ok(grant.into_stored(None))
}
