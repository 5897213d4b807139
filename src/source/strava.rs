use serde_json::Value;

use crate::config::Config;
use crate::error::SourceError;
use crate::types::activity::RawActivity;

const STRAVA_BASE_URL: &str = "https://www.strava.com";

/// Strava API client holding the long-lived refresh credentials. The base
/// URL is a field so tests can point the client at a local server.
#[derive(Debug, Clone)]
pub struct StravaSource {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    refresh_token: String,
}

impl StravaSource {
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        let client_id = config
            .strava_client_id
            .clone()
            .ok_or(SourceError::MissingConfig("STRAVA_CLIENT_ID"))?;
        let client_secret = config
            .strava_client_secret
            .clone()
            .ok_or(SourceError::MissingConfig("STRAVA_CLIENT_SECRET"))?;
        let refresh_token = config
            .strava_refresh_token
            .clone()
            .ok_or(SourceError::MissingConfig("STRAVA_REFRESH_TOKEN"))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: STRAVA_BASE_URL.to_string(),
            client_id,
            client_secret,
            refresh_token,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Refresh-token grant. Terminal on failure; the caller never retries.
    pub async fn refresh_access_token(&self) -> Result<String, SourceError> {
        let response = self
            .http
            .post(format!("{}/api/v3/oauth/token", self.base_url))
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "refresh_token"),
                ("refresh_token", self.refresh_token.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::TokenRefresh(format!(
                "{}: {}",
                status,
                snippet(&body)
            )));
        }

        let payload: Value = response.json().await?;
        payload
            .get("access_token")
            .and_then(Value::as_str)
            .map(|token| token.to_string())
            .ok_or_else(|| {
                SourceError::TokenRefresh(format!(
                    "response missing access_token: {}",
                    snippet(&payload.to_string())
                ))
            })
    }

    /// Most recent activities, newest first as the API returns them. Any
    /// non-array payload is a hard failure: the API reports errors as JSON
    /// objects, and treating one as an empty list would masquerade as a
    /// zero-activity dataset.
    pub async fn fetch_recent(&self, limit: u32) -> Result<Vec<RawActivity>, SourceError> {
        let access_token = self.refresh_access_token().await?;
        let url = format!(
            "{}/api/v3/athlete/activities?per_page={}",
            self.base_url, limit
        );
        let response = self.http.get(&url).bearer_auth(&access_token).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Fetch(format!("{}: {}", status, snippet(&body))));
        }

        let payload: Value = response.json().await?;
        if !payload.is_array() {
            return Err(SourceError::UnexpectedPayload(snippet(&payload.to_string())));
        }
        serde_json::from_value(payload).map_err(|err| SourceError::UnexpectedPayload(err.to_string()))
    }
}

fn snippet(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    if body.chars().count() <= MAX_CHARS {
        body.to_string()
    } else {
        let head: String = body.chars().take(MAX_CHARS).collect();
        format!("{}…", head)
    }
}
