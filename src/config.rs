use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub fetch_limit: u32,
    pub cache_ttl: Duration,
    pub data_dir: PathBuf,
    pub strava_client_id: Option<String>,
    pub strava_client_secret: Option<String>,
    pub strava_refresh_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let fetch_limit = std::env::var("FETCH_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(200);

        let cache_ttl_seconds = std::env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(900);

        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        Self {
            port,
            fetch_limit,
            cache_ttl: Duration::from_secs(cache_ttl_seconds),
            data_dir,
            strava_client_id: non_empty_env("STRAVA_CLIENT_ID"),
            strava_client_secret: non_empty_env("STRAVA_CLIENT_SECRET"),
            strava_refresh_token: non_empty_env("STRAVA_REFRESH_TOKEN"),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
