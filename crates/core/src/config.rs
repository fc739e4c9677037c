use serde::Deserialize;

pub const SHARE_ID_PLACEHOLDER: &str = "{share_id}";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// TMDB credential; catalog calls fail with a configuration error without it
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    #[serde(default = "default_tmdb_base_url")]
    pub tmdb_base_url: String,

    /// Template for shareable links, `{share_id}` is replaced by the list's share id
    #[serde(default = "default_share_url_template")]
    pub share_url_template: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_database_url() -> String {
    "sqlite:./data/movie-favorites.db?mode=rwc".to_string()
}

fn default_tmdb_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_share_url_template() -> String {
    format!("http://localhost:3000/favorites/{}", SHARE_ID_PLACEHOLDER)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            tmdb_api_key: None,
            tmdb_base_url: default_tmdb_base_url(),
            share_url_template: default_share_url_template(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The configured key, treating an empty value as unset
    pub fn tmdb_api_key(&self) -> Option<String> {
        self.tmdb_api_key
            .as_ref()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }
}
