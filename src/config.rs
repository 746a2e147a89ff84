use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::services::word_source::DEFAULT_TIMEOUT_MS;
use crate::session::state_machine::DEFAULT_REPEAT_RETRIES;

pub const DEFAULT_TITLE: &str = "Language App";
pub const DEFAULT_WORD_SOURCE_URL: &str = "http://localhost:3000/api/get-word";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub app_title: String,
    pub words_file: Option<PathBuf>,
    pub word_source_url: String,
    pub word_source_timeout: Duration,
    pub repeat_retries: u32,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env_parse::<u16>("PORT").unwrap_or(3000);

        let host = env_parse::<IpAddr>("HOST").unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            host,
            port,
            log_level,
            app_title: env_string("APP_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            words_file: env_string("WORDS_FILE").map(PathBuf::from),
            word_source_url: env_string("WORD_SOURCE_URL")
                .unwrap_or_else(|| DEFAULT_WORD_SOURCE_URL.to_string()),
            word_source_timeout: Duration::from_millis(
                env_parse("WORD_SOURCE_TIMEOUT_MS").unwrap_or(DEFAULT_TIMEOUT_MS),
            ),
            repeat_retries: env_parse("WORD_REPEAT_RETRIES").unwrap_or(DEFAULT_REPEAT_RETRIES),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 3000,
            log_level: "info".to_string(),
            app_title: DEFAULT_TITLE.to_string(),
            words_file: None,
            word_source_url: DEFAULT_WORD_SOURCE_URL.to_string(),
            word_source_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            repeat_retries: DEFAULT_REPEAT_RETRIES,
        }
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env_string(key)?.trim().parse().ok()
}
