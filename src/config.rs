use crate::error::AppError;
use clap::Parser;
use reqwest::Url;
use std::path::PathBuf;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "phish-lens",
    version,
    about = "Check suspicious emails against a phishing analysis service"
)]
pub struct Config {
    /// Base URL of the analysis service (serves /analyze and /report)
    #[arg(long, default_value = DEFAULT_SERVER_URL, value_parser = parse_server_url)]
    pub server_url: Url,

    /// Where downloaded reports are written [default: your Downloads folder]
    #[arg(long)]
    pub download_dir: Option<PathBuf>,
}

impl Config {
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn parse_server_url(raw: &str) -> Result<Url, AppError> {
    let url =
        Url::parse(raw).map_err(|e| AppError::Config(format!("invalid server URL {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::Config(format!(
            "server URL must use http or https, not {other}"
        ))),
    }
}
