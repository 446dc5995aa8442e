use clap::Parser;
use scrape_client::ClientSettings;

use super::logging::{LogDestination, LogLevel};

pub const DEFAULT_SERVICE_BASE: &str = "http://localhost:5173";

#[derive(Parser, Debug)]
#[command(name = "scrape_app")]
#[command(about = "Interactive client for the page scraping service")]
#[command(version)]
pub struct Args {
    /// Base address of the scraping service
    #[arg(long, env = "SCRAPE_SERVICE_BASE", default_value = DEFAULT_SERVICE_BASE)]
    pub service_base: String,

    /// Where log output goes (terminal output interleaves with the display)
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log verbosity; transport failure causes are logged at warn
    #[arg(long, env = "SCRAPE_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    /// Service base without trailing slashes, resolved once per session.
    pub fn resolved_service_base(&self) -> String {
        self.service_base.trim().trim_end_matches('/').to_string()
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings::new(self.resolved_service_base())
    }
}
