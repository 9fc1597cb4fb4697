use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub branding: BrandingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Static API key required on the email endpoints. When unset, the
    /// endpoints are open (development mode).
    pub key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    /// When disabled, the service renders but drops outbound mail
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

/// Branding applied to every rendered document unless the caller overrides
/// it per request.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandingConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_website_url")]
    pub website_url: String,
    #[serde(default = "default_logo_url")]
    pub logo_url: String,
    #[serde(default = "default_unsubscribe_link")]
    pub unsubscribe_link: String,
    #[serde(default = "default_preferences_link")]
    pub preferences_link: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@caraudioevents.com".to_string()
}

fn default_from_name() -> String {
    "Car Audio Events".to_string()
}

fn default_title() -> String {
    crate::template::DEFAULT_TITLE.to_string()
}

fn default_website_url() -> String {
    crate::template::DEFAULT_WEBSITE_URL.to_string()
}

fn default_logo_url() -> String {
    crate::template::DEFAULT_LOGO_URL.to_string()
}

fn default_unsubscribe_link() -> String {
    crate::template::DEFAULT_UNSUBSCRIBE_LINK.to_string()
}

fn default_preferences_link() -> String {
    crate::template::DEFAULT_PREFERENCES_LINK.to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8082)?
            .set_default("smtp.enabled", false)?
            .set_default("smtp.host", "localhost")?
            .set_default("smtp.port", 587)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // SERVER_HOST, SERVER_PORT, API_KEY, SMTP_HOST, BRANDING_LOGO_URL, etc.
            .add_source(
                Environment::default()
                    .separator("_")
                    .try_parsing(true)
                    .list_separator(","),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from_address: default_from_address(),
            from_name: default_from_name(),
        }
    }
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            website_url: default_website_url(),
            logo_url: default_logo_url(),
            unsubscribe_link: default_unsubscribe_link(),
            preferences_link: default_preferences_link(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8082);

        let smtp = SmtpConfig::default();
        assert!(!smtp.enabled);
        assert_eq!(smtp.port, 587);
        assert_eq!(smtp.from_address, "noreply@caraudioevents.com");
    }

    #[test]
    fn test_branding_defaults_match_template_constants() {
        let branding = BrandingConfig::default();
        assert_eq!(branding.title, crate::template::DEFAULT_TITLE);
        assert_eq!(branding.logo_url, crate::template::DEFAULT_LOGO_URL);
    }
}
