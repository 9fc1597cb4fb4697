mod settings;

pub use settings::{ApiConfig, BrandingConfig, ServerConfig, Settings, SmtpConfig};
