use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::mailer::{create_mailer, Mailer, MailerResult};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub mailer: Arc<dyn Mailer>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(settings: Settings) -> MailerResult<Self> {
        let mailer = create_mailer(&settings.smtp)?;

        Ok(Self {
            settings: Arc::new(settings),
            mailer,
            start_time: Instant::now(),
        })
    }

    /// Build state around an explicit mailer backend; used by tests to
    /// inject a recording mock.
    pub fn with_mailer(settings: Settings, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            settings: Arc::new(settings),
            mailer,
            start_time: Instant::now(),
        }
    }
}
