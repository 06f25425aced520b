use std::sync::Arc;

use crate::config::Config;
use crate::corpus::Corpus;

/// Shared application state.
///
/// Constructed once at startup and cloned into every handler; the reqwest
/// client and corpus handle are reused for the process lifetime rather than
/// reached through any global.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub corpus: Arc<Corpus>,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let corpus = Corpus::open_or_create(&config.data_dir)?;

        Ok(Self {
            config,
            corpus: Arc::new(corpus),
            http_client: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
        })
    }
}
