use reqwest::Client;
use std::time::Duration;

use crate::config::QuobyteSettings;
use crate::error::QuobyteError;

/// Builds the shared transport for API calls from the configured timeouts.
///
/// Timeouts left unset in the settings are not applied, so a call waits as
/// long as the service takes to answer.
pub fn new_api_client(settings: &QuobyteSettings) -> Result<Client, QuobyteError> {
    let mut builder = Client::builder()
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_keepalive(Duration::from_secs(60));

    if let Some(secs) = settings.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = settings.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }

    builder
        .build()
        .map_err(|e| QuobyteError::Configuration(format!("Failed to build HTTP client: {}", e)))
}
