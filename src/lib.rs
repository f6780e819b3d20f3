//! Blocking client helpers for the Elasticsearch `_count` API.
//!
//! ```no_run
//! use escount::{connect, ClientConfig, CountService, MatchAllQuery};
//!
//! let transport = connect(&ClientConfig::default().with_env_overrides());
//! let count = CountService::new(transport)
//!     .index("tweets")
//!     .query(MatchAllQuery)
//!     .execute()?;
//! println!("{count}");
//! # Ok::<(), escount::ClientError>(())
//! ```

use std::sync::Arc;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod settings;

pub use application::{CountService, MatchAllQuery, Query, RawQuery, Transport};
pub use domain::{
    ClientError, CountResult, FetchSourceContext, HttpRequest, HttpResponse, ShardsInfo,
};
pub use infrastructure::{check_availability, UreqTransport};
pub use settings::ClientConfig;

/// Build the default transport for `config`.
pub fn connect(config: &ClientConfig) -> Arc<dyn Transport> {
    Arc::new(UreqTransport::from_config(config))
}

/// Install a compact stderr subscriber filtered by `ESCOUNT_LOG` (default `info`).
pub fn init_tracing() {
    init_tracing_with_writer(std::io::stderr);
}

fn init_tracing_with_writer<W>(make_writer: fn() -> W)
where
    W: std::io::Write + Send + Sync + 'static,
{
    static INIT: std::sync::OnceLock<()> = std::sync::OnceLock::new();

    let _ = INIT.get_or_init(|| {
        let filter = std::env::var("ESCOUNT_LOG").unwrap_or_else(|_| "info".into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(make_writer)
            .compact()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_targets_configured_url() {
        let config = ClientConfig {
            url: "http://127.0.0.1:1/".into(),
            timeout_secs: 1,
        };
        let request = CountService::new(connect(&config))
            .index("idx")
            .build_request()
            .unwrap();
        assert_eq!(request.path, "/idx/_count");
        assert_eq!(
            UreqTransport::from_config(&config).base_url(),
            "http://127.0.0.1:1"
        );
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::info!(target: "escount::dump", "still alive");
    }
}
