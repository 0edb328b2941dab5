//! # Observability
//!
//! [`setup_tracing`] installs the process-wide subscriber. Actors log their
//! lifecycle and every request with a `state_type` field, so module targets
//! are hidden to keep lines short.
//!
//! ```bash
//! RUST_LOG=info cargo run      # start/shutdown and outcomes
//! RUST_LOG=debug cargo run     # full action payloads
//! ```

/// Initializes `tracing-subscriber` with a `RUST_LOG` driven filter.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
