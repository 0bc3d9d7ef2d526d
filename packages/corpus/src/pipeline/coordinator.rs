//! Stage coordination: wait for an upstream marker to appear.
//!
//! Stages never signal each other directly. A downstream stage polls the
//! store at a fixed interval until the upstream marker exists. There is no
//! timeout; a missing producer stalls the waiting stage until it is killed.

use std::time::Duration;
use tracing::{info, warn};

use crate::traits::store::MarkerStore;
use crate::types::marker::MarkerKind;

/// Block until the `kind` marker exists, checking every `poll_interval`.
///
/// Existence is checked once before the first sleep, so an already-present
/// marker returns immediately. A store error during a check counts as
/// "not present yet".
pub async fn await_marker<S>(store: &S, kind: MarkerKind, poll_interval: Duration)
where
    S: MarkerStore + ?Sized,
{
    info!(marker = %kind, "Waiting for marker");

    let mut checks: u64 = 0;
    loop {
        checks += 1;
        match store.marker_exists(kind).await {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => warn!(marker = %kind, error = %e, "Marker check failed"),
        }
        tokio::time::sleep(poll_interval).await;
    }

    info!(marker = %kind, checks, "Detected marker");
}
