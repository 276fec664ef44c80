use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use common::DashboardPayload;
use tracing::{debug, error, info, instrument};

use crate::error::{DashboardError, Result};
use crate::state::{DashboardState, Slice};

/// Something that can produce the dashboard payload in a single request.
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait DashboardSource {
    async fn fetch_dashboard(&self) -> Result<DashboardPayload>;
}

#[async_trait(?Send)]
impl<'a, S: DashboardSource + ?Sized> DashboardSource for &'a S {
    async fn fetch_dashboard(&self) -> Result<DashboardPayload> {
        (**self).fetch_dashboard().await
    }
}

/// Liveness flag shared by a mounted view and the work it started.
///
/// The view calls [`ViewLifetime::teardown`] when it is unmounted; any load
/// that resolves afterwards is discarded.
#[derive(Debug, Clone)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn teardown(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of the startup load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The source answered while the view was still mounted
    Loaded(DashboardPayload),
    /// The source failed; nothing may be applied
    Failed(DashboardError),
    /// The view was torn down before the load resolved
    Discarded,
}

impl LoadOutcome {
    /// Applies a loaded payload to `state` in one step. Failed and discarded
    /// loads leave `state` untouched.
    pub fn apply_to(self, state: &mut DashboardState) -> Vec<Slice> {
        match self {
            LoadOutcome::Loaded(payload) => state.apply_payload(payload),
            LoadOutcome::Failed(_) | LoadOutcome::Discarded => Vec::new(),
        }
    }
}

/// The one-shot data load a dashboard view performs when it is mounted.
///
/// `run` consumes the load, so it cannot be fired twice. There is no retry.
pub struct StartupLoad<S> {
    source: S,
    lifetime: ViewLifetime,
}

impl<S: DashboardSource> StartupLoad<S> {
    pub fn new(source: S, lifetime: ViewLifetime) -> Self {
        Self { source, lifetime }
    }

    #[instrument(skip_all)]
    pub async fn run(self) -> LoadOutcome {
        if !self.lifetime.is_alive() {
            debug!("View already torn down, skipping dashboard load");
            return LoadOutcome::Discarded;
        }

        let result = self.source.fetch_dashboard().await;

        if !self.lifetime.is_alive() {
            debug!(success = result.is_ok(), "View torn down while loading, discarding result");
            return LoadOutcome::Discarded;
        }

        match result {
            Ok(payload) => {
                info!("Dashboard data loaded");
                LoadOutcome::Loaded(payload)
            }
            Err(err) => {
                error!(error = %err, "Failed to load dashboard data, keeping current values");
                LoadOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DashboardDefaults;
    use common::SalesPoint;
    use std::cell::{Cell, RefCell};
    use tokio::sync::oneshot;

    struct StaticSource {
        response: Result<DashboardPayload>,
        calls: Cell<usize>,
    }

    impl StaticSource {
        fn new(response: Result<DashboardPayload>) -> Self {
            Self {
                response,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl DashboardSource for StaticSource {
        async fn fetch_dashboard(&self) -> Result<DashboardPayload> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    /// Resolves only when the test sends the response.
    struct PendingSource {
        rx: RefCell<Option<oneshot::Receiver<Result<DashboardPayload>>>>,
    }

    #[async_trait(?Send)]
    impl DashboardSource for PendingSource {
        async fn fetch_dashboard(&self) -> Result<DashboardPayload> {
            let rx = self
                .rx
                .borrow_mut()
                .take()
                .ok_or_else(|| DashboardError::Source("already fetched".to_string()))?;
            rx.await
                .unwrap_or_else(|_| Err(DashboardError::Source("sender dropped".to_string())))
        }
    }

    fn sales_payload() -> DashboardPayload {
        DashboardPayload {
            sales: Some(vec![SalesPoint::new("06:00 AM", 12.0)]),
            total_orders: Some(5),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_successful_load_is_applied() {
        let source = StaticSource::new(Ok(sales_payload()));
        let mut state = DashboardState::new(DashboardDefaults::sample());

        let outcome = StartupLoad::new(&source, ViewLifetime::new()).run().await;
        let replaced = outcome.apply_to(&mut state);

        assert_eq!(source.calls.get(), 1);
        assert_eq!(replaced, vec![Slice::Sales, Slice::TotalOrders]);
        assert_eq!(state.chart().labels, vec!["06:00 AM"]);
        assert_eq!(state.total_orders(), 5);
        assert_eq!(state.orders().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_defaults() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let source = StaticSource::new(Err(DashboardError::Http { status: 503 }));
        let mut state = DashboardState::new(DashboardDefaults::sample());
        let before = state.clone();

        let outcome = StartupLoad::new(source, ViewLifetime::new()).run().await;
        assert_eq!(outcome, LoadOutcome::Failed(DashboardError::Http { status: 503 }));

        let replaced = outcome.apply_to(&mut state);
        assert!(replaced.is_empty());
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_last_good_values() {
        let mut state = DashboardState::new(DashboardDefaults::sample());
        state.apply_payload(sales_payload());
        let last_good = state.clone();

        let source = StaticSource::new(Err(DashboardError::Decode("bad json".to_string())));
        StartupLoad::new(source, ViewLifetime::new())
            .run()
            .await
            .apply_to(&mut state);

        assert_eq!(state, last_good);
    }

    #[tokio::test]
    async fn test_teardown_before_start_skips_fetch() {
        let source = StaticSource::new(Ok(sales_payload()));
        let lifetime = ViewLifetime::new();
        lifetime.teardown();

        let outcome = StartupLoad::new(&source, lifetime).run().await;

        assert_eq!(outcome, LoadOutcome::Discarded);
        assert_eq!(source.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_result_after_teardown_is_discarded() {
        let (tx, rx) = oneshot::channel();
        let source = PendingSource {
            rx: RefCell::new(Some(rx)),
        };
        let lifetime = ViewLifetime::new();
        let view_handle = lifetime.clone();
        let mut state = DashboardState::default();
        let before = state.clone();

        let load = StartupLoad::new(source, lifetime).run();
        let resolve = async move {
            tokio::task::yield_now().await;
            view_handle.teardown();
            tx.send(Ok(sales_payload())).expect("load should still be waiting");
        };
        let (outcome, ()) = tokio::join!(load, resolve);

        assert_eq!(outcome, LoadOutcome::Discarded);
        outcome.apply_to(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_lifetime_clones_share_flag() {
        let lifetime = ViewLifetime::default();
        let other = lifetime.clone();
        assert!(other.is_alive());

        lifetime.teardown();

        assert!(!other.is_alive());
    }
}
