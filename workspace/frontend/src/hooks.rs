use std::ops::Deref;
use std::rc::Rc;

use nogops::{
    DashboardAction, DashboardDefaults, DashboardState, LoadOutcome, StartupLoad, ViewLifetime,
};
use yew::prelude::*;

use crate::api_client::dashboard::HttpDashboardSource;
use crate::settings;

/// Reducer wrapper so Yew can drive [`DashboardState`] with actions.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStore {
    state: DashboardState,
}

impl DashboardStore {
    pub fn new(defaults: DashboardDefaults) -> Self {
        Self {
            state: DashboardState::new(defaults),
        }
    }
}

impl Deref for DashboardStore {
    type Target = DashboardState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        state.apply(action);
        Rc::new(Self { state })
    }
}

/// Dashboard state seeded from `defaults`, plus the one-shot startup load.
///
/// The load runs once on mount when enabled in settings. Unmounting tears the
/// view lifetime down so a late response is dropped instead of applied.
#[hook]
pub fn use_dashboard<F>(defaults: F) -> UseReducerHandle<DashboardStore>
where
    F: FnOnce() -> DashboardDefaults,
{
    let store = use_reducer(move || DashboardStore::new(defaults()));

    {
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            let lifetime = ViewLifetime::new();

            if settings::get_settings().load_on_startup {
                let load = StartupLoad::new(HttpDashboardSource::from_settings(), lifetime.clone());
                wasm_bindgen_futures::spawn_local(async move {
                    match load.run().await {
                        LoadOutcome::Loaded(payload) => {
                            dispatcher.dispatch(DashboardAction::ApplyPayload(payload));
                        }
                        LoadOutcome::Failed(err) => {
                            log::warn!("Keeping sample dashboard data: {}", err);
                        }
                        LoadOutcome::Discarded => {
                            log::debug!("Dashboard unmounted before data arrived");
                        }
                    }
                });
            } else {
                log::debug!("Startup load disabled, showing sample data");
            }

            move || lifetime.teardown()
        });
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::SalesPoint;

    #[test]
    fn test_reduce_replaces_sales_and_chart() {
        let store = Rc::new(DashboardStore::new(DashboardDefaults::sample()));

        let next = store.reduce(DashboardAction::ReplaceSales(vec![SalesPoint::new("Now", 9.0)]));

        assert_eq!(next.chart().labels, vec!["Now"]);
        assert_eq!(next.orders().len(), 3);
    }

    #[test]
    fn test_reduce_keeps_previous_store_untouched() {
        let store = Rc::new(DashboardStore::new(DashboardDefaults::sample()));
        let previous = Rc::clone(&store);

        let next = store.reduce(DashboardAction::SetTotalOrders(1));

        assert_eq!(next.total_orders(), 1);
        assert_eq!(previous.total_orders(), 21375);
    }
}
