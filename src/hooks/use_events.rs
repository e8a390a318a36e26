use yew::prelude::*;

use crate::models::Event;
use crate::services::list_events;

/// Events list with its loading flag. The list is loaded once on mount and
/// replaced wholesale on every reload; there is no merging or caching.
pub struct UseEventsHandle {
    pub events: UseStateHandle<Vec<Event>>,
    pub loading: UseStateHandle<bool>,
    pub reload: Callback<()>,
}

#[hook]
pub fn use_events() -> UseEventsHandle {
    let events = use_state(Vec::<Event>::new);
    let loading = use_state(|| false);

    let reload = {
        let events = events.clone();
        let loading = loading.clone();
        Callback::from(move |_| {
            let events = events.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                match list_events().await {
                    Ok(list) => {
                        log::info!("📋 Loaded {} events", list.len());
                        events.set(list);
                    }
                    Err(e) => {
                        // not surfaced to the user, only logged
                        log::error!("❌ Error loading events: {}", e);
                        events.set(Vec::new());
                    }
                }
                loading.set(false);
            });
        })
    };

    // Initial load on mount
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    UseEventsHandle {
        events,
        loading,
        reload,
    }
}
