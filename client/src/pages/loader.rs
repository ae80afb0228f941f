//! Loading for the read-only pages.
//!
//! ERROR HANDLING
//! ==============
//! A failed load is logged, raised as an error notice and leaves the page
//! in [`Load::Failed`]; there is no retry short of reloading the route.

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;

/// Lifecycle of data fetched once on mount.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum Load<T> {
    #[default]
    Pending,
    Ready(T),
    Failed,
}

/// Run `load` in the browser and store its outcome in `target`.
pub(crate) fn load_once<T, Fut>(target: RwSignal<Load<T>>, what: &'static str, load: impl FnOnce() -> Fut + 'static)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let notices = expect_context::<RwSignal<crate::state::notice::NoticeState>>();
        leptos::task::spawn_local(async move {
            match load().await {
                Ok(data) => target.set(Load::Ready(data)),
                Err(e) => {
                    leptos::logging::error!("loading {what} failed: {e}");
                    target.set(Load::Failed);
                    notices.update(|n| {
                        n.error(format!("Could not load {what}: {e}"));
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, what, load);
    }
}
