//! Generic list + form page shared by every record type.
//!
//! DESIGN
//! ======
//! A page is `resource_page::<F>()` for some [`ResourceForm`] `F`: a heading
//! with a "New" button, the inline create/edit form built from `F::FIELDS`,
//! the paginated table with View/Edit/Delete actions and a delete
//! confirmation. All transitions go through [`ResourceState`]; this module
//! only wires signals, events and the async flows together.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `RwSignal<NoticeState>` context for success and error toasts.
//! A parent that shows data derived from these records provides a
//! [`Revision`] context; it is bumped after every successful mutation.
//! Requests are only issued in the browser; during server rendering the
//! page renders its loading state.
//!
//! ERROR HANDLING
//! ==============
//! A failed load leaves the table empty and raises an error notice. A failed
//! save or delete keeps the form (or row) as it was so the user can retry.

use leptos::prelude::*;
use records::Resource;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::data_table::{DataTable, DetailFn, RowActions};
use crate::components::form_field::FormField;
use crate::net::api::Upload;
use crate::state::notice::NoticeState;
use crate::state::resource::{ResourceForm, ResourceState, ViewMode};
use crate::util::form::{FieldKind, FieldSpec};
use crate::util::format::today;

/// Counter of successful saves and deletes made by nested resource pages.
#[derive(Clone, Copy)]
pub struct Revision(RwSignal<u64>);

impl Revision {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    pub fn bump(self) {
        self.0.update(|n| *n += 1);
    }

    /// Subscribe the running effect to later bumps.
    pub fn track(self) {
        self.0.track();
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self::new()
    }
}

/// Full CRUD page for `F::Record`.
pub fn resource_page<F: ResourceForm>() -> impl IntoView {
    let state = RwSignal::new(ResourceState::<F::Record>::default());
    let revision = use_context::<Revision>();
    #[cfg(not(feature = "hydrate"))]
    let _ = revision;
    // `web_sys::File` is not `Send`, so the chosen file lives in local storage.
    let file = RwSignal::new_local(None::<Upload>);
    let notices = expect_context::<RwSignal<NoticeState>>();
    #[cfg(not(feature = "hydrate"))]
    let _ = notices;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::state::resource::fetch::<F::Record, _>(&crate::net::api::HttpApi, F::REFS).await {
            Ok((rows, refs)) => state.update(|s| s.loaded(rows, refs)),
            Err(e) => {
                leptos::logging::error!("loading {} failed: {e}", F::Record::PATH);
                state.update(ResourceState::load_failed);
                notices.update(|n| {
                    n.error(format!("Could not load {}: {e}", F::Record::PLURAL.to_lowercase()));
                });
            }
        }
    });

    let on_new = move |_| {
        file.set(None);
        state.update(|s| s.open_create::<F>(today()));
    };
    let on_cancel = Callback::new(move |()| {
        file.set(None);
        state.update(ResourceState::close);
    });
    let on_submit = Callback::new(move |()| {
        let Some(submission) = state.try_update(|s| s.submission::<F>()).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let upload = file.get_untracked();
            match crate::state::resource::save(&crate::net::api::HttpApi, &submission, upload.as_ref()).await {
                Ok(rows) => {
                    file.set(None);
                    state.update(|s| s.saved(rows));
                    if let Some(r) = revision {
                        r.bump();
                    }
                    notices.update(|n| {
                        n.success(submission.done_message());
                    });
                }
                Err(e) => {
                    leptos::logging::error!("saving {} failed: {e}", F::Record::PATH);
                    state.update(ResourceState::failed);
                    notices.update(|n| {
                        n.error(e.to_string());
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
            state.update(ResourceState::failed);
        }
    });

    let actions = RowActions {
        on_view: Some(Callback::new(move |id| state.update(|s| s.toggle_detail(id)))),
        on_edit: Some(Callback::new(move |id| {
            file.set(None);
            state.update(|s| {
                s.open_edit::<F>(id);
            });
        })),
        on_delete: Some(Callback::new(move |id| state.update(|s| s.request_delete(id)))),
    };

    let on_confirm_delete = Callback::new(move |()| {
        let Some(id) = state.try_update(ResourceState::confirm_delete).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::state::resource::remove::<F::Record, _>(&crate::net::api::HttpApi, id).await {
                Ok(rows) => {
                    state.update(|s| s.deleted(id, rows));
                    if let Some(r) = revision {
                        r.bump();
                    }
                    notices.update(|n| {
                        n.success(format!("{} deleted", F::Record::TITLE));
                    });
                }
                Err(e) => {
                    leptos::logging::error!("deleting {} {id} failed: {e}", F::Record::PATH);
                    state.update(ResourceState::failed);
                    notices.update(|n| {
                        n.error(e.to_string());
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            state.update(ResourceState::failed);
        }
    });
    let on_cancel_delete = Callback::new(move |()| state.update(ResourceState::cancel_delete));

    let busy = Signal::derive(move || state.with(|s| s.busy));
    let rows = Signal::derive(move || state.with(|s| s.rows.clone()));
    let refs = Signal::derive(move || state.with(|s| s.refs.clone()));
    let expanded = Signal::derive(move || state.with(|s| s.mode.expanded()));
    let row_id: fn(&F::Record) -> i64 = <F::Record as Resource>::id;
    let detail: DetailFn<F::Record> = F::detail;

    // Only a mode change rebuilds the form; keystrokes update fields in place.
    let mode = Memo::new(move |_| state.with(|s| s.mode));
    let form = move || {
        let heading = match mode.get() {
            ViewMode::Edit(_) => format!("Edit {}", F::Record::TITLE),
            _ => format!("New {}", F::Record::TITLE),
        };
        let fields = F::FIELDS
            .iter()
            .copied()
            .filter(|spec| spec.kind != FieldKind::File || F::Record::ATTACHMENT)
            .map(|spec| field_view(spec, state, file))
            .collect_view();
        view! {
            <form
                class="resource-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <h2 class="resource-form__title">{heading}</h2>
                <div class="resource-form__grid">{fields}</div>
                <div class="resource-form__actions">
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving…" } else { "Save" }}
                    </button>
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>
        }
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{F::Record::PLURAL}</h1>
                <button class="btn btn--primary" on:click=on_new disabled=move || busy.get()>
                    {format!("New {}", F::Record::TITLE)}
                </button>
            </header>

            <Show when=move || mode.get().form_open()>{form}</Show>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="page__loading">"Loading…"</p> }
            >
                <DataTable
                    rows=rows
                    columns=F::columns()
                    refs=refs
                    row_id=row_id
                    actions=actions
                    expanded=expanded
                    detail=detail
                />
            </Show>

            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog
                    title=format!("Delete {}", F::Record::TITLE)
                    message=format!("This {} will be permanently deleted.", F::Record::TITLE.to_lowercase())
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                    busy=busy
                />
            </Show>
        </section>
    }
}

fn field_view<R: Resource>(
    spec: FieldSpec,
    state: RwSignal<ResourceState<R>>,
    file: RwSignal<Option<Upload>, LocalStorage>,
) -> impl IntoView {
    let key = spec.key;
    let value = Signal::derive(move || state.with(|s| s.draft.get(key).to_owned()));
    let error = Signal::derive(move || state.with(|s| s.errors.get(key).cloned()));
    let options = Signal::derive(move || match spec.kind {
        FieldKind::Select(kind) => state.with(|s| s.refs.options(kind).to_vec()),
        _ => Vec::new(),
    });
    view! {
        <FormField
            spec=spec
            value=value
            error=error
            on_input=Callback::new(move |v: String| state.update(|s| s.edit(key, v)))
            options=options
            on_file=Callback::new(move |upload: Option<Upload>| file.set(upload))
        />
    }
}
