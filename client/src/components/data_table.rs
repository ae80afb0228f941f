//! Generic paginated table.
//!
//! DESIGN
//! ======
//! The table renders whatever list it is given; pagination is purely a
//! slice over that in-memory list (no sorting, filtering or server-side
//! paging). Cells are produced by plain `fn` pointers so column sets can be
//! declared once per record type and copied freely into reactive closures.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use leptos::prelude::*;

use crate::state::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZES, Pagination};
use crate::util::lookup::RefData;
use crate::util::prefs;

/// One table column: a header and a cell formatter.
pub struct Column<T> {
    pub header: &'static str,
    pub render: fn(&T, &RefData) -> String,
    /// Right-align the cells.
    pub numeric: bool,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, render: fn(&T, &RefData) -> String) -> Self {
        Self { header, render, numeric: false }
    }

    #[must_use]
    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

/// Per-row buttons; each callback receives the row id.
#[derive(Clone, Copy, Default)]
pub struct RowActions {
    pub on_view: Option<Callback<i64>>,
    pub on_edit: Option<Callback<i64>>,
    pub on_delete: Option<Callback<i64>>,
}

impl RowActions {
    fn any(&self) -> bool {
        self.on_view.is_some() || self.on_edit.is_some() || self.on_delete.is_some()
    }
}

/// Label/value pairs rendered in an expanded row.
pub type DetailFn<T> = fn(&T, &RefData) -> Vec<(&'static str, String)>;

/// Paginated table over `rows`.
///
/// Row actions and the expandable detail row need `row_id`; without it the
/// table is read-only.
#[component]
pub fn DataTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    #[prop(into)] refs: Signal<RefData>,
    #[prop(optional)] row_id: Option<fn(&T) -> i64>,
    #[prop(optional)] actions: RowActions,
    /// Id of the row whose detail is shown.
    #[prop(into, optional)]
    expanded: Option<Signal<Option<i64>>>,
    #[prop(optional)] detail: Option<DetailFn<T>>,
    #[prop(default = "No records found.")] empty_text: &'static str,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let initial_size = prefs::load::<usize>(prefs::PAGE_SIZE_KEY).unwrap_or(DEFAULT_PAGE_SIZE);
    let pagination = RwSignal::new(Pagination::with_page_size(initial_size));
    let total = Signal::derive(move || rows.with(Vec::len));

    // Keep the current page valid when rows are deleted or re-fetched.
    Effect::new(move || {
        let count = total.get();
        pagination.update(|p| p.clamp(count));
    });

    let has_actions = row_id.is_some() && actions.any();
    let span = (columns.len() + usize::from(has_actions)).to_string();
    let columns = StoredValue::new(columns);

    let header = columns.with_value(|cols| {
        cols.iter()
            .map(|c| view! { <th class:data-table__num=c.numeric>{c.header}</th> })
            .collect_view()
    });

    let body = move || {
        let page = pagination.get();
        let open = expanded.and_then(|e| e.get());
        let refs = refs.get();
        rows.with(|all| {
            if all.is_empty() {
                return view! {
                    <tr class="data-table__placeholder">
                        <td colspan=span.clone()>{empty_text}</td>
                    </tr>
                }
                .into_any();
            }
            all[page.range(all.len())]
                .iter()
                .map(|row| {
                    let id = row_id.map(|f| f(row));
                    let cells = columns.with_value(|cols| {
                        cols.iter()
                            .map(|c| view! { <td class:data-table__num=c.numeric>{(c.render)(row, &refs)}</td> })
                            .collect_view()
                    });
                    let buttons = id.filter(|_| has_actions).map(|id| action_cell(id, actions));
                    let detail_row = match (id, detail) {
                        (Some(id), Some(render)) if open == Some(id) => {
                            Some(detail_view(&render(row, &refs), span.clone()))
                        }
                        _ => None,
                    };
                    view! {
                        <tr class="data-table__row" class:data-table__row--open={id.is_some() && id == open}>
                            {cells}
                            {buttons}
                        </tr>
                        {detail_row}
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="data-table">
            <table class="data-table__table">
                <thead>
                    <tr>
                        {header}
                        {has_actions.then(|| view! { <th class="data-table__actions">"Actions"</th> })}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            <Pager pagination=pagination total=total/>
        </div>
    }
}

fn action_cell(id: i64, actions: RowActions) -> impl IntoView {
    view! {
        <td class="data-table__actions">
            {actions.on_view.map(|cb| view! {
                <button class="btn btn--small" on:click=move |_| cb.run(id)>"View"</button>
            })}
            {actions.on_edit.map(|cb| view! {
                <button class="btn btn--small" on:click=move |_| cb.run(id)>"Edit"</button>
            })}
            {actions.on_delete.map(|cb| view! {
                <button class="btn btn--small btn--danger" on:click=move |_| cb.run(id)>"Delete"</button>
            })}
        </td>
    }
}

fn detail_view(pairs: &[(&'static str, String)], span: String) -> impl IntoView + use<> {
    let items = pairs
        .iter()
        .map(|(label, value)| {
            view! {
                <dt>{*label}</dt>
                <dd>{value.clone()}</dd>
            }
        })
        .collect_view();
    view! {
        <tr class="data-table__detail">
            <td colspan=span>
                <dl class="detail-list">{items}</dl>
            </td>
        </tr>
    }
}

/// Page-size selector plus previous/next and numbered page buttons.
#[component]
fn Pager(pagination: RwSignal<Pagination>, total: Signal<usize>) -> impl IntoView {
    let on_size = move |ev: leptos::ev::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
            pagination.update(|p| p.set_page_size(size));
            prefs::store(prefs::PAGE_SIZE_KEY, &size);
        }
    };
    let go = move |page: usize| pagination.update(|p| p.go_to(page, total.get_untracked()));

    let pages = move || {
        let current = pagination.get();
        current
            .window(total.get())
            .into_iter()
            .map(|n| {
                view! {
                    <button
                        class="btn btn--small pager__page"
                        class:pager__page--current={n == current.page}
                        on:click=move |_| go(n)
                    >
                        {n.to_string()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="pager">
            <span class="pager__summary">{move || pagination.get().summary(total.get())}</span>
            <label class="pager__size">
                "Rows per page "
                <select
                    prop:value=move || pagination.get().page_size.to_string()
                    on:change=on_size
                >
                    {PAGE_SIZES
                        .iter()
                        .map(|s| view! { <option value=s.to_string()>{s.to_string()}</option> })
                        .collect_view()}
                </select>
            </label>
            <button
                class="btn btn--small pager__prev"
                disabled=move || !pagination.get().has_prev()
                on:click=move |_| go(pagination.get_untracked().page.saturating_sub(1))
            >
                "Prev"
            </button>
            {pages}
            <button
                class="btn btn--small pager__next"
                disabled=move || !pagination.get().has_next(total.get())
                on:click=move |_| go(pagination.get_untracked().page + 1)
            >
                "Next"
            </button>
        </div>
    }
}
