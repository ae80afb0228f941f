//! Generic labelled form input.
//!
//! Renders one [`FieldSpec`] as the matching input widget with a required
//! marker and an inline error slot. It performs no validation itself; the
//! page validates the whole draft on submit and feeds messages back in.

use leptos::prelude::*;

use crate::net::api::Upload;
use crate::util::form::{FieldKind, FieldSpec};
use crate::util::format::{attachment_href, attachment_name};
use crate::util::lookup::RefOption;

#[component]
pub fn FormField(
    spec: FieldSpec,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<String>,
    /// Choices for select fields.
    #[prop(into, optional)]
    options: Option<Signal<Vec<RefOption>>>,
    /// Receives the chosen file for file fields.
    #[prop(optional)]
    on_file: Option<Callback<Option<Upload>>>,
) -> impl IntoView {
    let id = format!("field-{}", spec.key);
    let on_text = move |ev: leptos::ev::Event| on_input.run(event_target_value(&ev));

    let input = match spec.kind {
        FieldKind::Text => view! {
            <input id=id.clone() class="form-field__input" type="text" prop:value=move || value.get() on:input=on_text/>
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea id=id.clone() class="form-field__input" rows="3" prop:value=move || value.get() on:input=on_text></textarea>
        }
        .into_any(),
        FieldKind::Number => view! {
            <input id=id.clone() class="form-field__input" type="number" step="any" prop:value=move || value.get() on:input=on_text/>
        }
        .into_any(),
        FieldKind::Date => view! {
            <input id=id.clone() class="form-field__input" type="date" prop:value=move || value.get() on:input=on_text/>
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <input
                id=id.clone()
                class="form-field__check"
                type="checkbox"
                prop:checked=move || value.get() == "true"
                on:change=move |ev| on_input.run(event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        FieldKind::Select(_) => {
            let choices = move || {
                options
                    .map(|o| o.get())
                    .unwrap_or_default()
                    .into_iter()
                    .map(|o| {
                        let selected_id = o.id.to_string();
                        view! {
                            <option value=o.id.to_string() selected=move || value.get() == selected_id>
                                {o.label}
                            </option>
                        }
                    })
                    .collect_view()
            };
            view! {
                <select id=id.clone() class="form-field__input" prop:value=move || value.get() on:change=on_text>
                    <option value="">{format!("Select {}", spec.label.to_lowercase())}</option>
                    {choices}
                </select>
            }
            .into_any()
        }
        FieldKind::File => {
            let current = move || {
                let path = value.get();
                (!path.is_empty()).then(|| {
                    view! {
                        <a class="form-field__current" href=attachment_href(&path) target="_blank" rel="noopener">
                            {attachment_name(&path)}
                        </a>
                    }
                })
            };
            view! {
                <input
                    id=id.clone()
                    class="form-field__input"
                    type="file"
                    on:change=move |ev| {
                        if let Some(cb) = on_file {
                            cb.run(chosen_file(&ev));
                        }
                    }
                />
                {current}
            }
            .into_any()
        }
    };

    view! {
        <div class="form-field" class:form-field--invalid=move || error.with(Option::is_some)>
            <label class="form-field__label" for=id>
                {spec.label}
                {spec.required.then(|| view! { <span class="form-field__required">" *"</span> })}
            </label>
            {input}
            <Show when=move || error.with(Option::is_some)>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

fn chosen_file(ev: &leptos::ev::Event) -> Option<Upload> {
    #[cfg(feature = "hydrate")]
    {
        let input = event_target::<web_sys::HtmlInputElement>(ev);
        input.files().and_then(|list| list.get(0)).map(Upload::from)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}
