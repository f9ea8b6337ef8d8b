use leptos::prelude::*;

/// Labeled text input, or a textarea when `rows` is set
#[component]
pub fn FormField(
    #[prop(into)]
    label: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    /// Marks the label with `*`
    #[prop(optional)]
    required: bool,
    /// Render a textarea with this many rows
    #[prop(optional_no_strip)]
    rows: Option<u32>,
) -> impl IntoView {
    let label = if required { format!("{} *", label) } else { label };

    let control = match rows {
        Some(rows) => view! {
            <textarea
                class="form__textarea"
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any(),
        None => view! {
            <input
                type="text"
                class="form__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {control}
        </div>
    }
}
