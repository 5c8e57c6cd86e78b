use leptos::prelude::*;

/// Native select fed with `(value, label)` pairs.
///
/// While `value` is empty the disabled placeholder option is shown.
#[component]
pub fn Select(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of the placeholder option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let placeholder_text = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <select
                class="form__select"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {placeholder_text}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
