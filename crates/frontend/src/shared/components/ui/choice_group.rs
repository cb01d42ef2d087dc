use leptos::prelude::*;

/// Radio group over a list of options; the answer is the selected option
/// text itself.
#[component]
pub fn ChoiceGroup(
    /// Current selected option
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Options in display order
    #[prop(into)]
    options: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="form__radio-group" role="radiogroup">
            <For
                each=move || options.get()
                key=|option| option.clone()
                children=move |option| {
                    let option_for_check = option.clone();
                    let option_for_change = option.clone();
                    let option_id = format!("choice-{}-{}", name, option);
                    let is_checked = move || value.get() == option_for_check;
                    let name = name.clone();
                    view! {
                        <div class="form__radio-wrapper">
                            <input
                                id=option_id.clone()
                                type="radio"
                                class="form__radio"
                                name=name
                                value=option.clone()
                                checked=is_checked
                                on:change=move |_| {
                                    if let Some(handler) = on_change {
                                        handler.run(option_for_change.clone());
                                    }
                                }
                            />
                            <label class="form__radio-label" for=option_id>
                                {option}
                            </label>
                        </div>
                    }
                }
            />
        </div>
    }
}
