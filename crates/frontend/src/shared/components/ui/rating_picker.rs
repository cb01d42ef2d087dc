use leptos::prelude::*;

/// Rating control: one button per point on the scale, single selection.
#[component]
pub fn RatingPicker(
    /// Current selection, as the stringified rating value
    #[prop(into)]
    value: Signal<String>,
    /// Selection event handler
    #[prop(optional)]
    on_select: Option<Callback<String>>,
    /// Upper bound of the scale (inclusive, starting at 1)
    max: u32,
) -> impl IntoView {
    view! {
        <div class="form__rating" role="radiogroup">
            {(1..=max)
                .map(|point| {
                    let point_str = point.to_string();
                    let point_for_check = point_str.clone();
                    let is_selected = move || value.get() == point_for_check;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_selected() {
                                    "form__rating-btn form__rating-btn--selected"
                                } else {
                                    "form__rating-btn"
                                }
                            }
                            on:click=move |_| {
                                if let Some(handler) = on_select {
                                    handler.run(point.to_string());
                                }
                            }
                        >
                            {point_str.clone()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
