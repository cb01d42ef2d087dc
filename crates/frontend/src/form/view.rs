//! The live form: question rendering, inline validation and the submit
//! lifecycle. Constructed only once a definition has loaded, so the submit
//! handler can never outrun the render.

use std::collections::HashMap;

use contracts::forms::{
    collect_answers, validate, FormDefinition, Question, QuestionType, Submission,
    SubmissionPayload, SubmitState,
};
use leptos::prelude::*;

use crate::form::api;
use crate::shared::components::ui::{Button, ChoiceGroup, Input, RatingPicker, Textarea};

#[component]
pub fn FormPage(definition: FormDefinition, api_base: String) -> impl IntoView {
    let definition = StoredValue::new(definition);
    let api_base = StoredValue::new(api_base);

    // Raw control state keyed by question id; answers are rebuilt from it
    // on every submission attempt.
    let values: RwSignal<HashMap<String, String>> = RwSignal::new(HashMap::new());
    let field_errors: RwSignal<HashMap<String, String>> = RwSignal::new(HashMap::new());
    let submission = RwSignal::new(Submission::new());
    let (banner, set_banner) = signal::<Option<String>>(None);

    let handle_submit = move || {
        let report =
            definition.with_value(|def| values.with_untracked(|raw| validate(def, raw)));
        if let Some(err) = report.as_error() {
            log::debug!("submission blocked: {err}");
            field_errors.set(
                report
                    .errors
                    .iter()
                    .map(|e| (e.question_id.clone(), e.message.clone()))
                    .collect(),
            );
            if let Some(first) = report.first_invalid() {
                scroll_to_field(first);
            }
            return;
        }
        field_errors.set(HashMap::new());

        // At most one request in flight; success is terminal.
        if !submission.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }
        set_banner.set(None);

        let payload = definition.with_value(|def| SubmissionPayload {
            form_id: def.id.clone(),
            answers: values.with_untracked(|raw| collect_answers(def, raw)),
            submitted_at: chrono::Utc::now(),
        });

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::submit_answers(&api_base.get_value(), &payload).await;
            let outcome = submission.try_update(|s| s.complete(result).clone());
            match outcome {
                Some(SubmitState::Success) => scroll_to_top(),
                Some(SubmitState::Error(message)) => {
                    log::error!("submission failed: {message}");
                    set_banner.set(Some(message));
                }
                _ => {}
            }
        });
    };

    let is_submitting = move || submission.with(|s| s.in_flight());
    let is_success = move || submission.with(|s| s.state() == &SubmitState::Success);

    view! {
        <div class="form-viewer">
            <Show
                when=move || !is_success()
                fallback=|| {
                    view! {
                        <div class="form-viewer__success">
                            <h2>"Thank you!"</h2>
                            <p>"Your response has been recorded."</p>
                        </div>
                    }
                }
            >
                <h1 class="form-viewer__title">{definition.with_value(|d| d.name.clone())}</h1>
                <p class="form-viewer__description">
                    {definition.with_value(|d| d.description.clone())}
                </p>

                {move || {
                    banner
                        .get()
                        .map(|message| {
                            view! {
                                <div class="form-viewer__banner" role="alert">
                                    <span>{message}</span>
                                    <button
                                        type="button"
                                        class="form-viewer__banner-dismiss"
                                        on:click=move |_| set_banner.set(None)
                                    >
                                        "Dismiss"
                                    </button>
                                </div>
                            }
                        })
                }}

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    handle_submit();
                }>
                    <For
                        each=move || definition.with_value(|d| d.questions.clone())
                        key=|question| question.id.clone()
                        children=move |question| {
                            view! {
                                <QuestionField
                                    question=question
                                    values=values
                                    field_errors=field_errors
                                />
                            }
                        }
                    />
                    <Button
                        button_type="submit"
                        disabled=Signal::derive(is_submitting)
                    >
                        {move || if is_submitting() { "Submitting..." } else { "Submit" }}
                    </Button>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn QuestionField(
    question: Question,
    values: RwSignal<HashMap<String, String>>,
    field_errors: RwSignal<HashMap<String, String>>,
) -> impl IntoView {
    let qid = StoredValue::new(question.id.clone());
    let value = Signal::derive(move || {
        values.with(|raw| qid.with_value(|id| raw.get(id).cloned()).unwrap_or_default())
    });
    let on_change = Callback::new(move |new_value: String| {
        values.update(|raw| {
            qid.with_value(|id| raw.insert(id.clone(), new_value));
        });
        // An edit clears the field's stale validation message.
        field_errors.update(|errors| {
            qid.with_value(|id| errors.remove(id));
        });
    });
    let error = move || field_errors.with(|errors| qid.with_value(|id| errors.get(id).cloned()));

    let control = match question.question_type {
        QuestionType::Text => view! {
            <Input
                value=value
                on_input=on_change
                placeholder=question.placeholder.clone().unwrap_or_default()
                id=question.id.clone()
            />
        }
        .into_any(),
        QuestionType::Email => view! {
            <Input
                value=value
                on_input=on_change
                input_type="email"
                placeholder=question.placeholder.clone().unwrap_or_default()
                id=question.id.clone()
            />
        }
        .into_any(),
        QuestionType::LongText => view! {
            <Textarea
                value=value
                on_input=on_change
                placeholder=question.placeholder.clone().unwrap_or_default()
                id=question.id.clone()
            />
        }
        .into_any(),
        QuestionType::Rating => view! {
            <RatingPicker value=value on_select=on_change max=question.rating_scale() />
        }
        .into_any(),
        QuestionType::MultipleChoice => view! {
            <ChoiceGroup
                value=value
                on_change=on_change
                name=question.id.clone()
                options=question.options.clone().unwrap_or_default()
            />
        }
        .into_any(),
        // Fail closed: an unrecognized type renders a note, never crashes
        // the page or blocks the rest of the form.
        QuestionType::Unknown => view! {
            <p class="form__unsupported">
                "This question type is not supported by this version of the form viewer."
            </p>
        }
        .into_any(),
    };

    view! {
        <div class="form__group" id=format!("field-{}", question.id)>
            <label class="form__label">
                {question.question.clone()}
                {question.required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {control}
            {move || {
                error().map(|message| view! { <div class="form__field-error">{message}</div> })
            }}
        </div>
    }
}

fn scroll_to_field(question_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(&format!("field-{question_id}")) {
        element.scroll_into_view();
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
