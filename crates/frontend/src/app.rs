use contracts::forms::{FormDefinition, FormError};
use leptos::prelude::*;

use crate::form::{source::FormSource, view::FormPage};
use crate::shared::{api_utils, config::AppConfig, url};

#[derive(Debug, Clone)]
enum LoadState {
    Loading,
    Ready(FormDefinition),
    Failed(FormError),
}

/// Page controller: resolves the form id, loads the definition through the
/// configured source and hands a ready form to [`FormPage`]. Config and
/// source are constructed here and passed down; nothing is global.
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    let api_base = api_utils::api_base(&config);
    let source = FormSource::remote(api_base.clone(), config.fixture_fallback);

    let (state, set_state) = signal(LoadState::Loading);

    match url::resolve_form_id_from_window() {
        Some(form_id) => {
            wasm_bindgen_futures::spawn_local(async move {
                match source.load(&form_id).await {
                    Ok(definition) => set_state.set(LoadState::Ready(definition)),
                    Err(err) => {
                        log::error!("failed to load form \"{form_id}\": {err}");
                        set_state.set(LoadState::Failed(err));
                    }
                }
            });
        }
        None => set_state.set(LoadState::Failed(FormError::MissingFormId)),
    }

    view! {
        <main class="form-viewer__page">
            {move || match state.get() {
                LoadState::Loading => {
                    view! { <div class="form-viewer__loading">"Loading form..."</div> }.into_any()
                }
                LoadState::Failed(err) => view! { <ErrorPanel error=err /> }.into_any(),
                LoadState::Ready(definition) => {
                    view! { <FormPage definition=definition api_base=api_base.clone() /> }
                        .into_any()
                }
            }}
        </main>
    }
}

/// Static, user-facing error view replacing the loading indicator. Each
/// error in the taxonomy gets its own message.
#[component]
fn ErrorPanel(error: FormError) -> impl IntoView {
    let (title, detail) = match &error {
        FormError::MissingFormId => (
            "No form specified",
            "The page URL does not identify a form. Check the link you followed.".to_string(),
        ),
        FormError::FormNotFound(id) => ("Form not found", format!("No form with id \"{id}\" exists.")),
        _ => ("Could not load the form", error.to_string()),
    };

    view! {
        <div class="form-viewer__error" role="alert">
            <h2>{title}</h2>
            <p>{detail}</p>
        </div>
    }
}
