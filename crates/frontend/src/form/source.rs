//! Where form definitions come from.

use contracts::forms::{FormDefinition, FormError};

use crate::form::{api, fixture};

/// Injectable source of form definitions: the real API or the built-in
/// fixture. Selected from build configuration, never by inspecting the
/// runtime hostname.
#[derive(Debug, Clone)]
pub enum FormSource {
    Remote {
        base: String,
        /// Whether a failed fetch may be answered with the fixture form.
        /// Tied to the `dev-fixture` feature; off in production builds.
        fixture_fallback: bool,
    },
    Fixture,
}

impl FormSource {
    pub fn remote(base: String, fixture_fallback: bool) -> Self {
        Self::Remote {
            base,
            fixture_fallback,
        }
    }

    pub async fn load(&self, form_id: &str) -> Result<FormDefinition, FormError> {
        match self {
            Self::Fixture => Ok(fixture::fixture_form(form_id)),
            Self::Remote {
                base,
                fixture_fallback,
            } => match api::fetch_form_definition(base, form_id).await {
                Ok(definition) => Ok(definition),
                Err(err) if *fixture_fallback => {
                    log::warn!("form fetch failed ({err}); serving the built-in fixture form");
                    Ok(fixture::fixture_form(form_id))
                }
                Err(err) => Err(err),
            },
        }
    }
}
