//! Axum route handlers for the profile form and the JSON API.

use axum::{extract::State, Form, Json};
use maud::Markup;
use serde::Deserialize;

use crate::errors::AppError;
use crate::profile::generator::{generate_profile, run_profile};
use crate::profile::page::{render_page, PageModel};
use crate::profile::renderer::ProfileView;
use crate::state::AppState;

/// Company name as submitted by the HTML form or the JSON API.
#[derive(Debug, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub company_name: String,
}

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Markup {
    render_page(&PageModel::empty(state.variant))
}

/// POST /profile
///
/// Always answers 200 with the page; validation and upstream failures are
/// shown inline so the form stays usable.
pub async fn handle_profile_form(
    State(state): State<AppState>,
    Form(input): Form<ProfileInput>,
) -> Markup {
    let outcome = run_profile(state.source.as_ref(), state.variant, &input.company_name).await;
    let model = PageModel::from_outcome(state.variant, &input.company_name, outcome);
    render_page(&model)
}

/// POST /api/v1/profile
pub async fn handle_profile_api(
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> Result<Json<ProfileView>, AppError> {
    let view = generate_profile(state.source.as_ref(), state.variant, &input.company_name).await?;
    Ok(Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_accepts_form_and_json_bodies() {
        let json: ProfileInput = serde_json::from_str(r#"{"company_name":"Acme"}"#).unwrap();
        assert_eq!(json.company_name, "Acme");
        let missing: ProfileInput = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.company_name, "");
    }
}
