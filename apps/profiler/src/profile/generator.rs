//! One profile run: validate, fetch, parse, route.
//!
//! Every failure is terminal for the run only; nothing is retried and nothing
//! outlives the call.

use tracing::{error, info};

use crate::errors::AppError;
use crate::profile::renderer::{render_profile, ProfileView};
use crate::profile::requester::{ProfileRequest, ProfileResponse, ProfileSource};
use crate::profile::variants::ProfileVariant;

#[derive(Debug)]
pub enum ProfileOutcome {
    /// Blank company name. No request was sent.
    Invalid(String),
    /// The run failed after validation. `response` holds the error placeholder.
    Failed {
        message: String,
        response: ProfileResponse,
    },
    Rendered(ProfileView),
}

/// Fetches and renders a profile, or returns the error that stopped the run.
pub async fn generate_profile(
    source: &dyn ProfileSource,
    variant: ProfileVariant,
    company_name: &str,
) -> Result<ProfileView, AppError> {
    let request = ProfileRequest::new(company_name)?;
    let response = source.fetch(variant, &request).await?;
    info!(
        "Profile for '{}' received ({} citations)",
        request.company_name(),
        response.citations.len()
    );
    Ok(render_profile(&response, &variant.routing_table()))
}

/// Same as `generate_profile`, folded into an outcome the page can always display.
pub async fn run_profile(
    source: &dyn ProfileSource,
    variant: ProfileVariant,
    company_name: &str,
) -> ProfileOutcome {
    match generate_profile(source, variant, company_name).await {
        Ok(view) => ProfileOutcome::Rendered(view),
        Err(AppError::Validation(message)) => ProfileOutcome::Invalid(message),
        Err(e) => failed(&e),
    }
}

fn failed(e: &AppError) -> ProfileOutcome {
    error!("Profile request failed: {e}");
    let message = match e {
        AppError::Completion(inner) => format!("An error occurred: {inner}"),
        other => format!("An error occurred: {other}"),
    };
    ProfileOutcome::Failed {
        message,
        response: ProfileResponse::error_placeholder(),
    }
}
