//! Section Renderer: turns a fetched profile into a display model.

use serde::Serialize;
use tracing::{debug, warn};

use crate::profile::parser::parse_sections;
use crate::profile::requester::ProfileResponse;
use crate::profile::routing::{RoutingTable, Treatment};

pub const UNSTRUCTURED_WARNING: &str =
    "Could not detect structured sections. Showing the raw response instead.";
pub const NO_CONTENT_NOTICE: &str = "No profile content received.";
pub const NO_CITATIONS_NOTICE: &str = "No citations available.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSection {
    pub header: String,
    pub treatment: Treatment,
    /// Trimmed body, or the rule's placeholder when the body is empty.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawFallback {
    pub warning: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub sections: Vec<RenderedSection>,
    pub raw_fallback: Option<RawFallback>,
    pub notice: Option<String>,
    /// Numbered "1. ..." lines, in the order returned.
    pub citations: Vec<String>,
    pub citations_notice: Option<String>,
    /// Unnumbered citation strings, for link rendering.
    #[serde(skip)]
    pub citation_sources: Vec<String>,
}

pub fn number_citations(citations: &[String]) -> Vec<String> {
    citations
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {}", i + 1, c))
        .collect()
}

pub fn render_profile(response: &ProfileResponse, table: &RoutingTable) -> ProfileView {
    let section_map = parse_sections(&response.raw_text);

    let sections = section_map
        .iter()
        .map(|(header, body)| {
            let route = table.route(header);
            let trimmed = body.trim();
            let body = match route.empty_fallback {
                Some(fallback) if trimmed.is_empty() => fallback.to_string(),
                _ => trimmed.to_string(),
            };
            RenderedSection {
                header: header.to_string(),
                treatment: route.treatment,
                body,
            }
        })
        .collect::<Vec<_>>();

    let notice = (!response.has_content()).then(|| NO_CONTENT_NOTICE.to_string());

    // An empty response already carries `notice`; the raw view is for unparsed text only.
    let raw_fallback = if section_map.is_empty() && response.has_content() {
        warn!("No section headers detected in generated profile");
        Some(RawFallback {
            warning: UNSTRUCTURED_WARNING.to_string(),
            text: response.raw_text.clone(),
        })
    } else {
        None
    };

    let citations_notice = response
        .citations
        .is_empty()
        .then(|| NO_CITATIONS_NOTICE.to_string());

    debug!(
        "Rendered profile: sections={}, citations={}",
        section_map.len(),
        response.citations.len()
    );

    ProfileView {
        sections,
        raw_fallback,
        notice,
        citations: number_citations(&response.citations),
        citations_notice,
        citation_sources: response.citations.clone(),
    }
}
