//! Profile variants: prompt wording, generation parameters and header routing
//! bundled as data, one value per variant.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm_client::prompts::{
    CITATION_INSTRUCTION, SECTION_FORMAT_INSTRUCTION, USER_PROMPT_TEMPLATE,
};
use crate::llm_client::CompletionOptions;
use crate::profile::prompts::{
    COMPLIANCE_SYSTEM_TEMPLATE, SALES_SYSTEM_TEMPLATE, STANDARD_SYSTEM_TEMPLATE,
};
use crate::profile::routing::{
    HeaderMatcher, RoutingRule, RoutingTable, Treatment, NO_COMPETITORS,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileVariant {
    #[default]
    Standard,
    Sales,
    Compliance,
}

#[derive(Debug, Error)]
#[error("unknown profile variant '{0}'")]
pub struct UnknownVariant(String);

impl FromStr for ProfileVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(ProfileVariant::Standard),
            "sales" => Ok(ProfileVariant::Sales),
            "compliance" => Ok(ProfileVariant::Compliance),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for ProfileVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProfileVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileVariant::Standard => "standard",
            ProfileVariant::Sales => "sales",
            ProfileVariant::Compliance => "compliance",
        }
    }

    pub fn system_prompt(&self, company_name: &str) -> String {
        let template = match self {
            ProfileVariant::Standard => STANDARD_SYSTEM_TEMPLATE,
            ProfileVariant::Sales => SALES_SYSTEM_TEMPLATE,
            ProfileVariant::Compliance => COMPLIANCE_SYSTEM_TEMPLATE,
        };
        format!(
            "{} {} {}",
            template.replace("{company_name}", company_name),
            SECTION_FORMAT_INSTRUCTION,
            CITATION_INSTRUCTION
        )
    }

    pub fn user_prompt(&self, company_name: &str) -> String {
        USER_PROMPT_TEMPLATE.replace("{company_name}", company_name)
    }

    pub fn completion_options(&self) -> CompletionOptions {
        CompletionOptions {
            text_fallback: matches!(self, ProfileVariant::Sales),
            ..CompletionOptions::default()
        }
    }

    pub fn routing_table(&self) -> RoutingTable {
        let competitors = RoutingRule::new(HeaderMatcher::Contains("competitor"), Treatment::Highlight)
            .with_fallback(NO_COMPETITORS);
        let summary_or_search = RoutingRule::new(
            HeaderMatcher::AnyOf(vec![
                HeaderMatcher::Contains("summary"),
                HeaderMatcher::StartsWith("google search"),
            ]),
            Treatment::Code,
        );

        match self {
            ProfileVariant::Standard => RoutingTable::new(vec![
                competitors,
                summary_or_search,
                RoutingRule::new(
                    HeaderMatcher::Exact(&["contact", "certifications", "key personnel"]),
                    Treatment::Callout,
                ),
            ]),
            ProfileVariant::Sales => RoutingTable::new(vec![
                competitors,
                RoutingRule::new(HeaderMatcher::Contains("summary"), Treatment::Code),
                RoutingRule::new(
                    HeaderMatcher::Exact(&["contact", "key personnel", "decision makers"]),
                    Treatment::Callout,
                ),
            ]),
            ProfileVariant::Compliance => RoutingTable::new(vec![
                competitors,
                summary_or_search,
                RoutingRule::new(
                    HeaderMatcher::Exact(&[
                        "contact",
                        "certifications",
                        "key personnel",
                        "registrations",
                        "licenses",
                    ]),
                    Treatment::Callout,
                ),
            ]),
        }
    }
}
