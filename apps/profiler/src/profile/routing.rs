//! Header routing: maps a section header to the display treatment used for it.
//!
//! A `RoutingTable` is an ordered list of rules evaluated first-match-wins against
//! the lower-cased, trimmed header label. Headers no rule claims fall through to
//! `Treatment::Plain` with the "Not Available" placeholder.

use serde::Serialize;

pub const NOT_AVAILABLE: &str = "Not Available";
pub const NO_COMPETITORS: &str = "No competitors found.";

/// How a section is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    /// Emphasized block.
    Highlight,
    /// Monospaced block.
    Code,
    /// Informational callout.
    Callout,
    /// Plain formatted text.
    Plain,
}

/// Predicate over a normalized (trimmed, lower-case) header label.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderMatcher {
    Contains(&'static str),
    StartsWith(&'static str),
    Exact(&'static [&'static str]),
    AnyOf(Vec<HeaderMatcher>),
}

impl HeaderMatcher {
    fn matches(&self, label: &str) -> bool {
        match self {
            HeaderMatcher::Contains(kw) => label.contains(kw),
            HeaderMatcher::StartsWith(kw) => label.starts_with(kw),
            HeaderMatcher::Exact(set) => set.iter().any(|s| *s == label),
            HeaderMatcher::AnyOf(matchers) => matchers.iter().any(|m| m.matches(label)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutingRule {
    pub matcher: HeaderMatcher,
    pub treatment: Treatment,
    /// Shown instead of the body when the trimmed body is empty.
    pub empty_fallback: Option<&'static str>,
}

impl RoutingRule {
    pub fn new(matcher: HeaderMatcher, treatment: Treatment) -> Self {
        Self {
            matcher,
            treatment,
            empty_fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: &'static str) -> Self {
        self.empty_fallback = Some(fallback);
        self
    }
}

/// The outcome of routing one header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub treatment: Treatment,
    pub empty_fallback: Option<&'static str>,
}

const DEFAULT_ROUTE: Route = Route {
    treatment: Treatment::Plain,
    empty_fallback: Some(NOT_AVAILABLE),
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoutingTable {
    rules: Vec<RoutingRule>,
}

impl RoutingTable {
    pub fn new(rules: Vec<RoutingRule>) -> Self {
        Self { rules }
    }

    pub fn route(&self, header: &str) -> Route {
        let label = header.trim().to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(&label))
            .map(|rule| Route {
                treatment: rule.treatment,
                empty_fallback: rule.empty_fallback,
            })
            .unwrap_or(DEFAULT_ROUTE)
    }
}
