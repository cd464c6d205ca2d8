//! HTML rendering for the single-page form.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::profile::generator::ProfileOutcome;
use crate::profile::renderer::{ProfileView, RenderedSection};
use crate::profile::routing::Treatment;
use crate::profile::variants::ProfileVariant;

pub const PAGE_TITLE: &str = "Company Profile Generator";
pub const INPUT_PLACEHOLDER: &str = "e.g., D.S Electrical Works Nagpur";
pub const SUBMIT_LABEL: &str = "Get Company Profile";

const STYLE: &str = "
    body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
    form { display: flex; gap: .5rem; margin-bottom: 1.5rem; }
    input[type=text] { flex: 1; padding: .5rem; }
    .banner { padding: .75rem 1rem; border-radius: .4rem; margin: 1rem 0; }
    .warning { background: #fff4d6; border: 1px solid #e6c35c; }
    .error { background: #fde2e1; border: 1px solid #e0807a; }
    .highlight { background: #e8f4ff; border-left: 4px solid #2b7bd6; padding: .5rem 1rem; }
    .callout { background: #eef8ee; border-left: 4px solid #3a9a48; padding: .5rem 1rem; }
    pre { background: #f4f4f4; padding: .75rem; white-space: pre-wrap; }
    .muted { color: #777; }
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Warning,
    Error,
}

impl BannerKind {
    fn class(&self) -> &'static str {
        match self {
            BannerKind::Warning => "banner warning",
            BannerKind::Error => "banner error",
        }
    }
}

/// Everything needed to draw the page once.
#[derive(Debug, Default)]
pub struct PageModel {
    pub variant: ProfileVariant,
    pub company_name: String,
    pub banners: Vec<(BannerKind, String)>,
    pub placeholder: Option<String>,
    pub view: Option<ProfileView>,
}

impl PageModel {
    pub fn empty(variant: ProfileVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn from_outcome(variant: ProfileVariant, company_name: &str, outcome: ProfileOutcome) -> Self {
        let mut model = Self {
            variant,
            company_name: company_name.to_string(),
            ..Self::default()
        };
        match outcome {
            ProfileOutcome::Invalid(message) => model.banners.push((BannerKind::Warning, message)),
            ProfileOutcome::Failed { message, response } => {
                model.banners.push((BannerKind::Error, message));
                model.placeholder = Some(response.raw_text);
            }
            ProfileOutcome::Rendered(view) => {
                if let Some(notice) = &view.notice {
                    model.banners.push((BannerKind::Warning, notice.clone()));
                }
                model.view = Some(view);
            }
        }
        model
    }
}

fn is_link(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn lines_with_breaks(text: &str) -> Markup {
    html! {
        @for (i, line) in text.lines().enumerate() {
            @if i > 0 { br; }
            (line)
        }
    }
}

fn render_section(section: &RenderedSection) -> Markup {
    match section.treatment {
        Treatment::Highlight => html! {
            section.highlight {
                h3 { (section.header) }
                p { strong { (lines_with_breaks(&section.body)) } }
            }
        },
        Treatment::Code => html! {
            section {
                h3 { (section.header) }
                pre { code { (section.body) } }
            }
        },
        Treatment::Callout => html! {
            section.callout {
                h3 { (section.header) }
                p { (lines_with_breaks(&section.body)) }
            }
        },
        Treatment::Plain => html! {
            section {
                h3 { (section.header) }
                p { (lines_with_breaks(&section.body)) }
            }
        },
    }
}

fn render_view(view: &ProfileView) -> Markup {
    html! {
        h2 { "Company Profile" }
        @if let Some(fallback) = &view.raw_fallback {
            div class=(BannerKind::Warning.class()) { (fallback.warning) }
            // One paragraph per non-empty line.
            @for line in fallback.text.lines().filter(|l| !l.trim().is_empty()) {
                p { (line) }
            }
        }
        @for section in &view.sections {
            (render_section(section))
        }
        h2 { "Citations" }
        @if let Some(notice) = &view.citations_notice {
            p.muted { (notice) }
        } @else {
            ul.citations {
                @for (i, source) in view.citation_sources.iter().enumerate() {
                    li {
                        (i + 1) ". "
                        @if is_link(source) {
                            a href=(source) rel="noopener noreferrer" target="_blank" { (source) }
                        } @else {
                            (source)
                        }
                    }
                }
            }
        }
    }
}

pub fn render_page(model: &PageModel) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (PAGE_TITLE) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { (PAGE_TITLE) }
                p.muted { "Profile style: " (model.variant) }
                form method="post" action="/profile" {
                    label for="company_name" { "Enter the company name:" }
                    input type="text" id="company_name" name="company_name"
                        placeholder=(INPUT_PLACEHOLDER) value=(model.company_name);
                    button type="submit" { (SUBMIT_LABEL) }
                }
                @for (kind, message) in &model.banners {
                    div class=(kind.class()) { (message) }
                }
                @if let Some(placeholder) = &model.placeholder {
                    p.muted { (placeholder) }
                }
                @if let Some(view) = &model.view {
                    (render_view(view))
                }
            }
        }
    }
}
