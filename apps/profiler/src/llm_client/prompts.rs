// Cross-cutting prompt fragments shared by every profile variant.
// Variant-specific templates live in profile::prompts.

/// Appended to every system prompt so the section parser can find headers.
pub const SECTION_FORMAT_INSTRUCTION: &str = "\
    Format the answer as plain text sections. Put each section header on its own line, \
    ending with a colon (for example `Business Overview:`), followed by the section \
    content on the lines below it. Keep headers short.";

/// Appended to every system prompt.
pub const CITATION_INSTRUCTION: &str =
    "Ensure the information is accurate, concise, and properly cited.";

/// User instruction sent with every variant. Replace `{company_name}` before sending.
pub const USER_PROMPT_TEMPLATE: &str = "Build a company profile for: {company_name}";
