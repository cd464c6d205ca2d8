// Company profile pipeline: prompt variants, the requester, the section parser,
// header routing and the HTML page. All remote calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod page;
pub mod parser;
pub mod prompts;
pub mod renderer;
pub mod requester;
pub mod routing;
pub mod variants;
