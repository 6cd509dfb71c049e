mod builder;
pub mod registry;
mod template;

pub use builder::{build_prompt, build_request_prompt, DISCLOSURE, FOOTER};
pub use registry::{normalize, DocType, ALIASES};
pub use template::PromptTemplate;
