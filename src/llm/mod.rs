//! LLM backends, prompt construction and response normalization.

pub(crate) mod chat;
pub mod gemini;
pub mod json;
pub mod openai;
pub mod openrouter;
pub mod prompt;
pub mod router;

pub use json::{ParsedSummary, normalize_response, parse_summary, strip_code_fences};
pub use prompt::{SYSTEM_INSTRUCTION, build_prompt};
pub use router::{Backend, Provider, TextGenerator};
