// Profile audit: prompt construction, the single outbound generation call,
// and the three fixed fallbacks. All LLM calls go through llm_client.

pub mod auditor;
pub mod gate;
pub mod handlers;
pub mod prompts;

pub use auditor::Auditor;
