// Ask pipeline: validate query + profile, build the prompt, call the LLM under a timeout.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod prompts;
pub mod timed;
pub mod validation;
