//! Summit AI - advisory proxy over external chat-completion providers.
//!
//! Builds deterministic prompts from the user's profile, goals and tasks,
//! sends them through rig-core as one-shot completions, and parses the
//! JSON-shaped replies. No streaming, no tool loop, no retries.

pub mod advisor;
pub mod completion;
pub mod error;
pub mod prompt;
pub mod types;

pub use advisor::{AdvisorService, AdvisorServiceTrait};
pub use completion::{AdvisorConfig, CompletionBackend, FakeCompletionBackend, RigCompletionBackend};
pub use error::AiError;
pub use types::{
    AgentDecision, AgentReply, NewRecommendation, Recommendation, RecommendationRepositoryTrait,
    RecommendationType, TaskDraft,
};
