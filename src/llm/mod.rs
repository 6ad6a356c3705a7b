//! Language-model service boundary
//!
//! Everything that talks to the chat-completion service lives here. Replies
//! are treated as untrusted text: each consumer extracts a JSON substring,
//! parses it into a strongly-typed shape, and falls back explicitly on any
//! mismatch.
//!
//! The [`ChatModel`] trait is the seam between the pipeline and the network;
//! tests script replies through a stub instead of calling a live service.

pub mod client;
pub mod estimator;
pub mod extract;
pub mod parser;

pub use client::{LlmClient, LlmConfig, LlmError};
pub use estimator::NutritionEstimator;
pub use parser::{FoodParser, ParseError, ParsedFood};

use async_trait::async_trait;

/// Per-call completion parameters
#[derive(Debug, Clone, Copy)]
pub struct CompletionParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A chat-completion model: system + user prompt in, reply text out
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        params: CompletionParams,
    ) -> Result<String, LlmError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Test stub that replays scripted replies in order
    pub struct ScriptedModel {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
    }

    impl ScriptedModel {
        pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
            }
        }

        /// Convenience: a model that always replies with the same text
        pub fn always(reply: &str) -> Self {
            Self::new(vec![Ok(reply.to_string())])
        }
    }

    #[async_trait]
    impl ChatModel for ScriptedModel {
        async fn complete(
            &self,
            _system: &str,
            _user: &str,
            _params: CompletionParams,
        ) -> Result<String, LlmError> {
            let mut replies = self.replies.lock().unwrap();
            match replies.pop_front() {
                Some(reply) => {
                    // Repeat the last scripted reply once the queue drains
                    if replies.is_empty() {
                        if let Ok(text) = &reply {
                            replies.push_back(Ok(text.clone()));
                        }
                    }
                    reply
                }
                None => Err(LlmError::Unavailable),
            }
        }
    }
}
