// Resume Assistant core.
// Prompt building, reply interpretation, and the per-submission pipeline.
// All model calls go through llm_client::TextGenerator.

pub mod cover_letter;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod skills;
pub mod suggestions;

use tracing::warn;

use crate::llm_client::TextGenerator;

/// Calls the generator once. A failure is logged, recorded in `warnings`,
/// and returned as `None` so the caller can fall back instead of aborting.
pub(crate) async fn generate_or_warn(
    generator: &dyn TextGenerator,
    task: &str,
    prompt: &str,
    warnings: &mut Vec<String>,
) -> Option<String> {
    match generator.generate(prompt).await {
        Ok(reply) if !reply.trim().is_empty() => Some(reply),
        Ok(_) => {
            warn!("Text generation returned an empty reply during {task}");
            warnings.push(format!("The text generation service returned nothing during {task}."));
            None
        }
        Err(e) => {
            warn!("Text generation failed during {task}: {e}");
            warnings.push(format!(
                "Error communicating with the text generation service during {task}: {e}"
            ));
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{LlmError, TextGenerator};

    /// Replays canned replies in call order and records every prompt.
    /// Once the script runs out, every call fails.
    pub struct ScriptedGenerator {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self::new(Vec::new())
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LlmError::Api {
                    status: 503,
                    message: "scripted outage".to_string(),
                }))
        }
    }
}
