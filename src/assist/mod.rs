//! Generative text assistance behind an injectable interface.
//!
//! The transliteration engine never touches this module: assist calls are
//! non-deterministic, fallible, and networked, so they live behind the
//! [`Assistant`] trait and are wired in only by the API facade or the CLI.
//! Every caller must degrade safely when a call fails — in particular a
//! save must still succeed with a default label.

pub mod gemini;

pub use gemini::GeminiClient;

#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("rate limited or quota exhausted")]
    RateLimited,
    #[error("malformed response: {0}")]
    InvalidResponse(String),
    #[error("empty response")]
    Empty,
}

/// The text tasks offered by the original application, each a fixed prompt
/// around the user's current output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistTask {
    /// Fix spelling, grammar, and natural flow.
    GrammarFix,
    /// Rewrite as a formal workplace letter.
    FormalLetter,
    /// Rewrite for a friendly social-media post.
    SocialPost,
    /// Translate Sinhala to English.
    TranslateToEnglish,
    /// Produce a 2-3 word Sinhala title for a saved note.
    TitleLabel,
}

impl AssistTask {
    pub fn prompt(self, text: &str) -> String {
        match self {
            AssistTask::GrammarFix => format!(
                "Fix the spelling, grammar and natural flow of this Sinhala text, \
                 keeping its meaning: \"{text}\""
            ),
            AssistTask::FormalLetter => format!(
                "Translate and rewrite this Sinhala text into a highly formal letter \
                 format suitable for a workplace: \"{text}\""
            ),
            AssistTask::SocialPost => format!(
                "Make this Sinhala text engaging and friendly for a social media post: \
                 \"{text}\""
            ),
            AssistTask::TranslateToEnglish => {
                format!("Translate this Sinhala to English: \"{text}\"")
            }
            AssistTask::TitleLabel => {
                // Only a short prefix is needed for a title; truncate on a
                // char boundary, never mid-glyph.
                let prefix: String = text.chars().take(100).collect();
                format!("Summarize this text into 2-3 Sinhala words for a title: \"{prefix}\"")
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssistTask::GrammarFix => "grammar",
            AssistTask::FormalLetter => "formal",
            AssistTask::SocialPost => "social",
            AssistTask::TranslateToEnglish => "translate",
            AssistTask::TitleLabel => "title",
        }
    }
}

/// A synchronous, fallible text assistant. Implementations own their error
/// taxonomy via [`AssistError`]; callers own the fallback policy.
pub trait Assistant {
    fn assist(&self, prompt: &str) -> Result<String, AssistError>;
}
