//! Transcript acquisition boundary.

use async_trait::async_trait;

use crate::error::Result;

/// Plain text derived from audio or captions, plus how long the source
/// material runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,

    /// Duration of the source in minutes, derived from the last
    /// recognized segment's end timestamp; 0.0 when no segments.
    pub duration_minutes: f64,
}

impl Transcript {
    pub fn new(text: impl Into<String>, duration_minutes: f64) -> Self {
        Self {
            text: text.into(),
            duration_minutes,
        }
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Black-box source of transcripts (speech-to-text engine, caption API,
/// pasted text).
///
/// `reference` is whatever the implementation understands: an audio file
/// path, a video identifier, a URL. Acquisition failures surface as
/// [`crate::DistillError::Transcript`].
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch(&self, reference: &str) -> Result<Transcript>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        let transcript = Transcript::new("one two  three\nfour", 2.0);
        assert_eq!(transcript.word_count(), 4);
    }
}
