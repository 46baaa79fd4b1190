//! Instruction templates for structured extraction.
//!
//! Each artifact type has a fixed template that embeds the schema's field
//! semantics: count caps, default literals, and tone.

/// System role shared by the meeting-oriented extractions.
pub const MEETING_ANALYST_SYSTEM: &str = "You are an expert meeting analyst.";

/// System role for video insight extraction.
pub const CONTENT_ANALYST_SYSTEM: &str = "You are an expert content analyst.";

/// Instruction for extracting action items from a transcript.
pub const TASK_EXTRACTION_PROMPT: &str = r#"Extract ALL action items and tasks from this transcript.

For each task identify:
- The specific task to be done
- Who is responsible (use "Team" if unclear)
- Due date in YYYY-MM-DD format, or "TBD"
- Priority: High (urgent), Medium (important), Low (nice to have)

Be thorough — capture every commitment, follow-up, and deliverable mentioned.

TRANSCRIPT:
{transcript}"#;

/// Instruction for summarizing a meeting.
pub const MEETING_SUMMARY_PROMPT: &str = r#"Analyze this meeting transcript and provide:
- A concise meeting title (max 8 words)
- An executive summary (3-4 sentences: what was discussed and decided)
- Key decisions made (up to 5)
- Clear next steps agreed upon (up to 5)

TRANSCRIPT:
{transcript}"#;

/// Instruction for distilling a video for someone who won't watch it.
pub const VIDEO_INSIGHTS_PROMPT: &str = r#"Someone doesn't have time to watch this video — give them everything they need to know.

Provide:
- A short title describing what the video is about
- A 3-4 sentence summary of the content
- The most important takeaways (up to 7 key points worth remembering)
- Main topics or sections covered (up to 5)
- Action items: things the viewer should do or explore after watching (up to 5)

VIDEO TRANSCRIPT:
{transcript}"#;

/// Format the task extraction prompt.
pub fn format_task_prompt(transcript: &str) -> String {
    TASK_EXTRACTION_PROMPT.replace("{transcript}", transcript)
}

/// Format the meeting summary prompt.
pub fn format_summary_prompt(transcript: &str) -> String {
    MEETING_SUMMARY_PROMPT.replace("{transcript}", transcript)
}

/// Format the video insights prompt.
pub fn format_insights_prompt(transcript: &str) -> String {
    VIDEO_INSIGHTS_PROMPT.replace("{transcript}", transcript)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_prompt_embeds_transcript() {
        let formatted = format_task_prompt("Alice will send the report.");
        assert!(formatted.contains("Alice will send the report."));
        assert!(formatted.contains("\"Team\""));
        assert!(formatted.contains("TBD"));
    }

    #[test]
    fn test_summary_prompt_states_caps() {
        let formatted = format_summary_prompt("text");
        assert!(formatted.contains("max 8 words"));
        assert!(formatted.contains("up to 5"));
    }

    #[test]
    fn test_insights_prompt_states_caps() {
        let formatted = format_insights_prompt("text");
        assert!(formatted.contains("up to 7"));
        assert!(formatted.contains("up to 5"));
    }
}
