// Operator-visible output log shared by both front ends

/// How a line should be presented
///
/// Tones are cosmetic: the line prompt maps them to ANSI colors and the TUI maps
/// them to theme colors. Nothing downstream branches on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Welcome and farewell messages
    Banner,
    /// Horizontal separator under the banner
    Rule,
    /// Confirmation of a completed operation
    Success,
    /// Follow-up figures, such as the balance left after a payment
    Notice,
    /// Something the operator has to correct
    Error,
    /// Menu echo and other neutral text
    Plain,
}

/// A single line of transcript output
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLine {
    pub text: String,
    pub tone: Tone,
}

/// Append-only record of everything reported to the operator
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    /// Append a line. Embedded newlines are split so every entry renders as one row.
    pub fn push(&mut self, tone: Tone, text: impl Into<String>) {
        let text = text.into();
        for row in text.split('\n') {
            self.lines.push(TranscriptLine {
                text: row.to_string(),
                tone,
            });
        }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(Tone::Success, text);
    }

    pub fn notice(&mut self, text: impl Into<String>) {
        self.push(Tone::Notice, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(Tone::Error, text);
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    /// Lines appended after the first `mark` lines
    pub fn since(&self, mark: usize) -> &[TranscriptLine] {
        &self.lines[mark.min(self.lines.len())..]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text of every line, tones dropped
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
    }
}
