//! Append-only session transcript.

use std::fmt;

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::User => "User: ",
            Self::Bot => "Bot: ",
        }
    }
}

/// Ordered `User:` / `Bot:` lines for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: &str) {
        self.push(Speaker::User, text);
    }

    pub fn push_bot(&mut self, text: &str) {
        self.push(Speaker::Bot, text);
    }

    fn push(&mut self, speaker: Speaker, text: &str) {
        self.entries.push(format!("{}{}", speaker.prefix(), text));
    }

    /// Lines in chronological order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every line. Only a session reset does this.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// All lines, top to bottom, one per line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}
