//! Player-facing message log.

/// How an entry is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    Normal,
    /// Milestones: new best score, a big tile.
    Notable,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub text: String,
    pub style: LogStyle,
    /// Extra consecutive repeats folded into this entry.
    pub dups: u32,
}

impl LogEntry {
    /// The text as displayed, with a repeat counter.
    pub fn display(&self) -> String {
        if self.dups > 0 {
            format!("{} ({}x)", self.text, self.dups + 1)
        } else {
            self.text.clone()
        }
    }
}

const MAX_ENTRIES: usize = 200;

/// The game's message log. Consecutive identical messages are folded.
#[derive(Debug, Default)]
pub struct GameLog {
    entries: Vec<LogEntry>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_styled(&mut self, text: &str, style: LogStyle) {
        if let Some(last) = self.entries.last_mut() {
            if last.text == text && last.style == style {
                last.dups += 1;
                return;
            }
        }
        self.entries.push(LogEntry {
            text: text.to_string(),
            style,
            dups: 0,
        });
        if self.entries.len() > MAX_ENTRIES {
            self.entries.drain(..self.entries.len() - MAX_ENTRIES);
        }
    }

    pub fn log(&mut self, text: &str) {
        self.log_styled(text, LogStyle::Normal);
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[LogEntry] {
        &self.entries[self.entries.len().saturating_sub(n)..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
