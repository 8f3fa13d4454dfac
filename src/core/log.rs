//! Advisory game log.
//!
//! Every cash movement, landing outcome, card draw and rejected command
//! leaves a line here for the presentation layer to show. The log lives in
//! the game state so it is captured by snapshots and cleared by a new game.

use im::Vector;
use serde::{Deserialize, Serialize};

/// One log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Position in the log, starting at 0.
    pub sequence: u32,
    pub message: String,
}

/// Append-only message log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vector<LogEntry>,
}

impl GameLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message.
    pub fn push(&mut self, message: impl Into<String>) {
        let sequence = self.entries.len() as u32;
        self.entries.push_back(LogEntry {
            sequence,
            message: message.into(),
        });
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Format an amount the way the board shows money: `$1,500M`.
///
/// ```
/// use spaceopoly::core::money;
///
/// assert_eq!(money(200), "$200M");
/// assert_eq!(money(1500), "$1,500M");
/// assert_eq!(money(-75), "-$75M");
/// ```
#[must_use]
pub fn money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}${}M", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_sequences() {
        let mut log = GameLog::new();
        log.push("first");
        log.push(String::from("second"));

        assert_eq!(log.len(), 2);
        let entries: Vec<_> = log.iter().map(|e| (e.sequence, e.message.as_str())).collect();
        assert_eq!(entries, vec![(0, "first"), (1, "second")]);
        assert_eq!(log.last().unwrap().message, "second");
    }

    #[test]
    fn test_money_grouping() {
        assert_eq!(money(0), "$0M");
        assert_eq!(money(999), "$999M");
        assert_eq!(money(1000), "$1,000M");
        assert_eq!(money(1234567), "$1,234,567M");
    }
}
