use serde::{Deserialize, Serialize};
use std::fmt;

/// Feeder queues the status service knows about, in display order.
pub const KNOWN_QUEUES: [&str; 12] = [
    "11", "12", "21", "22", "31", "32", "41", "42", "51", "52", "61", "62",
];

/// Queue used when input cannot be resolved to a known queue.
pub const DEFAULT_QUEUE: &str = "11";

/// Identifier of a distribution-grid feeder queue (e.g. `"31"`).
///
/// The codec treats this as opaque bytes; only [`QueueId::resolve`] and the
/// display helpers look inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueId(String);

impl QueueId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All known queues.
    pub fn known() -> Vec<QueueId> {
        KNOWN_QUEUES.iter().map(|q| QueueId::new(*q)).collect()
    }

    pub fn is_known(&self) -> bool {
        KNOWN_QUEUES.contains(&self.0.as_str())
    }

    /// Resolve user input such as `"31"`, `"3.1"` or `" 31 "` to a known
    /// queue, falling back to [`DEFAULT_QUEUE`].
    pub fn resolve(input: Option<&str>) -> QueueId {
        let Some(raw) = input.map(str::trim) else {
            return QueueId::new(DEFAULT_QUEUE);
        };

        let candidate = match raw.split_once('.') {
            Some((group, sub)) => match (group.parse::<u32>(), sub.parse::<u32>()) {
                // "3.0" is a float-looking integer, not group 3 sub-queue 0
                (Ok(group), Ok(0)) => group.to_string(),
                (Ok(group), Ok(sub)) if sub < 10 => format!("{}{}", group, sub),
                _ => String::new(),
            },
            None => raw.parse::<u32>().map(|n| n.to_string()).unwrap_or_default(),
        };

        let queue = QueueId::new(candidate);
        if queue.is_known() {
            queue
        } else {
            QueueId::new(DEFAULT_QUEUE)
        }
    }

    /// Dotted label shown to people: `"31"` becomes `"3.1"`.
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(group), Some(sub), None) => format!("{}.{}", group, sub),
            _ => self.0.clone(),
        }
    }

    /// 1-based position of a two-digit queue in the utility's table:
    /// `(group - 1) * 2 + sub`.
    pub fn ordinal(&self) -> Option<u32> {
        let code: u32 = self.0.parse().ok()?;
        let (group, sub) = (code / 10, code % 10);
        if group == 0 || code >= 100 {
            return None;
        }
        Some((group - 1) * 2 + sub)
    }
}

impl fmt::Display for QueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QueueId {
    fn from(value: &str) -> Self {
        QueueId::new(value)
    }
}

impl From<String> for QueueId {
    fn from(value: String) -> Self {
        QueueId(value)
    }
}
