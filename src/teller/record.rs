use crate::ids::SequenceNumber;

use std::fmt;

use chrono::{DateTime, Local};

/// An immutable entry describing one committed balance-changing operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    sequence: SequenceNumber,
    timestamp: DateTime<Local>,
    description: String,
}

impl TransactionRecord {
    pub(crate) fn new(
        sequence: SequenceNumber,
        timestamp: DateTime<Local>,
        description: String,
    ) -> Self {
        return Self {
            sequence,
            timestamp,
            description,
        };
    }

    pub fn sequence(&self) -> SequenceNumber {
        return self.sequence;
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        return self.timestamp;
    }

    pub fn description(&self) -> &str {
        return &self.description;
    }
}

impl fmt::Display for TransactionRecord {
    // Second resolution; the sequence number, not this rendering, is the key.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(
            f,
            "{}.{}: {}",
            self.sequence,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.description
        );
    }
}
