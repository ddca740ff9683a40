//! SPDI (Sequence Position Deletion Insertion) coordinates.
//!
//! The serialized form is `seq_id:position:deleted:inserted`, with a 0-based
//! interbase position. The deleted field may also be a length, e.g.
//! `NC_000008.10:19813528:1:G`, which is passed through to the service as is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::VariationError;

/// An exact edit against a named reference sequence.
///
/// Two values are equal exactly when their serialized forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Spdi {
    pub seq_id: String,
    pub position: u64,
    pub deleted_sequence: String,
    pub inserted_sequence: String,
}

impl Spdi {
    pub fn new(
        seq_id: impl Into<String>,
        position: u64,
        deleted_sequence: impl Into<String>,
        inserted_sequence: impl Into<String>,
    ) -> Self {
        Self {
            seq_id: seq_id.into(),
            position,
            deleted_sequence: deleted_sequence.into(),
            inserted_sequence: inserted_sequence.into(),
        }
    }

    /// Reference and observed sequence are identical.
    pub fn is_no_change(&self) -> bool {
        self.deleted_sequence == self.inserted_sequence
    }
}

impl fmt::Display for Spdi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.seq_id, self.position, self.deleted_sequence, self.inserted_sequence
        )
    }
}

impl FromStr for Spdi {
    type Err = VariationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        if fields.len() != 4 || fields[0].is_empty() {
            return Err(VariationError::Format(s.to_string()));
        }

        let position = fields[1]
            .parse::<u64>()
            .map_err(|_| VariationError::Format(s.to_string()))?;

        Ok(Spdi::new(fields[0], position, fields[2], fields[3]))
    }
}
