use std::fmt;

use serde::{Deserialize, Serialize};

/// A single student record.
///
/// Both fields are freely readable and writable by whichever context owns
/// the record; no validation is performed on assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Numeric identifier assigned by the owning context.
    pub id: i32,
    /// Text label for the student.
    pub name: String,
}

impl StudentRecord {
    /// Create a record with an unset id (`0`) and an empty name.
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical display string: the decimal form of `id`, a single
    /// space, then `name` verbatim.
    ///
    /// Pure function of the current field values. Any id (including
    /// negative) and any name (including empty) format without failure.
    ///
    /// # Example
    ///
    /// ```
    /// use studentrec::StudentRecord;
    ///
    /// let mut student = StudentRecord::new();
    /// student.id = 1;
    /// student.name = "John".to_string();
    /// assert_eq!(student.display(), "1 John");
    /// ```
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}
