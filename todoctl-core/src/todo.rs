//! Todo item model
//!
//! Task text is trimmed and checked for emptiness when a [`TaskText`] is
//! built. Blank input returns `ValidationError`, never a stored row.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// A persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Assigned by the store; never reused after deletion
    pub id: i64,
    pub task: String,
    pub done: bool,
}

/// Validated task description (trimmed, non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskText(String);

impl TaskText {
    /// Trim `raw` and reject it if nothing is left.
    ///
    /// # Example
    /// ```
    /// use todoctl_core::TaskText;
    ///
    /// assert_eq!(TaskText::new("  Buy milk ").unwrap().as_str(), "Buy milk");
    /// assert!(TaskText::new(" \t\n").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "task" });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the task text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let task = TaskText::new("\t Buy milk  \n").unwrap();
        assert_eq!(task.as_str(), "Buy milk");
    }

    #[test]
    fn keeps_inner_whitespace() {
        let task = TaskText::new("Buy  oat milk").unwrap();
        assert_eq!(task.as_str(), "Buy  oat milk");
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(
            TaskText::new(""),
            Err(ValidationError::Empty { field: "task" })
        );
        assert!(TaskText::new("   ").is_err());
        assert!(TaskText::new("\r\n\t").is_err());
    }

    #[test]
    fn todo_item_serializes_with_native_bool() {
        let item = TodoItem {
            id: 7,
            task: "Write tests".into(),
            done: true,
        };
        let rendered = toml::to_string(&item).unwrap();
        assert!(rendered.contains("done = true"));
        assert!(rendered.contains("id = 7"));
    }
}
