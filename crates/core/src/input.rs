//! 控制台输入校验
//!
//! Each helper validates one answer in isolation; callers abort on the first error.

use thiserror::Error;

use crate::task::{Category, Priority, TaskId};

/// Input validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid {0}.")]
    Blank(&'static str),

    #[error("Invalid category.")]
    Category(String),

    #[error("Invalid priority.")]
    Priority(String),

    #[error("Invalid ID.")]
    TaskId(String),

    #[error("Invalid input: not valid UTF-8.")]
    Encoding,
}

/// Non-blank text, trimmed
pub fn validate_text(field: &'static str, input: &str) -> Result<String, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Blank(field));
    }
    Ok(trimmed.to_string())
}

pub fn parse_category(input: &str) -> Result<Category, InputError> {
    input
        .parse()
        .map_err(|_| InputError::Category(input.trim().to_string()))
}

pub fn parse_priority(input: &str) -> Result<Priority, InputError> {
    Priority::parse_flag(input).ok_or_else(|| InputError::Priority(input.trim().to_string()))
}

/// Any integer is accepted; `None` when no task can carry it (negative ids)
pub fn parse_task_id(input: &str) -> Result<Option<TaskId>, InputError> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<i128>()
        .map_err(|_| InputError::TaskId(trimmed.to_string()))?;
    Ok(u64::try_from(value).ok().map(TaskId))
}

/// Decode one raw console line
pub fn decode_line(bytes: Vec<u8>) -> Result<String, InputError> {
    String::from_utf8(bytes).map_err(|_| InputError::Encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text() {
        assert_eq!(validate_text("name", "  Groceries \n").unwrap(), "Groceries");
        assert_eq!(validate_text("name", "   "), Err(InputError::Blank("name")));
        assert_eq!(
            validate_text("description", "").unwrap_err().to_string(),
            "Invalid description."
        );
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("work\n").unwrap(), Category::Work);
        assert_eq!(
            parse_category("Chores"),
            Err(InputError::Category("Chores".to_string()))
        );
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("True").unwrap(), Priority::High);
        assert_eq!(parse_priority("false").unwrap(), Priority::Normal);
        assert!(parse_priority("1").is_err());
        assert!(parse_priority("").is_err());
    }

    #[test]
    fn test_parse_task_id() {
        assert_eq!(parse_task_id(" 42 ").unwrap(), Some(TaskId(42)));
        assert_eq!(parse_task_id("abc"), Err(InputError::TaskId("abc".to_string())));
        assert_eq!(parse_task_id("1.5"), Err(InputError::TaskId("1.5".to_string())));
        assert_eq!(parse_task_id("").unwrap_err().to_string(), "Invalid ID.");
    }

    #[test]
    fn test_parse_negative_task_id() {
        assert_eq!(parse_task_id("-1").unwrap(), None);
        assert_eq!(parse_task_id("18446744073709551615").unwrap(), Some(TaskId(u64::MAX)));
        assert_eq!(parse_task_id("18446744073709551616").unwrap(), None);
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"Gym".to_vec()).unwrap(), "Gym");
        assert_eq!(decode_line(vec![0xff, 0xfe]), Err(InputError::Encoding));
    }
}
