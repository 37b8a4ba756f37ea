//! Homework status codes and their localized verdicts.

use serde_json::Value;

use crate::errors::StatusError;

/// Review status reported for a homework record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    #[cfg(test)]
    fn code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Build the notification text for one homework record.
pub fn parse_status(homework: &Value) -> Result<String, StatusError> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(StatusError::MissingField("homework_name"))?;

    let status = match homework.get("status") {
        None | Some(Value::Null) => return Err(StatusError::EmptyStatus),
        Some(Value::String(s)) if s.is_empty() => return Err(StatusError::EmptyStatus),
        Some(Value::String(s)) => HomeworkStatus::from_code(s)
            .ok_or_else(|| StatusError::UnexpectedStatus(s.clone()))?,
        Some(other) => return Err(StatusError::UnexpectedStatus(other.to_string())),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn approved_record_formats_verdict() {
        let msg = parse_status(&json!({"homework_name": "hw1", "status": "approved"})).unwrap();
        assert_eq!(
            msg,
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn every_known_code_round_trips() {
        for st in [
            HomeworkStatus::Approved,
            HomeworkStatus::Reviewing,
            HomeworkStatus::Rejected,
        ] {
            assert_eq!(HomeworkStatus::from_code(st.code()), Some(st));
            let msg =
                parse_status(&json!({"homework_name": "x", "status": st.code()})).unwrap();
            assert!(msg.ends_with(st.verdict()));
        }
    }

    #[test]
    fn unknown_status_is_an_error() {
        assert_eq!(
            parse_status(&json!({"homework_name": "hw1", "status": "archived"})).unwrap_err(),
            StatusError::UnexpectedStatus("archived".to_string())
        );
        assert_eq!(
            parse_status(&json!({"homework_name": "hw1", "status": 3})).unwrap_err(),
            StatusError::UnexpectedStatus("3".to_string())
        );
    }

    #[test]
    fn missing_name_and_empty_status_are_distinct() {
        assert_eq!(
            parse_status(&json!({"status": "approved"})).unwrap_err(),
            StatusError::MissingField("homework_name")
        );
        assert_eq!(
            parse_status(&json!({"homework_name": "", "status": "approved"})).unwrap_err(),
            StatusError::MissingField("homework_name")
        );
        assert_eq!(
            parse_status(&json!({"homework_name": "hw1"})).unwrap_err(),
            StatusError::EmptyStatus
        );
        assert_eq!(
            parse_status(&json!({"homework_name": "hw1", "status": ""})).unwrap_err(),
            StatusError::EmptyStatus
        );
    }
}
