//! Shape validation for homework-status payloads.

use serde_json::Value;

use crate::errors::{json_kind, ResponseError};

/// A validated view over a homework-status payload.
///
/// Only `check_response` builds one, so a latest record always exists.
#[derive(Clone, Copy, Debug)]
pub struct StatusPage<'a> {
    latest: &'a Value,
    current_date: i64,
}

impl<'a> StatusPage<'a> {
    /// The most recent homework record.
    pub fn latest(&self) -> &'a Value {
        self.latest
    }

    /// Server-supplied cursor for the next fetch.
    pub fn current_date(&self) -> i64 {
        self.current_date
    }
}

/// Validate the payload shape. Checks run in a fixed order and the first
/// failure is returned; nothing is coerced or defaulted.
pub fn check_response(payload: &Value) -> Result<StatusPage<'_>, ResponseError> {
    let obj = payload
        .as_object()
        .ok_or(ResponseError::NotAnObject(json_kind(payload)))?;

    let homeworks = obj
        .get("homeworks")
        .ok_or(ResponseError::MissingHomeworks)?;
    let homeworks = homeworks
        .as_array()
        .ok_or(ResponseError::HomeworksNotAList(json_kind(homeworks)))?;

    let current_date = obj
        .get("current_date")
        .ok_or(ResponseError::MissingCurrentDate)?;
    let current_date = current_date
        .as_i64()
        .ok_or(ResponseError::CurrentDateNotInteger(json_kind(current_date)))?;
    if current_date == 0 {
        return Err(ResponseError::ZeroCurrentDate);
    }

    let latest = homeworks.first().ok_or(ResponseError::EmptyHomeworks)?;

    Ok(StatusPage {
        latest,
        current_date,
    })
}
