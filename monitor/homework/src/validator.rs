use serde_json::Value;

use crate::error::HomeworkError;

/// Checks the shape of an API answer and returns its `homeworks` list.
///
/// Checks run in a fixed order: object, `homeworks` key, `current_date` key,
/// `homeworks` being a list. The list may be empty.
pub fn check_response(response: &Value) -> Result<&Vec<Value>, HomeworkError> {
    let object = response.as_object().ok_or(HomeworkError::NotADict)?;
    let homeworks = object
        .get("homeworks")
        .ok_or(HomeworkError::NoHomeworksKey)?;
    if !object.contains_key("current_date") {
        return Err(HomeworkError::NoCurrentDateKey);
    }
    homeworks.as_array().ok_or(HomeworkError::HomeworksNotAList)
}

/// Reads the `current_date` cursor of an answer that passed `check_response`.
pub fn current_date(response: &Value) -> Result<i64, HomeworkError> {
    response
        .get("current_date")
        .ok_or(HomeworkError::NoCurrentDateKey)?
        .as_i64()
        .ok_or(HomeworkError::CurrentDateNotInteger)
}
