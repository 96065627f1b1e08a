use serde_json::{Map, Value};

use crate::error::HomeworkError;
use crate::types::HomeworkStatus;

/// Builds the status-changed message for the latest homework.
///
/// Takes the whole `homeworks` list and reads its first element. A single
/// homework object is accepted as well.
pub fn parse_status(homeworks: &Value) -> Result<String, HomeworkError> {
    let homework = match homeworks {
        Value::Array(items) => items.first().ok_or(HomeworkError::EmptyList)?,
        other => other,
    };
    let homework = homework
        .as_object()
        .ok_or(HomeworkError::HomeworkNotADict)?;
    parse_homework(homework)
}

/// Builds the status-changed message for one homework object.
pub fn parse_homework(homework: &Map<String, Value>) -> Result<String, HomeworkError> {
    let name = homework
        .get("homework_name")
        .ok_or(HomeworkError::NoHomeworkName)?;
    let code = homework.get("status").ok_or(HomeworkError::NoStatusKey)?;

    let status = code
        .as_str()
        .and_then(HomeworkStatus::from_code)
        .ok_or_else(|| HomeworkError::UnknownStatus(display(code)))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        display(name),
        status.verdict()
    ))
}

// Strings without their JSON quotes, anything else as JSON.
fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
