use clients_practicum::PracticumError;
use thiserror::Error;

/// Everything that can go wrong in one poll iteration.
#[derive(Debug, Error)]
pub enum HomeworkError {
    #[error(transparent)]
    Api(#[from] PracticumError),

    #[error("Ответ от API не является словарем!")]
    NotADict,

    #[error("Отсутствует ключ homeworks!")]
    NoHomeworksKey,

    #[error("Отсутствует ключ current_date!")]
    NoCurrentDateKey,

    #[error("Значение ключа homeworks приходит не в виде списка!")]
    HomeworksNotAList,

    #[error("Значение ключа current_date не является целым числом!")]
    CurrentDateNotInteger,

    #[error("Домашняя работа в ответе API не является словарем!")]
    HomeworkNotADict,

    #[error("Отсутствует ключ homework_name!")]
    NoHomeworkName,

    #[error("Отсутствует ключ status!")]
    NoStatusKey,

    #[error("Неожиданное значение ключа status: {0}")]
    UnknownStatus(String),

    #[error("Список домашних работ пуст!")]
    EmptyList,
}

impl HomeworkError {
    /// Short stable name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            HomeworkError::Api(PracticumError::Request(_)) => "api_answer",
            HomeworkError::Api(PracticumError::StatusNotOk { .. }) => "status_code_not_200",
            HomeworkError::Api(PracticumError::Json(_)) => "json_format",
            HomeworkError::NotADict => "not_a_dict",
            HomeworkError::NoHomeworksKey => "no_homeworks_key",
            HomeworkError::NoCurrentDateKey => "no_current_date_key",
            HomeworkError::HomeworksNotAList => "homeworks_not_a_list",
            HomeworkError::CurrentDateNotInteger => "current_date_not_integer",
            HomeworkError::HomeworkNotADict => "homework_not_a_dict",
            HomeworkError::NoHomeworkName => "no_homework_name",
            HomeworkError::NoStatusKey => "no_status_key",
            HomeworkError::UnknownStatus(_) => "unknown_status",
            HomeworkError::EmptyList => "empty_list",
        }
    }
}
