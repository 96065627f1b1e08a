//! Homework review statuses.

/// Review status of a homework, as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Maps an API status code; `None` for undocumented codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Human readable verdict sent to the chat.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(
            HomeworkStatus::from_code("approved"),
            Some(HomeworkStatus::Approved)
        );
        assert_eq!(
            HomeworkStatus::from_code("reviewing"),
            Some(HomeworkStatus::Reviewing)
        );
        assert_eq!(
            HomeworkStatus::from_code("rejected"),
            Some(HomeworkStatus::Rejected)
        );
        assert_eq!(HomeworkStatus::from_code("in_review"), None);
        assert_eq!(HomeworkStatus::from_code("Approved"), None);
    }
}
