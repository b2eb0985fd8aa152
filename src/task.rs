use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format used both for typing a due date and for showing it.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    #[serde(with = "typed_date")]
    pub due_date: NaiveDate,
}

impl Task {
    pub fn new(name: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            due_date,
        }
    }

    /// Due strictly before `today`. A task due today is not late.
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }

    pub fn due_date_label(&self) -> String {
        self.due_date.format(DATE_FORMAT).to_string()
    }
}

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Serializes due dates the way they are typed and shown.
mod typed_date {
    use super::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn past_due_is_strictly_before_today() {
        let today = date(2023, 6, 15);
        assert!(Task::new("a", date(2023, 6, 14)).is_past_due(today));
        assert!(!Task::new("a", date(2023, 6, 15)).is_past_due(today));
        assert!(!Task::new("a", date(2024, 1, 1)).is_past_due(today));
    }

    #[test]
    fn label_matches_typed_format() {
        let task = Task::new("History Test", parse_date("01/01/2023").unwrap());
        assert_eq!(task.due_date_label(), "01/01/2023");
    }

    #[test]
    fn rejects_other_date_shapes() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2023-01-01"), None);
        assert_eq!(parse_date("13/01/2023"), None);
        assert_eq!(parse_date(" 02/28/2022 "), Some(date(2022, 2, 28)));
    }

    #[test]
    fn json_due_date_uses_typed_format() {
        let task = Task::new("History Test", date(2023, 1, 1));
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"name":"History Test","due_date":"01/01/2023"}"#);
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
