use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    #[serde(rename = "isCorrect", default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// Correctness of the option at `idx`, or `None` when there is no such option.
    pub fn is_correct_option(&self, idx: usize) -> Option<bool> {
        self.options.get(idx).map(|o| o.is_correct)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }

    /// One point per question.
    pub fn max_score(&self) -> u32 {
        self.questions.len() as u32
    }
}

/// Outcome of one completed attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "quizTitle")]
    pub quiz_title: String,
    pub score: u32,
    #[serde(rename = "maxScore")]
    pub max_score: u32,
    #[serde(serialize_with = "serialize_date", deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,
}

fn serialize_date<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Millis(i64),
}

// Older logs may carry epoch milliseconds instead of an RFC 3339 string.
fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawDate::deserialize(deserializer)? {
        RawDate::Text(s) => DateTime::parse_from_rfc3339(&s)
            .map(|d| d.with_timezone(&Utc))
            .map_err(|e| serde::de::Error::custom(format!("invalid date {:?}: {}", s, e))),
        RawDate::Millis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", ms))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_option_lookup() {
        let q = Question::new(
            "Capital of France?",
            vec![
                AnswerOption { text: "Lyon".into(), is_correct: false },
                AnswerOption { text: "Paris".into(), is_correct: true },
            ],
        );
        assert_eq!(q.is_correct_option(0), Some(false));
        assert_eq!(q.is_correct_option(1), Some(true));
        assert_eq!(q.is_correct_option(2), None);
    }

    #[test]
    fn test_history_entry_uses_camel_case_keys() {
        let entry = HistoryEntry {
            quiz_title: "Geo".into(),
            score: 2,
            max_score: 3,
            date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"quizTitle\":\"Geo\""));
        assert!(json.contains("\"maxScore\":3"));
        assert!(json.contains("\"date\":\"2024-05-01T12:30:00.000Z\""));
    }

    #[test]
    fn test_history_entry_accepts_epoch_millis() {
        let json = r#"{"quizTitle":"Geo","score":1,"maxScore":2,"date":1714566600000}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_history_entry_normalizes_offset_to_utc() {
        let json = r#"{"quizTitle":"Geo","score":1,"maxScore":2,"date":"2024-05-01T14:30:00+02:00"}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_history_entry_rejects_garbage_date() {
        let json = r#"{"quizTitle":"Geo","score":1,"maxScore":2,"date":"yesterday"}"#;
        assert!(serde_json::from_str::<HistoryEntry>(json).is_err());
    }
}
