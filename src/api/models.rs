use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawEmailRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sender: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub snippet: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category_pred: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub priority_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cc: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub thread_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_attachment: Option<bool>,
    #[serde(default, deserialize_with = "lenient_attachments")]
    pub attachment_info: Option<Vec<AttachmentInfo>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentInfo {
    pub filename: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Email {
    pub id: String,
    pub from: String,
    pub to: String,
    pub cc: String,
    pub subject: String,
    pub date: String,
    pub snippet: String,
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_score: Option<f64>,
    pub thread_id: String,
    pub has_attachment: bool,
    pub attachments: Vec<AttachmentInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RetrievalParams {
    days: u32,
    max_results: u32,
}

impl RetrievalParams {
    pub fn new(days: u32, max_results: u32) -> AppResult<Self> {
        if days == 0 {
            return Err(AppError::InvalidInput(
                "days must be greater than 0".to_string(),
            ));
        }
        if max_results == 0 {
            return Err(AppError::InvalidInput(
                "max_results must be greater than 0".to_string(),
            ));
        }

        Ok(Self { days, max_results })
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    pub fn with_days(self, days: u32) -> AppResult<Self> {
        Self::new(days, self.max_results)
    }

    pub fn with_max_results(self, max_results: u32) -> AppResult<Self> {
        Self::new(self.days, max_results)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

fn lenient_attachments<'de, D>(deserializer: D) -> Result<Option<Vec<AttachmentInfo>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_fields_are_absent() {
        let raw: RawEmailRecord =
            serde_json::from_str(r#"{"id":"1","category_pred":null}"#).expect("record parses");
        assert_eq!(raw.id.as_deref(), Some("1"));
        assert_eq!(raw.category_pred, None);
        assert_eq!(raw.priority_score, None);
        assert_eq!(raw.to, None);
    }

    #[test]
    fn empty_category_is_kept_distinct_from_null() {
        let raw: RawEmailRecord =
            serde_json::from_str(r#"{"id":"1","category_pred":""}"#).expect("record parses");
        assert_eq!(raw.category_pred.as_deref(), Some(""));
    }

    #[test]
    fn mistyped_fields_are_absorbed() {
        let raw: RawEmailRecord = serde_json::from_str(
            r#"{"id":42,"sender":["x"],"priority_score":"high","has_attachment":"yes","attachment_info":7}"#,
        )
        .expect("record parses");
        assert_eq!(raw.id.as_deref(), Some("42"));
        assert_eq!(raw.sender, None);
        assert_eq!(raw.priority_score, None);
        assert_eq!(raw.has_attachment, None);
        assert_eq!(raw.attachment_info, None);
    }

    #[test]
    fn rejects_zero_retrieval_params() {
        assert!(RetrievalParams::new(0, 10).is_err());
        assert!(RetrievalParams::new(7, 0).is_err());

        let params = RetrievalParams::new(7, 10).expect("valid params");
        assert_eq!(params.with_days(3).expect("valid").days(), 3);
        assert!(params.with_max_results(0).is_err());
    }
}
