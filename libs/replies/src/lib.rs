use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use macros::ToJson;

pub trait ToJson: std::fmt::Debug {
    fn to_tagged_json(&self) -> Result<Value, serde_json::Error>;
}

pub trait Reply: ToJson {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub enum SimpleReply {
    NotFound,
    What,
    LoggedOut,
}

impl Reply for SimpleReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReply {
    pub message: String,
}

impl ErrorReply {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Reply for ErrorReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeReply {
    pub username: String,
    pub points: i64,
}

impl Reply for WelcomeReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredReply {
    pub username: String,
}

impl Reply for RegisteredReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObservedRecord {
    pub date: String,
    pub score: f64,
    pub future_score: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReply {
    pub score: f64,
    pub future_score: f64,
    pub recommendations: Vec<String>,
    pub products: Vec<ProductLink>,
    pub history: Vec<ObservedRecord>,
    pub points: i64,
}

impl Reply for ScoreReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct HistoryReply {
    pub username: String,
    pub records: Vec<ObservedRecord>,
}

impl Reply for HistoryReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct PointsReply {
    pub points: i64,
}

impl Reply for PointsReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct ReportReply {
    pub file_name: String,
    pub content_type: String,
    pub text: String,
}

impl Reply for ReportReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct TipsReply {
    pub title: String,
    pub marker: String,
    pub tips: Vec<String>,
}

impl Reply for TipsReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsReply {
    pub questions: Vec<String>,
}

impl Reply for QuestionsReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct AnswerReply {
    pub question: String,
    pub answer: String,
}

impl Reply for AnswerReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ObservedChecklist {
    pub section: String,
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistsReply {
    pub instructions: String,
    pub checklists: Vec<ObservedChecklist>,
}

impl Reply for ChecklistsReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct RoutineReply {
    pub score: i32,
    pub positive: bool,
    pub message: String,
}

impl Reply for RoutineReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct AdviceReply {
    pub title: String,
    pub text: String,
}

impl Reply for AdviceReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct ComingSoonReply {
    pub feature: String,
}

impl Reply for ComingSoonReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct MenuReply {
    pub entries: Vec<String>,
}

impl Reply for MenuReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObservedField {
    pub name: String,
    pub label: String,
    pub min: f64,
    pub max: Option<f64>,
    pub default: f64,
    pub step: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisFormReply {
    pub fields: Vec<ObservedField>,
    pub skin_types: Vec<String>,
}

impl Reply for AnalysisFormReply {}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub usage: String,
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToJson)]
#[serde(rename_all = "camelCase")]
pub struct HelpReply {
    pub commands: Vec<Usage>,
}

impl Reply for HelpReply {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    pub fn test_to_json_tags_simple_reply() {
        assert_eq!(
            SimpleReply::NotFound
                .to_tagged_json()
                .expect("ToJson failed"),
            json!({ "simpleReply": "notFound" })
        );
    }

    #[test]
    pub fn test_to_json_tags_struct_with_camel_case_fields() {
        let reply = ScoreReply {
            score: 38.0,
            future_score: 48.0,
            recommendations: vec!["Use sunscreen".to_owned()],
            products: vec![],
            history: vec![ObservedRecord {
                date: "2026-10-19".to_owned(),
                score: 38.0,
                future_score: 48.0,
            }],
            points: 10,
        };

        assert_eq!(
            reply.to_tagged_json().expect("ToJson failed"),
            json!({
                "scoreReply": {
                    "score": 38.0,
                    "futureScore": 48.0,
                    "recommendations": ["Use sunscreen"],
                    "products": [],
                    "history": [
                        { "date": "2026-10-19", "score": 38.0, "futureScore": 48.0 }
                    ],
                    "points": 10
                }
            })
        );
    }
}
