use replies::*;

use crate::{
    accounts::ScoreRecord,
    content::{self, Feature},
    parser::USAGE,
    report,
    routine::{self, RoutineScore, Section},
    scoring::{SkinType, FORM_FIELDS},
};

impl From<&ScoreRecord> for ObservedRecord {
    fn from(value: &ScoreRecord) -> Self {
        Self {
            date: value.date.format("%Y-%m-%d").to_string(),
            score: value.score,
            future_score: value.future_score,
        }
    }
}

impl From<RoutineScore> for RoutineReply {
    fn from(value: RoutineScore) -> Self {
        Self {
            score: value.score,
            positive: value.verdict == routine::Verdict::Positive,
            message: value.verdict.message().to_owned(),
        }
    }
}

pub fn observe_history(history: &[ScoreRecord]) -> Vec<ObservedRecord> {
    history.iter().map(ObservedRecord::from).collect()
}

pub fn score_reply(record: &ScoreRecord, history: &[ScoreRecord], points: i64) -> ScoreReply {
    ScoreReply {
        score: record.score,
        future_score: record.future_score,
        recommendations: content::RECOMMENDATIONS
            .iter()
            .map(|r| r.to_string())
            .collect(),
        products: content::PRODUCT_SUGGESTIONS
            .iter()
            .map(|p| ProductLink {
                label: p.label.to_owned(),
                url: p.url.to_owned(),
            })
            .collect(),
        history: observe_history(history),
        points,
    }
}

pub fn report_reply(record: &ScoreRecord) -> ReportReply {
    ReportReply {
        file_name: report::REPORT_FILE_NAME.to_owned(),
        content_type: report::REPORT_CONTENT_TYPE.to_owned(),
        text: report::render_report(record),
    }
}

pub fn daily_tips() -> TipsReply {
    TipsReply {
        title: "Daily Skincare Tips".to_owned(),
        marker: "✅".to_owned(),
        tips: content::DAILY_TIPS.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn numbered_tips() -> TipsReply {
    TipsReply {
        title: "25 Skincare Tips".to_owned(),
        marker: "✨".to_owned(),
        tips: content::NUMBERED_TIPS.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn questions() -> QuestionsReply {
    QuestionsReply {
        questions: content::faq_questions().map(|q| q.to_owned()).collect(),
    }
}

pub fn checklists() -> ChecklistsReply {
    ChecklistsReply {
        instructions: routine::INSTRUCTIONS.to_owned(),
        checklists: Section::ALL
            .iter()
            .map(|section| ObservedChecklist {
                section: section.name().to_owned(),
                title: section.title(),
                items: section.items().iter().map(|i| i.to_string()).collect(),
            })
            .collect(),
    }
}

pub fn advice() -> AdviceReply {
    AdviceReply {
        title: content::ADVICE_TITLE.to_owned(),
        text: content::PERSONALIZED_ADVICE.to_owned(),
    }
}

pub fn coming_soon(feature: Feature) -> ComingSoonReply {
    ComingSoonReply {
        feature: feature.title().to_owned(),
    }
}

pub fn menu() -> MenuReply {
    MenuReply {
        entries: content::MENU.iter().map(|e| e.to_string()).collect(),
    }
}

pub fn help() -> HelpReply {
    HelpReply {
        commands: USAGE
            .iter()
            .map(|(usage, description)| Usage {
                usage: usage.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

pub fn analysis_form() -> AnalysisFormReply {
    AnalysisFormReply {
        fields: FORM_FIELDS
            .iter()
            .map(|field| ObservedField {
                name: field.name.to_owned(),
                label: field.label.to_owned(),
                min: field.min,
                max: field.max,
                default: field.default,
                step: field.step,
            })
            .collect(),
        skin_types: SkinType::ALL
            .iter()
            .map(|s| s.label().to_owned())
            .collect(),
    }
}
