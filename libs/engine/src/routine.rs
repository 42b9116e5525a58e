use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, str::FromStr};

use crate::DashboardError;

pub const POSITIVE_THRESHOLD: i32 = 50;

pub const INSTRUCTIONS: &str =
    "Follow the routines and diet daily. Each Yes = +5 points, No = -5 points.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Morning,
    Night,
    Diet,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Morning, Section::Night, Section::Diet];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Morning => "Morning",
            Section::Night => "Night",
            Section::Diet => "Diet",
        }
    }

    pub fn title(&self) -> String {
        format!("{} Routine", self.name())
    }

    pub fn items(&self) -> &'static [&'static str] {
        match self {
            Section::Morning => &["Cleansing", "Toning", "Serum", "Moisturizer", "Sunscreen"],
            Section::Night => &[
                "Makeup Removed",
                "Cleanse & Tone",
                "Night Serum",
                "Eye Cream",
                "Night Cream/Mask",
            ],
            Section::Diet => &[
                "Fruits/Vegetables",
                "Healthy Fats",
                "Whole Grains/Legumes",
                "Water",
                "Green Tea",
            ],
        }
    }

    fn find_item(&self, item: &str) -> Option<&'static str> {
        self.items()
            .iter()
            .copied()
            .find(|candidate| candidate.eq_ignore_ascii_case(item))
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown section '{0}'")]
pub struct UnknownSection(String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

/// Items nobody answered count as `Yes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Answer {
    #[default]
    Yes,
    No,
}

impl Answer {
    pub fn points(&self) -> i32 {
        match self {
            Answer::Yes => 5,
            Answer::No => -5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoutineAnswers {
    answers: BTreeMap<(Section, &'static str), Answer>,
}

impl RoutineAnswers {
    pub fn all(answer: Answer) -> Self {
        let mut answers = Self::default();
        for section in Section::ALL {
            for item in section.items() {
                answers.answers.insert((section, *item), answer);
            }
        }
        answers
    }

    /// Item names are matched ignoring case against the fixed checklists.
    pub fn answer(
        &mut self,
        section: Section,
        item: &str,
        answer: Answer,
    ) -> Result<&mut Self, DashboardError> {
        let item = section
            .find_item(item)
            .ok_or_else(|| DashboardError::UnknownChecklistItem(section, item.to_owned()))?;

        self.answers.insert((section, item), answer);

        Ok(self)
    }

    pub fn get(&self, section: Section, item: &str) -> Answer {
        section
            .find_item(item)
            .and_then(|item| self.answers.get(&(section, item)).copied())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    Positive,
    Corrective,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Positive => "Great job! You're following a healthy routine.",
            Verdict::Corrective => "Try to follow more steps for better skin health.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutineScore {
    pub score: i32,
    pub verdict: Verdict,
}

pub fn evaluate(answers: &RoutineAnswers) -> RoutineScore {
    let score: i32 = Section::ALL
        .iter()
        .flat_map(|section| {
            section
                .items()
                .iter()
                .map(move |item| answers.get(*section, item))
        })
        .map(|answer| answer.points())
        .sum();

    let verdict = if score >= POSITIVE_THRESHOLD {
        Verdict::Positive
    } else {
        Verdict::Corrective
    };

    RoutineScore { score, verdict }
}
