use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const EXERCISE_THRESHOLD_DAYS: i32 = 3;
pub const FUTURE_BONUS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SkinType {
    #[default]
    Normal,
    Dry,
    Oily,
    Combination,
    Sensitive,
}

impl SkinType {
    pub const ALL: [SkinType; 5] = [
        SkinType::Normal,
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Combination,
        SkinType::Sensitive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkinType::Normal => "Normal",
            SkinType::Dry => "Dry",
            SkinType::Oily => "Oily",
            SkinType::Combination => "Combination",
            SkinType::Sensitive => "Sensitive",
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown skin type '{0}'")]
pub struct UnknownSkinType(String);

impl FromStr for SkinType {
    type Err = UnknownSkinType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|skin_type| skin_type.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSkinType(s.to_owned()))
    }
}

/// Everything the analysis form collects. Only sleep, water, stress, diet and
/// exercise contribute to the score; the rest is gathered and ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifestyleInputs {
    pub sleep_hours: i32,
    pub water_litres: f64,
    pub stress_level: i32,
    pub diet_quality: i32,
    pub exercise_days: i32,
    pub screen_time: i32,
    pub pollution: i32,
    pub skin_type: SkinType,
}

impl Default for LifestyleInputs {
    fn default() -> Self {
        Self {
            sleep_hours: SLEEP_HOURS.default as i32,
            water_litres: WATER_LITRES.default,
            stress_level: STRESS_LEVEL.default as i32,
            diet_quality: DIET_QUALITY.default as i32,
            exercise_days: EXERCISE_DAYS.default as i32,
            screen_time: SCREEN_TIME.default as i32,
            pollution: POLLUTION.default as i32,
            skin_type: SkinType::default(),
        }
    }
}

impl LifestyleInputs {
    pub fn score(&self) -> Score {
        compute_score(
            self.sleep_hours,
            self.water_litres,
            self.stress_level,
            self.diet_quality,
            self.exercise_days,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub current: f64,
    pub future: f64,
}

/// Inputs are never clamped, anything outside the suggested ranges flows
/// straight through the formula.
pub fn compute_score(
    sleep_hours: i32,
    water_litres: f64,
    stress_level: i32,
    diet_quality: i32,
    exercise_days: i32,
) -> Score {
    let current = (f64::from(sleep_hours)
        + water_litres
        + f64::from(diet_quality)
        + (10.0 - f64::from(stress_level)))
        * 2.0;

    let future = if exercise_days > EXERCISE_THRESHOLD_DAYS {
        current + FUTURE_BONUS
    } else {
        current
    };

    Score { current, future }
}

/// How a form should present one input. Purely advisory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestedRange {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: Option<f64>,
    pub default: f64,
    pub step: f64,
}

pub const SLEEP_HOURS: SuggestedRange = SuggestedRange {
    name: "sleepHours",
    label: "Sleep Hours",
    min: 0.0,
    max: Some(12.0),
    default: 7.0,
    step: 1.0,
};

pub const WATER_LITRES: SuggestedRange = SuggestedRange {
    name: "waterLitres",
    label: "Water Intake (Litres/day)",
    min: 0.0,
    max: None,
    default: 0.0,
    step: 0.1,
};

pub const STRESS_LEVEL: SuggestedRange = SuggestedRange {
    name: "stressLevel",
    label: "Stress Level (1-10)",
    min: 1.0,
    max: Some(10.0),
    default: 5.0,
    step: 1.0,
};

pub const DIET_QUALITY: SuggestedRange = SuggestedRange {
    name: "dietQuality",
    label: "Diet Quality (1-10)",
    min: 1.0,
    max: Some(10.0),
    default: 5.0,
    step: 1.0,
};

pub const EXERCISE_DAYS: SuggestedRange = SuggestedRange {
    name: "exerciseDays",
    label: "Exercise Frequency (days/week)",
    min: 0.0,
    max: Some(7.0),
    default: 3.0,
    step: 1.0,
};

pub const SCREEN_TIME: SuggestedRange = SuggestedRange {
    name: "screenTime",
    label: "Screen Time (hours/day)",
    min: 0.0,
    max: Some(24.0),
    default: 5.0,
    step: 1.0,
};

pub const POLLUTION: SuggestedRange = SuggestedRange {
    name: "pollution",
    label: "Pollution Exposure (1-10)",
    min: 1.0,
    max: Some(10.0),
    default: 5.0,
    step: 1.0,
};

pub const FORM_FIELDS: [SuggestedRange; 7] = [
    SLEEP_HOURS,
    WATER_LITRES,
    STRESS_LEVEL,
    DIET_QUALITY,
    EXERCISE_DAYS,
    SCREEN_TIME,
    POLLUTION,
];
