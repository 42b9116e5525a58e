use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DAILY_TIPS: [&str; 20] = [
    "Cleanse daily: Wash your face twice a day.",
    "Moisturize regularly.",
    "Use sunscreen daily.",
    "Exfoliate once a week.",
    "Use eye cream for delicate skin.",
    "Stay hydrated, drink 3-4L water.",
    "Eat a balanced diet.",
    "Get enough sleep.",
    "Manage stress daily.",
    "Exercise regularly.",
    "Avoid harsh scrubbing.",
    "Use non-comedogenic moisturizers.",
    "Wash pillowcases regularly.",
    "Clean makeup tools weekly.",
    "Check skin regularly.",
    "Consult dermatologist if needed.",
    "Increase indoor humidity in winters.",
    "Don't smoke.",
    "Extend care to neck area.",
    "Layer serums for best results.",
];

pub const NUMBERED_TIPS: [&str; 25] = [
    "Cleanse Properly",
    "Exfoliate Regularly",
    "Moisturize Daily",
    "Use Sunscreen",
    "Remove Makeup Before Sleeping",
    "Eat a Healthy Diet",
    "Stay Hydrated",
    "Prioritize Sleep",
    "Reduce Stress",
    "Avoid Smoking",
    "Know Your Skin Type",
    "Use Gentle Products",
    "Use Vitamin C Serum",
    "Incorporate Retinol",
    "Protect from Pollution",
    "Be Gentle When Washing",
    "Pat Dry Gently",
    "Don't Pop Pimples",
    "Care for Body Skin",
    "Use Alcohol-free Toner",
    "Try 7-Skin Method",
    "Double Cleanse at Night",
    "Use Topical Treatments",
    "Health Screenings",
    "Professional Advice if Needed",
];

/// Question and answer pairs, in the order they're offered.
pub const FAQ: [(&str, &str); 10] = [
    (
        "Best routine for oily skin?",
        "Use gentle cleanser, oil-free moisturizer, sunscreen.",
    ),
    (
        "How to reduce acne?",
        "Cleanse twice, avoid oily food, use salicylic acid products.",
    ),
    (
        "Best anti-aging cream?",
        "Look for retinol or peptides-based creams.",
    ),
    ("How much water should I drink?", "3-4 liters daily."),
    ("Is sunscreen important?", "Yes, use SPF 30+ daily."),
    (
        "How to get glowing skin?",
        "Hydration + Vitamin C serum + Sleep.",
    ),
    (
        "Reduce dark circles?",
        "Sleep well + use eye cream + reduce screen time.",
    ),
    ("Best diet for skin?", "Fruits, vegetables, omega-3, nuts."),
    (
        "Why moisturize oily skin?",
        "Even oily skin needs hydration to balance sebum.",
    ),
    ("Is exfoliation needed?", "Yes, 1-2 times a week only."),
];

pub fn faq_questions() -> impl Iterator<Item = &'static str> {
    FAQ.iter().map(|(question, _)| *question)
}

/// Exact match only.
pub fn faq_answer(question: &str) -> Option<&'static str> {
    FAQ.iter()
        .find(|(candidate, _)| *candidate == question)
        .map(|(_, answer)| *answer)
}

pub const RECOMMENDATIONS: [&str; 4] = [
    "Drink 2-3 liters water daily",
    "Maintain 7-8 hours of sleep",
    "Reduce stress via meditation",
    "Use sunscreen to reduce pollution effects",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSuggestion {
    pub label: &'static str,
    pub url: &'static str,
}

pub const PRODUCT_SUGGESTIONS: [ProductSuggestion; 2] = [
    ProductSuggestion {
        label: "Moisturizer - Amazon",
        url: "https://amazon.in",
    },
    ProductSuggestion {
        label: "Sunscreen - Amazon",
        url: "https://amazon.in",
    },
];

pub const ADVICE_TITLE: &str = "Hyper-Personalized Advice";

pub const PERSONALIZED_ADVICE: &str = "\
The future of skincare likely involves hyper-personalized plans analyzing diet, sleep, and stress \
using advanced technology to identify root causes and tailor treatments for optimal skin health.

How it works:
1. Data Collection: You would provide data through surveys, wearables, and potentially genetic \
information about your diet, sleep patterns, and stress levels.
2. AI Analysis: Advanced artificial intelligence (AI) and machine learning algorithms would \
analyze this vast amount of data.
3. Pattern Identification: The AI would identify correlations and patterns between your diet, \
sleep quality, stress, and your skin's current state, such as acne, dryness, or sensitivity.
4. Personalized Skincare Recommendations: Based on these insights, you would receive a \
hyper-personalized skincare plan, including product recommendations and advice on lifestyle \
adjustments.

Benefits:
Proactive Approach: It shifts skincare from reactive to proactive, addressing potential issues \
before they become significant problems.
Holistic View: It acknowledges that skin health is intertwined with overall well-being, not just \
topical treatments.
Increased Efficacy: Tailoring advice to your unique biological and lifestyle factors is expected \
to result in more effective skincare outcomes.

Examples of what it could look like:
Diet: If your data reveals a correlation between high sugar intake and increased breakouts, your \
plan might recommend reducing sugar or incorporating certain antioxidants.
Sleep: Poor sleep might be linked to increased inflammation, leading to specific product \
suggestions or advice on improving sleep hygiene.
Stress: High stress levels could trigger eczema or other skin conditions, prompting \
recommendations for calming ingredients in your skincare or stress-reduction techniques.";

/// Announced in the menu, not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    ArTryOn,
    VoiceAssistant,
    SkinPredictionAi,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::ArTryOn,
        Feature::VoiceAssistant,
        Feature::SkinPredictionAi,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Feature::ArTryOn => "ar-try-on",
            Feature::VoiceAssistant => "voice-assistant",
            Feature::SkinPredictionAi => "skin-prediction-ai",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Feature::ArTryOn => "AR Try-On",
            Feature::VoiceAssistant => "Voice Assistant",
            Feature::SkinPredictionAi => "Skin Prediction AI",
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown feature '{0}'")]
pub struct UnknownFeature(String);

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.slug() == s)
            .ok_or_else(|| UnknownFeature(s.to_owned()))
    }
}

pub const LOGIN_MENU_ENTRY: &str = "Login / Register";

pub const MENU: [&str; 11] = [
    LOGIN_MENU_ENTRY,
    "Skincare Pro Analyzer",
    "Daily Skincare Tips",
    "AI Skincare Chatbot",
    "AR Try-On",
    "Voice Assistant",
    "Skin Prediction AI",
    "Skincare Gamification",
    "Hyper-Personalized Advice",
    "25 Skincare Tips",
    "Daily Routine AI Checker",
];
