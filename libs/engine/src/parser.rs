use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while1},
    character::complete::{alpha1, char, digit1},
    combinator::{all_consuming, map, map_opt, map_res, opt, recognize, value, verify},
    multi::many0,
    number::complete::double,
    sequence::{pair, preceded, separated_pair, tuple},
    IResult,
};

use crate::{
    actions::Action,
    content::Feature,
    routine::{Answer, RoutineAnswers, Section},
    scoring::{LifestyleInputs, SkinType},
};

pub const USAGE: [(&str, &str); 20] = [
    ("register <username> <password>", "create an account"),
    ("login <username> <password>", "log in"),
    ("logout", "end this session"),
    ("menu", "list every page"),
    ("help", "show this"),
    ("form", "show the analysis inputs and their suggested ranges"),
    (
        "analyze [sleep=N] [water=L] [stress=N] [diet=N] [exercise=N] [screen=N] [pollution=N] [skin=TYPE]",
        "score your habits, omitted inputs use their defaults",
    ),
    ("history", "list your previous scores"),
    ("report", "show the report for your latest score"),
    ("points", "show your points"),
    ("tips", "daily skincare tips"),
    ("tips25", "25 skincare tips"),
    ("faq", "list the questions the chatbot knows"),
    ("ask <question>", "ask the chatbot one of those questions"),
    ("routine", "show the daily routine checklists"),
    (
        "check [SECTION:N=yes|no ...]",
        "score your routine, unanswered items count as yes",
    ),
    ("advice", "hyper-personalized advice"),
    ("feature ar-try-on", "AR try-on"),
    ("feature voice-assistant", "voice assistant"),
    ("feature skin-prediction-ai", "skin prediction AI"),
];

fn spaces(i: &str) -> IResult<&str, &str> {
    take_while1(move |c| " \t".contains(c))(i)
}

fn token(i: &str) -> IResult<&str, &str> {
    take_while1(move |c: char| !c.is_whitespace())(i)
}

fn text_to_end_of_line(i: &str) -> IResult<&str, &str> {
    take_while1(move |_| true)(i)
}

fn signed_number(i: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse)(i)
}

fn unsigned_number(i: &str) -> IResult<&str, usize> {
    map_res(recognize(digit1), str::parse)(i)
}

/// Like `double` but refuses `nan` and `inf`.
fn finite_number(i: &str) -> IResult<&str, f64> {
    verify(double, |v: &f64| v.is_finite())(i)
}

fn credentials(i: &str) -> IResult<&str, (String, String)> {
    map(separated_pair(token, spaces, token), |(u, p): (&str, &str)| {
        (u.to_owned(), p.to_owned())
    })(i)
}

fn register(i: &str) -> IResult<&str, Action> {
    map(
        preceded(pair(tag("register"), spaces), credentials),
        |(username, password)| Action::Register { username, password },
    )(i)
}

fn login(i: &str) -> IResult<&str, Action> {
    map(
        preceded(pair(tag("login"), spaces), credentials),
        |(username, password)| Action::Login { username, password },
    )(i)
}

#[derive(Debug, Clone, Copy)]
enum Setting {
    Sleep(i32),
    Water(f64),
    Stress(i32),
    Diet(i32),
    Exercise(i32),
    Screen(i32),
    Pollution(i32),
    Skin(SkinType),
}

impl Setting {
    fn apply(self, inputs: &mut LifestyleInputs) {
        match self {
            Setting::Sleep(v) => inputs.sleep_hours = v,
            Setting::Water(v) => inputs.water_litres = v,
            Setting::Stress(v) => inputs.stress_level = v,
            Setting::Diet(v) => inputs.diet_quality = v,
            Setting::Exercise(v) => inputs.exercise_days = v,
            Setting::Screen(v) => inputs.screen_time = v,
            Setting::Pollution(v) => inputs.pollution = v,
            Setting::Skin(v) => inputs.skin_type = v,
        }
    }
}

fn setting(i: &str) -> IResult<&str, Setting> {
    alt((
        map(preceded(tag("sleep="), signed_number), Setting::Sleep),
        map(preceded(tag("water="), finite_number), Setting::Water),
        map(preceded(tag("stress="), signed_number), Setting::Stress),
        map(preceded(tag("diet="), signed_number), Setting::Diet),
        map(preceded(tag("exercise="), signed_number), Setting::Exercise),
        map(preceded(tag("screen="), signed_number), Setting::Screen),
        map(preceded(tag("pollution="), signed_number), Setting::Pollution),
        map(
            preceded(tag("skin="), map_res(alpha1, str::parse::<SkinType>)),
            Setting::Skin,
        ),
    ))(i)
}

fn analyze(i: &str) -> IResult<&str, Action> {
    map(
        preceded(tag("analyze"), many0(preceded(spaces, setting))),
        |settings| {
            let mut inputs = LifestyleInputs::default();
            for setting in settings {
                setting.apply(&mut inputs);
            }
            Action::Analyze(inputs)
        },
    )(i)
}

fn answer(i: &str) -> IResult<&str, Answer> {
    alt((
        value(Answer::Yes, tag_no_case("yes")),
        value(Answer::No, tag_no_case("no")),
    ))(i)
}

/// `morning:3=no` answers the third morning item. Items are numbered from 1.
fn checklist_answer(i: &str) -> IResult<&str, (Section, &'static str, Answer)> {
    map_opt(
        tuple((
            map_res(alpha1, str::parse::<Section>),
            char(':'),
            unsigned_number,
            char('='),
            answer,
        )),
        |(section, _, number, _, answer)| {
            let item = section.items().get(number.checked_sub(1)?)?;
            Some((section, *item, answer))
        },
    )(i)
}

fn check(i: &str) -> IResult<&str, Action> {
    map_opt(
        preceded(tag("check"), many0(preceded(spaces, checklist_answer))),
        |answered| {
            let mut answers = RoutineAnswers::default();
            for (section, item, answer) in answered {
                answers.answer(section, item, answer).ok()?;
            }
            Some(Action::CheckRoutine(answers))
        },
    )(i)
}

fn ask(i: &str) -> IResult<&str, Action> {
    map(
        preceded(pair(tag("ask"), spaces), text_to_end_of_line),
        |question| Action::Ask(question.to_owned()),
    )(i)
}

fn feature(i: &str) -> IResult<&str, Action> {
    map(
        preceded(
            pair(tag("feature"), spaces),
            map_res(token, str::parse::<Feature>),
        ),
        Action::ComingSoon,
    )(i)
}

fn keyword(i: &str) -> IResult<&str, Action> {
    alt((
        value(Action::Logout, tag("logout")),
        value(Action::Menu, tag("menu")),
        value(Action::Help, tag("help")),
        value(Action::AnalysisForm, tag("form")),
        value(Action::History, tag("history")),
        value(Action::Report, tag("report")),
        value(Action::Points, tag("points")),
        value(Action::NumberedTips, tag("tips25")),
        value(Action::DailyTips, tag("tips")),
        value(Action::Questions, tag("faq")),
        value(Action::Checklists, tag("routine")),
        value(Action::Advice, tag("advice")),
    ))(i)
}

/// Returns `None` for anything that isn't a well formed command.
pub fn parse_action(i: &str) -> Option<Action> {
    all_consuming(alt((
        register, login, analyze, check, ask, feature, keyword,
    )))(i.trim())
    .ok()
    .map(|(_, action)| action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::{evaluate, Verdict};

    #[test]
    fn it_parses_credentials() {
        assert!(matches!(
            parse_action("register jacob hunter2"),
            Some(Action::Register { username, password }) if username == "jacob" && password == "hunter2"
        ));
        assert!(matches!(
            parse_action("  login jacob hunter2 "),
            Some(Action::Login { username, password }) if username == "jacob" && password == "hunter2"
        ));
        assert!(parse_action("login jacob").is_none());
    }

    #[test]
    fn it_parses_analyze_with_defaults() {
        let Some(Action::Analyze(inputs)) = parse_action("analyze") else {
            panic!("expected analyze");
        };

        assert_eq!(inputs, LifestyleInputs::default());
    }

    #[test]
    fn it_parses_analyze_settings() {
        let Some(Action::Analyze(inputs)) =
            parse_action("analyze sleep=7 water=2.5 stress=5 diet=5 exercise=4 screen=9 pollution=2 skin=oily")
        else {
            panic!("expected analyze");
        };

        assert_eq!(inputs.sleep_hours, 7);
        assert_eq!(inputs.water_litres, 2.5);
        assert_eq!(inputs.exercise_days, 4);
        assert_eq!(inputs.screen_time, 9);
        assert_eq!(inputs.pollution, 2);
        assert_eq!(inputs.skin_type, SkinType::Oily);
    }

    #[test]
    fn it_parses_negative_inputs() {
        let Some(Action::Analyze(inputs)) = parse_action("analyze water=-1.5 sleep=-2") else {
            panic!("expected analyze");
        };

        assert_eq!(inputs.water_litres, -1.5);
        assert_eq!(inputs.sleep_hours, -2);
    }

    #[test]
    fn it_refuses_water_that_is_not_a_finite_number() {
        assert!(parse_action("analyze water=nan").is_none());
        assert!(parse_action("analyze water=NaN").is_none());
        assert!(parse_action("analyze water=inf").is_none());
        assert!(parse_action("analyze water=-infinity").is_none());
        assert!(matches!(parse_action("analyze water=1e1"), Some(Action::Analyze(inputs)) if inputs.water_litres == 10.0));
    }

    #[test]
    fn it_refuses_unknown_settings() {
        assert!(parse_action("analyze mood=3").is_none());
        assert!(parse_action("analyze skin=scaly").is_none());
    }

    #[test]
    fn it_parses_checklist_answers() {
        let Some(Action::CheckRoutine(answers)) = parse_action("check morning:5=no Diet:1=No night:2=yes")
        else {
            panic!("expected check");
        };

        assert_eq!(answers.get(Section::Morning, "Sunscreen"), Answer::No);
        assert_eq!(answers.get(Section::Diet, "Fruits/Vegetables"), Answer::No);
        assert_eq!(answers.get(Section::Night, "Cleanse & Tone"), Answer::Yes);

        let score = evaluate(&answers);
        assert_eq!(score.score, 55);
        assert_eq!(score.verdict, Verdict::Positive);
    }

    #[test]
    fn it_refuses_checklist_items_out_of_range() {
        assert!(parse_action("check morning:0=no").is_none());
        assert!(parse_action("check morning:6=no").is_none());
        assert!(parse_action("check brunch:1=no").is_none());
    }

    #[test]
    fn it_parses_questions_to_end_of_line() {
        assert!(matches!(
            parse_action("ask How much water should I drink?"),
            Some(Action::Ask(question)) if question == "How much water should I drink?"
        ));
    }

    #[test]
    fn it_parses_keywords() {
        assert!(matches!(parse_action("tips"), Some(Action::DailyTips)));
        assert!(matches!(parse_action("tips25"), Some(Action::NumberedTips)));
        assert!(matches!(parse_action("routine"), Some(Action::Checklists)));
        assert!(matches!(
            parse_action("feature voice-assistant"),
            Some(Action::ComingSoon(Feature::VoiceAssistant))
        ));
        assert!(parse_action("dance").is_none());
        assert!(parse_action("").is_none());
    }
}
