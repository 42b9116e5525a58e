use std::collections::HashMap;

/// Awarded for every analysis, regardless of the score.
pub const ANALYSIS_POINTS: i64 = 10;

/// Points are tallied per account and live as long as the process, so
/// registering a username again keeps whatever it had earned.
#[derive(Debug, Default)]
pub struct PointsLedger {
    points: HashMap<String, i64>,
}

impl PointsLedger {
    pub fn award(&mut self, username: &str, amount: i64) -> i64 {
        let total = self.points.entry(username.to_owned()).or_default();
        *total += amount;
        *total
    }

    pub fn points(&self, username: &str) -> i64 {
        self.points.get(username).copied().unwrap_or_default()
    }
}
