use crate::accounts::ScoreRecord;

/// Offered as a PDF even though the body is plain text.
pub const REPORT_FILE_NAME: &str = "skin_report.pdf";
pub const REPORT_CONTENT_TYPE: &str = "application/pdf";

pub fn render_report(record: &ScoreRecord) -> String {
    format!(
        "Skin Report\nDate: {}\nCurrent Score: {:?}\nFuture Score: {:?}",
        record.date.format("%Y-%m-%d"),
        record.score,
        record.future_score
    )
}

pub fn report_bytes(record: &ScoreRecord) -> Vec<u8> {
    render_report(record).into_bytes()
}
