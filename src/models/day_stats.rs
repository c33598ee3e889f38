use crate::models::diary::DiaryStatus;

/// Per-day rollup used only to decorate calendar cells and day previews.
#[derive(Debug, Default, Clone)]
pub struct DayStats {
    /// True when the day has a diary record or at least one attendance log
    /// with a non-empty description.
    pub has_record: bool,
    pub status: Option<DiaryStatus>,
    pub total_hours: f64,
    pub work_lines: Vec<String>,
}
