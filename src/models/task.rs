use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaskStatus {
    Todo,
    Done,
}

impl TaskStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Done => "done",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(TaskStatus::Todo),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

/// A scheduled unit of work. `priority` is a real column, never a token
/// smuggled through the title text.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub org_id: i64,
    pub site_id: Option<i64>,
    pub worker_id: Option<i64>,
    pub date: NaiveDate,
    pub title: String,
    pub category: String,
    pub status: TaskStatus,
    pub priority: bool,
}
