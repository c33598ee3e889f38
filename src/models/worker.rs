use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Worker {
    pub id: i64,
    pub org_id: i64,
    pub name: String,
    pub role: Role,
    /// Current hourly rate. Attendance entries snapshot the rate at insert
    /// time, so changing this never rewrites historical wages.
    pub hourly_rate: f64,
    /// Archive flag; archived workers keep their history.
    pub active: bool,
    pub fixed_job_title: Option<String>,
    pub wage_visible: bool,
}
