use serde::{Deserialize, Serialize};

/// Club wide numbers shown to trainers and admins.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_members: u32,
    pub active_members: u32,
    /// Percent.
    pub attendance_rate: u32,
    pub upcoming_payments: u32,
    pub groups: Vec<GroupStats>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub name: String,
    pub member_count: u32,
    pub attendance_rate: u32,
    pub trainer: String,
}
