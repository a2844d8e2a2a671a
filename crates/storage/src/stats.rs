use std::sync::Arc;

use model::stats::{AdminStats, GroupStats};

#[derive(Clone)]
pub struct StatsStore {
    stats: Arc<AdminStats>,
}

impl StatsStore {
    pub fn new(stats: AdminStats) -> Self {
        StatsStore {
            stats: Arc::new(stats),
        }
    }

    pub fn with_fixtures() -> Self {
        StatsStore::new(AdminStats {
            total_members: 45,
            active_members: 42,
            attendance_rate: 87,
            upcoming_payments: 12,
            groups: vec![
                group("Beginners", 15, 92, "Anna Ivanova"),
                group("Intermediate", 18, 85, "Maria Kozlova"),
                group("Advanced", 12, 88, "Sergey Petrov"),
            ],
        })
    }

    pub fn get(&self) -> AdminStats {
        self.stats.as_ref().clone()
    }
}

fn group(name: &str, member_count: u32, attendance_rate: u32, trainer: &str) -> GroupStats {
    GroupStats {
        name: name.to_owned(),
        member_count,
        attendance_rate,
        trainer: trainer.to_owned(),
    }
}
