use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub group: String,
    pub trainer: String,
    pub age: u32,
    pub join_date: String,
    pub role: Role,
    pub phone: Option<String>,
}

impl UserProfile {
    pub fn is_staff(&self) -> bool {
        matches!(self.role, Role::Trainer | Role::Admin)
    }

    pub fn ensure_staff(&self) -> eyre::Result<()> {
        if !self.is_staff() {
            return Err(eyre::eyre!("User has no rights to perform this action"));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Swimmer,
    Trainer,
    Admin,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            id: "user1".to_owned(),
            name: "Alexander Mikhailov".to_owned(),
            email: "alexander@example.com".to_owned(),
            group: "Intermediate".to_owned(),
            trainer: "Maria Kozlova".to_owned(),
            age: 16,
            join_date: "2024-01-15".to_owned(),
            role,
            phone: None,
        }
    }

    #[test]
    fn test_ensure_staff() {
        assert!(profile(Role::Swimmer).ensure_staff().is_err());
        assert!(profile(Role::Trainer).ensure_staff().is_ok());
        assert!(profile(Role::Admin).ensure_staff().is_ok());
    }
}
