use model::user::{Role, UserProfile};

#[derive(Clone)]
pub struct UserStore {
    me: UserProfile,
}

impl UserStore {
    pub fn new(me: UserProfile) -> Self {
        UserStore { me }
    }

    pub fn with_fixtures() -> Self {
        UserStore::new(UserProfile {
            id: "user1".to_owned(),
            name: "Alexander Mikhailov".to_owned(),
            email: "alexander@example.com".to_owned(),
            group: "Intermediate".to_owned(),
            trainer: "Maria Kozlova".to_owned(),
            age: 16,
            join_date: "2024-01-15".to_owned(),
            role: Role::Swimmer,
            phone: Some("+7 (999) 123-45-67".to_owned()),
        })
    }

    pub fn me(&self) -> UserProfile {
        self.me.clone()
    }
}
