use std::collections::HashMap;
use std::sync::RwLock;

use orderdesk_core::{ServiceResult, UserId};
use orderdesk_parties::{User, UserDirectory};

use super::poisoned;

/// In-memory stand-in for the external user store.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, user: User) -> ServiceResult<()> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        users.insert(user.id, user);
        Ok(())
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn exists(&self, user_id: UserId) -> ServiceResult<bool> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.contains_key(&user_id))
    }
}
