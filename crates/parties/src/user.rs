use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use orderdesk_core::{ServiceResult, UserId};

/// Minimal user record, enough to own orders and appear as an audit actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Existence check against the external user store.
pub trait UserDirectory: Send + Sync {
    fn exists(&self, user_id: UserId) -> ServiceResult<bool>;
}

impl<D> UserDirectory for Arc<D>
where
    D: UserDirectory + ?Sized,
{
    fn exists(&self, user_id: UserId) -> ServiceResult<bool> {
        (**self).exists(user_id)
    }
}
