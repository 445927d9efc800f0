//! In-memory user store.
//!
//! Users are kept in insertion order; every lookup returns the first match in
//! that order. The store never removes users, and the only in-place update is
//! replacing a user's provider record.

mod id;
mod seed;

pub use id::{IdGenerator, IdStrategy, SequentialIds, UuidIds};
pub use seed::sample_users;

use identity_mock_common::{NewUser, ProviderRecord, User};
use tokio::sync::RwLock;

/// Fields a user can be looked up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupField {
    Email,
    PhoneNumber,
    UserId,
    Username,
    /// `provider.name`
    ProviderName,
    /// `provider.providerUserId`
    ProviderUserId,
}

impl LookupField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            LookupField::Email => "email",
            LookupField::PhoneNumber => "phoneNumber",
            LookupField::UserId => "userId",
            LookupField::Username => "username",
            LookupField::ProviderName => "providerName",
            LookupField::ProviderUserId => "providerUserId",
        }
    }

    /// The user's value for this field, if set.
    ///
    /// Provider fields resolve through the nested provider record, so a user
    /// without one has no value for them.
    pub fn value_in(self, user: &User) -> Option<&str> {
        match self {
            LookupField::Email => user.email.as_deref(),
            LookupField::PhoneNumber => user.phone_number.as_deref(),
            LookupField::UserId => Some(user.user_id.as_str()),
            LookupField::Username => user.username.as_deref(),
            LookupField::ProviderName => user.provider.as_ref()?.name(),
            LookupField::ProviderUserId => user.provider.as_ref()?.provider_user_id(),
        }
    }

    fn matches(self, user: &User, value: &str) -> bool {
        self.value_in(user) == Some(value)
    }
}

impl std::fmt::Display for LookupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields that must not collide with an existing user at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueField {
    Username,
    PhoneNumber,
    Email,
}

impl UniqueField {
    /// Order in which conflicts are checked; the first one found wins.
    pub const CHECK_ORDER: [UniqueField; 3] = [
        UniqueField::Username,
        UniqueField::PhoneNumber,
        UniqueField::Email,
    ];

    pub fn lookup_field(self) -> LookupField {
        match self {
            UniqueField::Username => LookupField::Username,
            UniqueField::PhoneNumber => LookupField::PhoneNumber,
            UniqueField::Email => LookupField::Email,
        }
    }

    /// Wire message reported when the field is already taken.
    pub fn taken_message(self) -> &'static str {
        match self {
            UniqueField::Username => "Username taken",
            UniqueField::PhoneNumber => "phone taken",
            UniqueField::Email => "email taken",
        }
    }

    fn value_in(self, new_user: &NewUser) -> Option<&str> {
        match self {
            UniqueField::Username => new_user.username.as_deref(),
            UniqueField::PhoneNumber => new_user.phone_number.as_deref(),
            UniqueField::Email => new_user.email.as_deref(),
        }
    }
}

/// Store operation failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("{} already in use", .0.lookup_field())]
    Conflict(UniqueField),

    #[error("Generated user id rejected: {0:?}")]
    RejectedId(String),
}

/// Process-wide collection of users.
pub struct UserStore {
    users: RwLock<Vec<User>>,
    ids: Box<dyn IdGenerator>,
}

impl UserStore {
    /// Create an empty store.
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            ids,
        }
    }

    /// Create a store preloaded with the sample users.
    pub fn with_sample_users(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            users: RwLock::new(sample_users()),
            ids,
        }
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// First user whose `field` equals `value`.
    pub async fn find_by_field(&self, field: LookupField, value: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| field.matches(user, value))
            .cloned()
    }

    /// First user matching every criterion.
    ///
    /// Criteria are checked in the given order and a candidate is dropped at
    /// its first mismatch.
    pub async fn find_by_fields(&self, criteria: &[(LookupField, String)]) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| {
                criteria
                    .iter()
                    .all(|(field, value)| field.matches(user, value))
            })
            .cloned()
    }

    /// Store `new_user` under a freshly generated identifier.
    pub async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        self.insert(&mut users, new_user)
    }

    /// Store `new_user` unless its username, phone number or email is taken.
    ///
    /// The conflict check and the insert happen under one write lock.
    pub async fn create_unique(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        for field in UniqueField::CHECK_ORDER {
            let Some(value) = field.value_in(&new_user) else {
                continue;
            };
            let lookup = field.lookup_field();
            if users.iter().any(|user| lookup.matches(user, value)) {
                return Err(StoreError::Conflict(field));
            }
        }

        self.insert(&mut users, new_user)
    }

    /// Replace the provider record of `user_id`.
    pub async fn set_provider(
        &self,
        user_id: &str,
        provider: ProviderRecord,
    ) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.user_id == user_id)
            .ok_or_else(|| StoreError::NotFound(user_id.to_string()))?;

        tracing::debug!(user_id = %user_id, "Replacing provider record");
        user.provider = Some(provider);
        Ok(())
    }

    fn insert(&self, users: &mut Vec<User>, new_user: NewUser) -> Result<User, StoreError> {
        let user_id = self.ids.generate(users.len());
        if user_id.is_empty() || users.iter().any(|user| user.user_id == user_id) {
            return Err(StoreError::RejectedId(user_id));
        }

        let user = new_user.into_user(user_id);
        users.push(user.clone());
        tracing::debug!(user_id = %user.user_id, total = users.len(), "Created user");
        Ok(user)
    }
}
