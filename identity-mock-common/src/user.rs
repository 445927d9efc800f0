//! User and provider records as they appear on the wire.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Federated-login binding attached to a user.
///
/// Stored verbatim as the JSON object the client sent, explicit nulls
/// included. Only `name` and `providerUserId` are addressable by lookup, and
/// only when they hold strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderRecord(Map<String, Value>);

impl ProviderRecord {
    pub fn new(name: impl Into<String>, provider_user_id: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.into()));
        fields.insert(
            "providerUserId".to_string(),
            Value::String(provider_user_id.into()),
        );
        Self(fields)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name")?.as_str()
    }

    pub fn provider_user_id(&self) -> Option<&str> {
        self.0.get("providerUserId")?.as_str()
    }

    /// All sub-fields as received.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ProviderRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// A stored user.
///
/// Absent attributes serialize as `null`, except `provider`, which is left
/// out entirely when the user has none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub pin: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderRecord>,
}

/// Registration body for `POST /user`.
///
/// A client-supplied `userId` is not part of this type and is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub pin: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderRecord>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl NewUser {
    /// Turn the registration body into a stored user under `user_id`.
    pub fn into_user(self, user_id: String) -> User {
        User {
            user_id,
            username: self.username,
            password: self.password,
            pin: self.pin,
            phone_number: self.phone_number,
            email: self.email,
            name: self.name,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            picture: self.picture,
            provider: self.provider,
        }
    }
}
