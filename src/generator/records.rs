use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialRecord {
    pub email: String,
    pub password: String,
}

/// Input record attached to a dispatched request. Serializes as the inner
/// record so it can be used directly as a JSON request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SyntheticRecord {
    User(UserRecord),
    Credentials(CredentialRecord),
}

impl From<UserRecord> for SyntheticRecord {
    fn from(value: UserRecord) -> Self {
        Self::User(value)
    }
}

impl From<CredentialRecord> for SyntheticRecord {
    fn from(value: CredentialRecord) -> Self {
        Self::Credentials(value)
    }
}
