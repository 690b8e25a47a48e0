use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum UserRoleDto {
    Admin,
    User,
}

/// User as exposed by the API. The password is never serialized.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub role: UserRoleDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({ "email": "pilot@example.com", "password": "secret", "role": "user" }))]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Defaults to `user` when omitted
    pub role: Option<UserRoleDto>,
}

/// Partial update: only the provided fields are changed.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRoleDto>,
}
