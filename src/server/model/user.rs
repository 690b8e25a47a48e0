//! User domain models and parameters.
//!
//! The stored password digest never leaves this layer: `User` does not carry it,
//! so no DTO can expose it.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto, UserRoleDto},
    server::{
        error::AppError,
        util::{
            password::hash_password,
            validate::{non_blank, present},
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            role: role_into_dto(self.role),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub fn role_into_dto(role: UserRole) -> UserRoleDto {
    match role {
        UserRole::Admin => UserRoleDto::Admin,
        UserRole::User => UserRoleDto::User,
    }
}

pub fn role_from_dto(role: UserRoleDto) -> UserRole {
    match role {
        UserRoleDto::Admin => UserRole::Admin,
        UserRoleDto::User => UserRole::User,
    }
}

fn validate_email(email: String) -> Result<String, AppError> {
    if email.contains('@') {
        Ok(email)
    } else {
        Err(AppError::BadRequest(format!("Invalid email address '{}'", email)))
    }
}

/// Validated parameters for creating a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

impl CreateUserParams {
    pub fn try_from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let (email, password) = match (present(dto.email), present(dto.password)) {
            (Some(email), Some(password)) => (email, password),
            _ => {
                return Err(AppError::BadRequest(
                    "Fields email and password are required".to_string(),
                ))
            }
        };

        Ok(Self {
            email: validate_email(email)?,
            password_hash: hash_password(&password),
            role: dto.role.map(role_from_dto).unwrap_or(UserRole::User),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<UserRole>,
}

impl UpdateUserParams {
    pub fn try_from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        let email = non_blank(dto.email, "email")?.map(validate_email).transpose()?;
        let password_hash = non_blank(dto.password, "password")?.map(|p| hash_password(&p));

        Ok(Self {
            email,
            password_hash,
            role: dto.role.map(role_from_dto),
        })
    }
}
