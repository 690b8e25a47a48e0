//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep unique columns such as flight number codes and user emails
/// from colliding between factory calls.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a flight and a favorite linking the two.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, flight, favorite))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_favorite_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::flight::Model,
        entity::favorite::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let flight = crate::factory::flight::create_flight(db).await?;
    let favorite = crate::factory::favorite::create_favorite(db, user.id, flight.id).await?;

    Ok((user, flight, favorite))
}

/// Creates a flight together with one flight number pointing at it.
///
/// # Returns
/// - `Ok((flight, flight_number))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_flight_number_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::flight::Model, entity::flight_number::Model), DbErr> {
    let flight = crate::factory::flight::create_flight(db).await?;
    let flight_number = crate::factory::flight_number::create_flight_number(db, flight.id).await?;

    Ok((flight, flight_number))
}
