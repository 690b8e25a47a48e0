//! Domain models and operation-specific parameter types.
//!
//! Domain models are converted from SeaORM entities at the repository boundary and
//! into DTOs at the controller boundary. Parameter types carry validated input from
//! controllers down to services and repositories.

pub mod favorite;
pub mod flight;
pub mod flight_number;
pub mod user;
pub mod user_flight;
