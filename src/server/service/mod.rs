//! Business logic layer.
//!
//! Services sit between controllers and repositories. They enforce the rules that
//! need the database, such as referenced records existing or codes being unique,
//! and translate missing records into `AppError::NotFound`.

pub mod favorite;
pub mod flight;
pub mod flight_number;
pub mod user;
pub mod user_flight;

#[cfg(test)]
mod test;
