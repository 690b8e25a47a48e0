//! HTTP request handlers.
//!
//! Each handler converts the request DTO into validated params, calls the matching
//! service and converts the resulting domain model back into a response DTO.

pub mod favorite;
pub mod flight;
pub mod flight_number;
pub mod user;
pub mod user_flight;

#[cfg(test)]
mod test;
