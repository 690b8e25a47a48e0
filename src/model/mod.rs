//! Data transfer objects shared by the HTTP layer and the OpenAPI document.
//!
//! Request and response bodies use camelCase keys on the wire.

pub mod api;
pub mod favorite;
pub mod flight;
pub mod flight_number;
pub mod id;
pub mod user;
pub mod user_flight;
