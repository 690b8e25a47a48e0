//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the records they reference,
//! and `helpers` offers shortcuts that create those dependencies as well.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::create_user(&db).await?;
//!     let flight = factory::create_flight(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, flight, favorite) =
//!         factory::helpers::create_favorite_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let flight = factory::flight::FlightFactory::new(&db)
//!     .airport_departure("SVO")
//!     .airport_arrival("LED")
//!     .build()
//!     .await?;
//! ```

pub mod favorite;
pub mod flight;
pub mod flight_number;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use favorite::create_favorite;
pub use flight::create_flight;
pub use flight_number::create_flight_number;
pub use user::create_user;
