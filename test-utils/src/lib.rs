//! Test harness for the flightboard backend.
//!
//! Every test gets its own in-memory SQLite database whose tables are generated
//! straight from the `entity` crate, so tests never depend on the migrations.
//!
//! - `builder::TestBuilder` picks the tables. `with_flight_tables` covers flights and
//!   flight numbers; `with_all_tables` adds users and favorites for association and
//!   HTTP tests.
//! - `context::TestContext` owns the connection for the duration of a test.
//! - `factory` inserts users, flights, flight numbers and favorites with unique
//!   defaults. `factory::helpers` creates a record together with the rows it
//!   references.
//!
//! ```rust,ignore
//! let test = TestBuilder::new().with_all_tables().build().await?;
//! let db = test.db.as_ref().unwrap();
//!
//! let (user, flight, favorite) =
//!     factory::helpers::create_favorite_with_dependencies(db).await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
