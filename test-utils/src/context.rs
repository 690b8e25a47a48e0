use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Database owned by a single test.
///
/// Clones of the connection share its pool and therefore see the same in-memory
/// database, which is how HTTP tests hand it to the router.
pub struct TestContext {
    /// `None` until the first call to `database()`.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a context with no connection yet.
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening `sqlite::memory:` on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Runs the CREATE TABLE statements collected by `TestBuilder`, in order.
    ///
    /// Tables referenced by foreign keys must come before the tables referencing them.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
