use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::error::AppError;


async fn setup() -> TestContext {
    TestBuilder::new().with_all_tables().build().await.unwrap()
}

fn db(test: &TestContext) -> &DatabaseConnection {
    test.db.as_ref().unwrap()
}
