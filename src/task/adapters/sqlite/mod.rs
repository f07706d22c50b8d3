//! SQLite adapters for task lifecycle persistence.

mod models;
mod repository;
mod schema;

pub use repository::{
    CREATE_TASKS_SQL, IN_MEMORY_URL, SqliteTaskRepository, TaskSqlitePool, build_pool,
};
