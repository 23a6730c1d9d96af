//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for quotes using SQLx.
//!
//! # Architecture
//!
//! - **Repositories** run SQL and return plain rows
//! - **Adapters** implement domain ports on top of repositories
//!
//! The schema lives in `migrations/` and is applied with [`run_migrations`].
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresQuoteStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/quotes")).await?;
//! run_migrations(&pool).await?;
//! let store = PostgresQuoteStore::new(pool);
//! ```

pub mod adapters;
pub mod error;
pub mod pool;
pub mod repositories;

pub use adapters::PostgresQuoteStore;
pub use error::DatabaseError;
pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
pub use repositories::QuoteRepository;
