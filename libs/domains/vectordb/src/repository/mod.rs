//! Storage traits and their in-memory implementations.
//!
//! Each store guards its whole keyspace with a single `tokio::sync::RwLock`:
//! reads take the shared lock, writes take the exclusive lock for the full
//! check-then-mutate sequence. Stores know nothing about each other; the
//! database → collection → point hierarchy is enforced by the service.

mod collection;
mod database;
mod point;

pub use collection::{CollectionRepository, InMemoryCollectionRepository};
pub use database::{DatabaseRepository, InMemoryDatabaseRepository};
pub use point::{InMemoryPointRepository, PointRepository};

#[cfg(test)]
pub use collection::MockCollectionRepository;
#[cfg(test)]
pub use database::MockDatabaseRepository;
#[cfg(test)]
pub use point::MockPointRepository;
