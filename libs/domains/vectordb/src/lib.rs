//! Vector Database Domain
//!
//! In-memory storage for a three-level hierarchy: databases contain
//! collections, collections contain points (vectors with optional metadata).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, request validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Presence checks, parent existence, paging defaults
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← One store per level, each behind its own RwLock
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Database, Collection, Point
//! └─────────────┘
//! ```
//!
//! Stores are independent: deleting a database leaves its collections in
//! place, and deleting a collection leaves its points in place. Points are
//! keyed by the owning collection's id, so a recreated collection starts
//! empty and same-named collections in different databases stay separate.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_vectordb::{
//!     handlers,
//!     repository::{
//!         InMemoryCollectionRepository, InMemoryDatabaseRepository, InMemoryPointRepository,
//!     },
//!     service::VectorDbService,
//! };
//!
//! let service = VectorDbService::new(
//!     InMemoryDatabaseRepository::new(),
//!     InMemoryCollectionRepository::new(),
//!     InMemoryPointRepository::new(),
//! );
//!
//! let router = handlers::router(service, tracing::info_span!("vectordb"));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod service;

pub use error::{ErrorKind, VectorDbError, VectorDbResult};
pub use handlers::ApiDoc;
pub use models::{
    Collection, CreateCollection, CreateDatabase, Database, Metadata, NewPoint, Point,
    ScoredPoint, SearchRequest, SearchResponse,
};
pub use pagination::{Page, PageRequest};
pub use repository::{
    CollectionRepository, DatabaseRepository, InMemoryCollectionRepository,
    InMemoryDatabaseRepository, InMemoryPointRepository, PointRepository,
};
pub use service::VectorDbService;
