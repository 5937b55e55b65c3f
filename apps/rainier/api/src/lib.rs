//! Rainier API
//!
//! HTTP front end for the in-memory vector database.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (JSON over HTTP)
//! domain_vectordb::handlers (validation, error mapping)
//!   ↓
//! VectorDbService (parent checks, paging defaults)
//!   ↓
//! ┌──────────┬─────────────┬────────┐
//! │ Database │ Collection  │ Point  │  in-memory stores
//! └──────────┴─────────────┴────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: Environment-driven configuration
//! - `server`: Router assembly and server lifecycle

pub mod config;
pub mod server;

pub use config::Config;
pub use server::{app, run};
