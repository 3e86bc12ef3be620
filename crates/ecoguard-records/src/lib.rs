//! # ecoguard-records
//!
//! Record actions for incidents, users and devices. Validation and status
//! rules live in [`RecordsService`]; storage is whatever implements
//! `IDocumentStore`, with [`MemoryCollection`] as the default adapter.

pub mod memory_store;
pub mod service;
mod validation;

pub use memory_store::MemoryCollection;
pub use service::RecordsService;
