//! Storage Module
//!
//! The persistence layer for log records.
//!
//! ## Core Concepts
//! - **Seam**: `LogStore` is the trait every component writes and reads through,
//!   so handlers and the queue consumer never know which backend they talk to.
//! - **Backends**: `MongoLogStore` persists into a single document collection;
//!   `MemoryLogStore` keeps records in process memory for tests and local runs.
//! - **Purge**: the bulk delete endpoint lives here, next to the data it removes.

pub mod handlers;
pub mod memory;
pub mod mongo;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
