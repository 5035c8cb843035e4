//! Query Module
//!
//! Time-range retrieval of stored log records.
//!
//! ## Responsibilities
//! - **Validation**: both path parameters must parse as points in time;
//!   anything else is rejected with a 400 before the store is touched.
//! - **Retrieval**: records in the half-open window `[dateFrom, dateTo)`,
//!   in store order, no pagination. An empty window is a 200 with `[]`.

pub mod handlers;
pub mod service;
