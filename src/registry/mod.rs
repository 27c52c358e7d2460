//! Person Registry Module
//!
//! The canonical in-memory collection of person records and the HTTP handlers
//! that expose it.
//!
//! ## Core Concepts
//! - **Ownership**: `PersonRegistry` is the only owner of the collection; all
//!   reads and writes go through its methods.
//! - **Invariants**: no two records share the case-insensitive
//!   (name, national id, region) triple, codes are unique and immutable, and
//!   the three required text fields are never empty on an accepted record.
//! - **Serialization**: every operation takes the registry mutex for its full
//!   duration, so one logical operation completes before the next begins.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod types;
