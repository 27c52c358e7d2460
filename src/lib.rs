//! Pessoas API Library
//!
//! A small CRUD service for person records ("pessoas"), kept entirely in
//! process memory and exposed over HTTP. It serves as the foundation for the
//! binary executable (`main.rs`).
//!
//! ## Architecture Modules
//!
//! - **`auth`**: The authentication stub. Hands out a fixed placeholder token
//!   to every caller; real credential issuance is intentionally absent.
//! - **`registry`**: The core of the service. Owns the in-memory collection of
//!   person records, enforces the uniqueness and required-field invariants on
//!   every mutation, and exposes the CRUD handlers mounted by the router.

pub mod auth;
pub mod registry;
