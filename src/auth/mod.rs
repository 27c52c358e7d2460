//! Authentication Module
//!
//! Placeholder authentication only: the single endpoint returns a fixed token
//! and never fails. Kept as its own module so a real credential issuer (JWT
//! signing, expiry, account lookup) can replace it without touching the
//! registry.

pub mod handlers;

#[cfg(test)]
mod tests;
