//! Search an external metadata source for a work and reconcile one suggestion
//! into a partially filled creation form.

pub mod app;
pub mod config;
pub mod error;
pub mod search;
