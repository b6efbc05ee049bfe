//! Shared test utilities for crewroster integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Corpora are `&'static str` documents; builders produce
//! token streams and configs; assertion macros give schedule-specific failure
//! messages.

pub mod assertions;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
