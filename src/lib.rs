//! Blockfall (workspace facade crate).
//!
//! A minimal falling-block puzzle for the terminal. The implementation lives in
//! dedicated crates under `crates/`; this package re-exports them as
//! `blockfall::{core,input,term,types}` and owns startup [`config`].

pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
