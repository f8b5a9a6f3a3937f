// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod output;
pub mod serialization;
pub mod source;
