// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
