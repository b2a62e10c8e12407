//! PAYE engine for Zambian salaries
//!
//! This crate computes gross pay, NAPSA and NHIMA contributions, progressive
//! PAYE across configurable tax bands, and net salary, and serves the
//! breakdown over a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
