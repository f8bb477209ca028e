//! API route handlers
//!
//! Each submodule handles one group of endpoints.

pub mod charts;
pub mod dashboard;
pub mod health;
pub mod widgets;
