//! Main content panels.

pub mod transfers;
