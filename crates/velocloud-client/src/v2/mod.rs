//! Velocloud REST (V2) API

pub mod client;
pub mod models;
