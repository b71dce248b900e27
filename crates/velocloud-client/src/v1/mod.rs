//! Velocloud portal (V1) API

pub mod client;
pub mod models;
