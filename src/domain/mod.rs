//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types handed to the view model
//! - `wire.rs`: Raw serde structs matching backend responses
//! - `convert.rs`: `From` conversions that sort, dedupe and reorder
//! - `client.rs`: Sub-client with HTTP methods

pub mod favorites;
pub mod history;
pub mod quote;
pub mod watchlist;
