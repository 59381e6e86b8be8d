//! Data contracts for the authoring tools: dataset records, payload decoding
//! and the formatting of committed selections.

pub mod host;
pub mod shared;
pub mod tools;
