//! Narrative interpretation of cast results
//!
//! The engines never talk to the network themselves; this module carries a
//! finished `CastResult` plus the seeker's question to an external
//! text-generation service and parses the structured commentary it returns.

pub mod client;
pub mod types;

pub use client::ReadingClient;
pub use types::{CastInterpretation, CastReadingRequest, LineCommentary};
