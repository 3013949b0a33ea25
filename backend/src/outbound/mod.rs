//! Outbound adapters implementing domain ports.
//!
//! - **catalogue**: course listing read from the document store over HTTP
//! - **memory**: in-process registration and challenge sinks
//!
//! Adapters translate between domain types and transport representations.
//! They contain no business logic.

pub mod catalogue;
pub mod memory;
