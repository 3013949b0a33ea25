//! Inbound adapters translating external requests into calls on the
//! registration form, keeping framework details at the edge.

pub mod http;
