//! Registration form service library.
//!
//! Hexagonal layout: [`domain`] holds the form controller and its ports,
//! [`outbound`] the adapters implementing those ports, and [`inbound`] the
//! HTTP surface.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use doc::ApiDoc;
pub use middleware::Trace;
