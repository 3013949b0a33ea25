//! Course catalogue outbound adapters.
//!
//! A thin HTTP implementation of the `CourseCatalogue` port.

mod dto;
mod http_source;

pub use http_source::HttpCourseCatalogue;
