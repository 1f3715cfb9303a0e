//! Domain logic for the prompt composer: request types, template rendering,
//! the provider seam, and the composer that ties them together.

pub mod composer;
pub mod error;
pub mod params;
pub mod provider;
pub mod template;
