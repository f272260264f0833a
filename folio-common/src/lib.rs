//! folio-common - Pure state and content types for the portfolio site
//!
//! Nothing in here touches the DOM. The UI crate wraps these types in
//! signals and feeds them input events.

mod content;
mod error;
mod gallery;
mod menu;
mod particles;

pub use content::*;
pub use error::ContentError;
pub use gallery::{GalleryState, ImageItem, ViewerInput};
pub use menu::MenuState;
pub use particles::{Particle, ParticleConfig, ParticleField};
