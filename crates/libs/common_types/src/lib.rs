#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod color;
mod garment;
mod outfit;

pub use color::*;
pub use garment::*;
pub use outfit::*;
