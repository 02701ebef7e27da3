//! Domain models for the msk-intake system.

mod case;
mod profile;
mod signals;

pub use case::*;
pub use profile::*;
pub use signals::*;
