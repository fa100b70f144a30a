//! Domain models for the vaccine stock tracker.

mod administration;
mod lot;
mod receipt;
mod vaccine;

pub use administration::*;
pub use lot::*;
pub use receipt::*;
pub use vaccine::*;
