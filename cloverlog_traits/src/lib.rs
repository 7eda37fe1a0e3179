//! Seams shared across the cloverlog workspace.
pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
