//! Shooting module - drag charge and launch systems

mod charge;
mod launch;

pub use charge::*;
pub use launch::*;
