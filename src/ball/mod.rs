//! Ball module - components and flight systems

mod components;
mod physics;

pub use components::*;
pub use physics::*;
