//! UI module - scene drawing, HUD, and charge gauge

mod charge_gauge;
mod hud;
mod render;

pub use charge_gauge::*;
pub use hud::*;
pub use render::*;
