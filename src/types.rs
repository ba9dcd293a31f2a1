//! Wallet Units - Type System
//!
//! - `unit`: The three display units and their cycling order
//! - `amount`: Signed whole-satoshi amounts accepted by the engine
//! - `display`: The display descriptor handed to renderers
//! - `rate`: Rate table entries and per-currency symbol rules

mod amount;
mod display;
mod rate;
mod unit;

pub use amount::*;
pub use display::*;
pub use rate::*;
pub use unit::*;
