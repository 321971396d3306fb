//! Platform abstraction layer
//!
//! Hosts translate their own key/mouse events into the abstract signals here:
//! held directions plus one-shot debug commands.

pub mod input;

pub use input::InputState;
