//! Registration engines that wire the matching core to an event target.

pub mod combination;
mod handler;
pub mod registration;
pub mod sequence;

pub use combination::register_combination;
pub use registration::Registration;
pub use sequence::register_sequence;
