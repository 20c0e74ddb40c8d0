pub mod tier;
pub mod play;
pub mod monologue;
pub mod readability;

pub use tier::*;
pub use play::*;
pub use monologue::*;
