pub mod subscribe;
pub mod wait;

pub use subscribe::*;
pub use wait::*;
