pub mod constants;
pub mod fireworks;
pub mod particles;

pub use fireworks::*;
pub use particles::*;
