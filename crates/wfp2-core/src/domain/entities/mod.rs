//! Value types passed between the generator services.

pub mod parameters;
pub mod request;
pub mod skeleton;
