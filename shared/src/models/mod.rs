//! Domain models for the AirSense pollution dashboard

mod aqi;
mod area;
mod forecast;
mod policy;
mod source;

pub use aqi::*;
pub use area::*;
pub use forecast::*;
pub use policy::*;
pub use source::*;
