pub mod constants;
pub mod controller;
pub mod curve;
pub mod error;
pub mod notify;
pub mod params;
pub mod relay;

pub use constants::*;
pub use controller::*;
pub use curve::*;
pub use error::*;
pub use notify::*;
pub use params::*;
pub use relay::*;
