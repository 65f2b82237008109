pub mod extract;
pub mod provider_hkab;
pub mod request;
mod rate;

pub use rate::*;
pub use provider_hkab as hkab;
