#![forbid(unsafe_code)]

pub mod error;
pub mod fingerprint;
pub mod model;

pub use error::Error;
pub use fingerprint::Fingerprint;
