//! Traits shared across the bnpair crates

pub mod serialize;

pub use serialize::Serialize;
