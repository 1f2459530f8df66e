#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result};
pub use crate::geodesy::*;
pub use crate::types::*;

mod error;
pub mod geocode;
mod geodesy;
mod types;
mod utils;
