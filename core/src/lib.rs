#![no_std]

extern crate alloc;

pub use board::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod board;
mod config;
mod engine;
mod error;
mod generator;
mod tile;
mod types;
mod view;
