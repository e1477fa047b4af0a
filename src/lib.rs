#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod game;
mod input;
pub mod lines;
mod render;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod logging;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use input::*;
pub use lines::{Coord, Line, LineKind};
pub use render::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
