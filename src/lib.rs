#[macro_use]
extern crate bitflags;

pub mod config;
pub mod error;
pub mod rom;
