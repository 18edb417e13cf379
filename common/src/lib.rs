#![doc = include_str!("../README.md")]

pub mod geometry;
pub mod log;
pub mod version;
pub mod window;
