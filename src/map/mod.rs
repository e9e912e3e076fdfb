//! This module defines the level data and provides functions for interacting with it.

pub mod catalog;
pub mod direction;
pub mod level;
pub mod parser;
pub mod render;
