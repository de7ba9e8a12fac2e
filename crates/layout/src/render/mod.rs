//! Turning ordered lines into text.

pub mod text;
