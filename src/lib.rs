//! Exargo is an EXtension-based ARGumentation engine.

#![warn(missing_docs)]

pub mod aa;

pub mod encodings;

pub mod io;

pub mod reasoners;

pub mod utils;
