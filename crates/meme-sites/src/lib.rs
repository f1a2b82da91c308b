//! meme-sites - extract aligned motif sites from MEME reports.
//!
//! The binary is a thin layer over [`meme_align`]; this library exposes its
//! argument parsing and output formatting so both can be tested directly.

#![forbid(unsafe_code)]

pub mod cli;
pub mod output;
