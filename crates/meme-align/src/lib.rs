//! Parser for the aligned motif sites in MEME reports.
//!
//! MEME writes, for every motif it discovers, a "sites sorted by position"
//! section listing each occurrence with its sequence name, start coordinate,
//! p-value and flanking context. This crate reads those sections from the
//! plain-text report (version 3.0 or later) and returns them as
//! [`AlignmentBlock`]s of [`AlignedSite`]s, one block per section.
//!
//! ```no_run
//! use meme_align::ReportParser;
//!
//! # fn main() -> meme_align::Result<()> {
//! let mut parser = ReportParser::open("meme.txt")?;
//! while let Some(block) = parser.next_block()? {
//!     for site in &block {
//!         println!("{site}\t{}", site.residues());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod block;
pub mod error;
pub mod format;
pub mod parser;
mod patterns;
pub mod site;
pub mod source;
pub mod version;
pub mod warning;

pub use block::AlignmentBlock;
pub use error::{Error, Result};
pub use format::AlignmentFormat;
pub use parser::{Blocks, ParserState, ReportParser, read_report};
pub use site::{AlignedSite, Strand};
pub use source::{LineReader, LineSource};
pub use version::FormatVersion;
pub use warning::{Warning, WarningCollector};
