//! Capability interface shared by alignment format handlers.

use crate::block::AlignmentBlock;
use crate::error::{Error, Result};
use crate::parser::ReportParser;
use crate::source::LineSource;

/// Reading and writing of alignment blocks in one textual format.
///
/// Formats that cannot be written return [`Error::NotImplemented`] from
/// [`write_block`](AlignmentFormat::write_block).
pub trait AlignmentFormat {
    /// Short name of the format, e.g. `"meme"`.
    fn format_name(&self) -> &'static str;

    /// Reads the next block, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Format-specific parse or I/O errors.
    fn next_block(&mut self) -> Result<Option<AlignmentBlock>>;

    /// Writes one block in this format.
    ///
    /// # Errors
    ///
    /// Format-specific I/O errors, or [`Error::NotImplemented`] for
    /// read-only formats.
    fn write_block(&mut self, block: &AlignmentBlock) -> Result<()>;

    /// Reads all remaining blocks.
    ///
    /// # Errors
    ///
    /// Stops at the first error returned by
    /// [`next_block`](AlignmentFormat::next_block).
    fn read_all(&mut self) -> Result<Vec<AlignmentBlock>> {
        let mut blocks = Vec::new();
        while let Some(block) = self.next_block()? {
            blocks.push(block);
        }
        Ok(blocks)
    }
}

impl<S: LineSource> AlignmentFormat for ReportParser<S> {
    fn format_name(&self) -> &'static str {
        "meme"
    }

    fn next_block(&mut self) -> Result<Option<AlignmentBlock>> {
        ReportParser::next_block(self)
    }

    /// MEME reports are produced by the MEME suite only; writing is
    /// unsupported.
    fn write_block(&mut self, _block: &AlignmentBlock) -> Result<()> {
        Err(Error::NotImplemented("writing alignment blocks"))
    }
}
