//! Line-oriented reader of N-Quads documents.
//!
//! Each line is parsed independently with [`parse_quad`].
//! By default, lines that do not match the grammar (or are not valid UTF-8) are skipped;
//! a [strict](NqConfig::strict) reader reports them instead.

use crate::{parse_quad, NqError, Result};
use rdfjs_term::Quad;
use std::io::BufRead;

/// N-Quads reader configuration.
#[derive(Clone, Debug, Default)]
pub struct NqConfig {
    pub(crate) strict: bool,
}

impl NqConfig {
    /// Set the strict configuration.
    ///
    /// A strict reader fails on any line that is not a quad,
    /// except blank lines and `#` comments.
    pub fn set_strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    /// Whether this configuration is strict.
    pub fn strict(&self) -> bool {
        self.strict
    }
}

/// An iterator over the quads of an N-Quads document.
pub struct QuadReader<R> {
    config: NqConfig,
    read: R,
    line: usize,
    buffer: Vec<u8>,
}

impl<R> QuadReader<R>
where
    R: BufRead,
{
    /// Build a new N-Quads reader on `read`, with the default config.
    #[inline]
    pub fn new(read: R) -> Self {
        Self::new_with_config(read, NqConfig::default())
    }

    /// Build a new N-Quads reader on `read`, with the given config.
    pub fn new_with_config(read: R, config: NqConfig) -> Self {
        QuadReader {
            config,
            read,
            line: 0,
            buffer: Vec::new(),
        }
    }

    /// Borrow this reader's configuration.
    pub fn config(&self) -> &NqConfig {
        &self.config
    }

    /// The number of lines read so far.
    pub fn line(&self) -> usize {
        self.line
    }

    fn next_quad(&mut self) -> Result<Option<Quad>> {
        loop {
            self.buffer.clear();
            match self.read.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return Ok(None),
                Ok(_) => self.line += 1,
                Err(err) => {
                    self.line += 1;
                    return Err(err.into());
                }
            }
            let decoded = std::str::from_utf8(&self.buffer);
            if let Some(quad) = decoded.ok().and_then(parse_quad) {
                return Ok(Some(quad));
            }
            let text = match decoded {
                Ok(txt) => txt.into(),
                Err(_) => String::from_utf8_lossy(&self.buffer),
            };
            let text = text.trim_end_matches(['\n', '\r']);
            let trimmed = text.trim_start_matches([' ', '\t']);
            if self.config.strict && !trimmed.is_empty() && !trimmed.starts_with('#') {
                log::warn!("invalid N-Quads at line {}", self.line);
                return Err(NqError::InvalidLine {
                    line: self.line,
                    text: text.to_string(),
                });
            }
            log::debug!("skipping line {}: {:?}", self.line, text);
        }
    }
}

impl<R> Iterator for QuadReader<R>
where
    R: BufRead,
{
    type Item = Result<Quad>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_quad().transpose()
    }
}

/// Read all the quads of an N-Quads document, skipping the lines that are not quads.
///
/// # Error
///
/// Only IO errors are reported.
pub fn read_quads<R: BufRead>(read: R) -> Result<Vec<Quad>> {
    QuadReader::new(read).collect()
}
