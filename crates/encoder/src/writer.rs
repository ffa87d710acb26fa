//! RTF Writer - serializes plain text to a minimal RTF document
//!
//! The writer emits a configured preamble (header group, font table,
//! paragraph defaults), then one emission unit per input character, then
//! the closing group terminator. Every byte written is in the ASCII range.

use crate::classify::{classify, CharClass};
use crate::config::RtfConfig;
use crate::error::EncodeResult;
use std::io::Write;

/// Counters collected over one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Number of input characters (Unicode scalar values)
    pub input_chars: usize,
    /// Number of paragraph breaks emitted
    pub paragraph_breaks: usize,
    /// Number of reserved characters emitted in escaped form
    pub escaped_chars: usize,
    /// Number of unicode escapes emitted
    pub unicode_escapes: usize,
    /// Total size of the document, in bytes
    pub output_bytes: usize,
}

/// RTF writer over any byte sink.
pub struct RtfWriter<W: Write> {
    writer: W,
    config: RtfConfig,
    bytes_written: usize,
}

impl<W: Write> RtfWriter<W> {
    /// Create a writer with the default configuration
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, RtfConfig::default())
    }

    /// Create a writer with a custom configuration
    pub fn with_config(writer: W, config: RtfConfig) -> Self {
        Self {
            writer,
            config,
            bytes_written: 0,
        }
    }

    /// Write the complete RTF document for `text`.
    pub fn write(mut self, text: &str) -> EncodeResult<ConvertStats> {
        self.write_header()?;
        self.write_font_table()?;
        self.write_defaults()?;

        let mut stats = self.write_body(text)?;

        self.write_str("}")?;
        self.writer.flush()?;

        stats.output_bytes = self.bytes_written;
        Ok(stats)
    }

    /// Write the RTF header: version, character set, code page,
    /// default font, and document language.
    fn write_header(&mut self) -> EncodeResult<()> {
        self.write_str(&format!(
            "{{\\rtf1\\ansi\\ansicpg{}\\deff{}\\nouicompat\\deflang{}",
            self.config.code_page, self.config.default_font, self.config.doc_language
        ))
    }

    /// Write the font table group from the configured entries.
    fn write_font_table(&mut self) -> EncodeResult<()> {
        self.write_str("{\\fonttbl")?;
        let entries: Vec<String> = self
            .config
            .fonts
            .iter()
            .enumerate()
            .map(|(idx, font)| format!("{{\\f{}\\fnil\\fcharset{} {};}}", idx, font.charset, font.name))
            .collect();
        for entry in &entries {
            self.write_str(entry)?;
        }
        self.write_str("}")
    }

    /// Write the defaults line: view kind, unicode fallback count,
    /// paragraph spacing, line spacing, default font, size, language.
    fn write_defaults(&mut self) -> EncodeResult<()> {
        self.write_str(&format!(
            "\\viewkind4\\uc1\\pard\\sa{}\\sl{}\\slmult1\\f{}\\fs{}\\lang{}",
            self.config.space_after,
            self.config.line_spacing,
            self.config.default_font,
            self.config.font_size,
            self.config.text_language
        ))
    }

    /// Write the body, one emission unit per input character.
    fn write_body(&mut self, text: &str) -> EncodeResult<ConvertStats> {
        let mut stats = ConvertStats::default();

        for ch in text.chars() {
            stats.input_chars += 1;
            match classify(ch) {
                CharClass::ParBreak => {
                    self.write_str("\\par ")?;
                    stats.paragraph_breaks += 1;
                }
                CharClass::Escaped(c) => {
                    self.write_str("\\")?;
                    self.write_char(c)?;
                    stats.escaped_chars += 1;
                }
                CharClass::Literal(c) => {
                    self.write_char(c)?;
                }
                CharClass::Unicode(code) => {
                    self.write_str(&format!("\\u{}?", code))?;
                    stats.unicode_escapes += 1;
                }
            }
        }

        Ok(stats)
    }

    fn write_char(&mut self, c: char) -> EncodeResult<()> {
        let mut buf = [0u8; 4];
        self.write_str(c.encode_utf8(&mut buf))
    }

    /// Helper to write a string, tracking the document size
    fn write_str(&mut self, s: &str) -> EncodeResult<()> {
        self.writer.write_all(s.as_bytes())?;
        self.bytes_written += s.len();
        Ok(())
    }
}

/// Encode `text` into an RTF document held in memory.
pub fn encode_to_string(text: &str, config: &RtfConfig) -> EncodeResult<(String, ConvertStats)> {
    let mut buf = Vec::new();
    let stats = RtfWriter::with_config(&mut buf, config.clone()).write(text)?;
    // Lossless: the writer only emits ASCII
    Ok((String::from_utf8_lossy(&buf).into_owned(), stats))
}
