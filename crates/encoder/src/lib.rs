//! Plain-text to RTF Encoder
//!
//! This crate converts plain text into a minimal Rich Text Format (RTF)
//! document. The output is pure ASCII: RTF-reserved characters are escaped,
//! newlines become paragraph breaks, and everything outside the ASCII range
//! is emitted as an RTF unicode escape (`\uN?`).
//!
//! ## Output Structure
//!
//! The generated document consists of:
//! - A header group declaring ANSI encoding, code page, and a font table
//! - A defaults line (view kind, paragraph spacing, default font and size)
//! - The transformed body, one emission per input character
//! - The closing group terminator
//!
//! The preamble is driven by [`RtfConfig`]; the default configuration
//! reproduces the preamble used for shipping LICENSE files with the
//! desktop installer.

mod api;
mod classify;
mod config;
mod error;
mod writer;

pub use api::{convert_bytes, convert_file, convert_str};
pub use classify::{classify, CharClass};
pub use config::{FontEntry, RtfConfig};
pub use error::{EncodeError, EncodeResult};
pub use writer::{encode_to_string, ConvertStats, RtfWriter};

/// Character set identifiers used in RTF font tables
pub mod charsets {
    pub const ANSI: u8 = 0;
    pub const DEFAULT: u8 = 1;
    pub const SYMBOL: u8 = 2;
    pub const SHIFTJIS: u8 = 128;
    pub const HANGUL: u8 = 129;
    pub const GB2312: u8 = 134;
    pub const CHINESEBIG5: u8 = 136;
    pub const GREEK: u8 = 161;
    pub const TURKISH: u8 = 162;
    pub const HEBREW: u8 = 177;
    pub const ARABIC: u8 = 178;
    pub const RUSSIAN: u8 = 204;
    pub const THAI: u8 = 222;
    pub const EASTEUROPE: u8 = 238;
    pub const OEM: u8 = 255;
}
