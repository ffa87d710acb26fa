//! Encoder configuration
//!
//! All formatting choices that end up in the document preamble live here
//! as explicit named fields, so the transform can be exercised and reused
//! without baking constants into the algorithm.

use crate::charsets;
use serde::{Deserialize, Serialize};

/// One entry in the RTF font table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontEntry {
    /// Font family name as it appears in the table
    pub name: String,
    /// RTF charset number (`\fcharsetN`)
    pub charset: u8,
}

impl FontEntry {
    pub fn new(name: impl Into<String>, charset: u8) -> Self {
        Self {
            name: name.into(),
            charset,
        }
    }
}

/// Configuration for the RTF document preamble.
///
/// The default configuration reproduces the reference preamble byte for
/// byte: UTF-8 code page, a two-entry font table (a CJK-capable primary
/// and a Latin fallback), 5pt paragraph spacing, single line spacing,
/// 11pt text, Simplified Chinese text language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtfConfig {
    /// ANSI code page declared in the header (`\ansicpgN`)
    pub code_page: u32,
    /// Index into the font table used as document default (`\deffN`, `\fN`)
    pub default_font: u32,
    /// Document default language id (`\deflangN`)
    pub doc_language: u32,
    /// Font table entries, in index order
    pub fonts: Vec<FontEntry>,
    /// Space after each paragraph, in twips (`\saN`)
    pub space_after: u32,
    /// Line spacing in twips, applied with `\slmult1` (`\slN`)
    pub line_spacing: u32,
    /// Default font size in half-points (`\fsN`)
    pub font_size: u32,
    /// Language id applied to the body text (`\langN`)
    pub text_language: u32,
}

impl Default for RtfConfig {
    fn default() -> Self {
        Self {
            code_page: 65001,
            default_font: 0,
            doc_language: 1033,
            fonts: vec![
                FontEntry::new("PingFang SC", charsets::GB2312),
                FontEntry::new("Helvetica", charsets::ANSI),
            ],
            space_after: 100,
            line_spacing: 240,
            font_size: 22,
            text_language: 2052,
        }
    }
}

impl RtfConfig {
    /// Replace the font table.
    pub fn with_fonts(mut self, fonts: Vec<FontEntry>) -> Self {
        self.fonts = fonts;
        self
    }

    /// Set the default font size in half-points.
    pub fn with_font_size(mut self, half_points: u32) -> Self {
        self.font_size = half_points;
        self
    }

    /// Set the language id applied to the body text.
    pub fn with_text_language(mut self, lang: u32) -> Self {
        self.text_language = lang;
        self
    }

    /// Set the document default language id.
    pub fn with_doc_language(mut self, lang: u32) -> Self {
        self.doc_language = lang;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RtfConfig::default();
        assert_eq!(config.code_page, 65001);
        assert_eq!(config.default_font, 0);
        assert_eq!(config.doc_language, 1033);
        assert_eq!(config.fonts.len(), 2);
        assert_eq!(config.fonts[0].name, "PingFang SC");
        assert_eq!(config.fonts[0].charset, charsets::GB2312);
        assert_eq!(config.fonts[1].name, "Helvetica");
        assert_eq!(config.fonts[1].charset, charsets::ANSI);
        assert_eq!(config.font_size, 22);
        assert_eq!(config.text_language, 2052);
    }

    #[test]
    fn test_config_builders() {
        let config = RtfConfig::default()
            .with_fonts(vec![FontEntry::new("Calibri", charsets::ANSI)])
            .with_font_size(24)
            .with_text_language(1033);

        assert_eq!(config.fonts.len(), 1);
        assert_eq!(config.fonts[0].name, "Calibri");
        assert_eq!(config.font_size, 24);
        assert_eq!(config.text_language, 1033);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = RtfConfig::default().with_font_size(20);
        let json = serde_json::to_string(&config).unwrap();
        let back: RtfConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
