//! Public API for text-to-RTF conversion
//!
//! This module provides the main entry points: in-memory conversion of
//! strings and byte slices, and whole-file conversion with atomic output.

use crate::config::RtfConfig;
use crate::error::{EncodeError, EncodeResult};
use crate::writer::{ConvertStats, RtfWriter};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Convert a string to an RTF document held in memory.
pub fn convert_str(text: &str, config: &RtfConfig) -> EncodeResult<(Vec<u8>, ConvertStats)> {
    let mut buf = Vec::new();
    let stats = RtfWriter::with_config(&mut buf, config.clone()).write(text)?;
    Ok((buf, stats))
}

/// Convert UTF-8 encoded bytes to an RTF document held in memory.
///
/// # Returns
///
/// * `Ok((bytes, stats))` - The RTF document and conversion counters
/// * `Err(EncodeError::SourceDecode)` - If the input is not valid UTF-8
pub fn convert_bytes(bytes: &[u8], config: &RtfConfig) -> EncodeResult<(Vec<u8>, ConvertStats)> {
    let text = std::str::from_utf8(bytes).map_err(|e| EncodeError::SourceDecode {
        offset: e.valid_up_to(),
    })?;
    convert_str(text, config)
}

/// Convert a UTF-8 text file to an RTF file.
///
/// The output is staged in a temporary file next to the destination and
/// renamed into place only once fully written, so a failed conversion
/// never leaves a partial destination file behind.
///
/// # Arguments
///
/// * `src` - Path to the UTF-8 text file to convert
/// * `dest` - Path where the RTF file will be saved
/// * `config` - Preamble configuration
///
/// # Returns
///
/// * `Ok(ConvertStats)` - Counters for the completed conversion
/// * `Err(EncodeError)` - If reading, decoding, or writing fails
///
/// # Example
///
/// ```ignore
/// use encoder::{convert_file, RtfConfig};
/// use std::path::Path;
///
/// let stats = convert_file(
///     Path::new("LICENSE.txt"),
///     Path::new("LICENSE.rtf"),
///     &RtfConfig::default(),
/// )?;
/// println!("wrote {} bytes", stats.output_bytes);
/// ```
pub fn convert_file(src: &Path, dest: &Path, config: &RtfConfig) -> EncodeResult<ConvertStats> {
    // Open the source file
    let file = File::open(src).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EncodeError::SourceNotFound(src.display().to_string())
        } else {
            EncodeError::Io(e)
        }
    })?;

    // Read entire file into memory
    let mut reader = BufReader::new(file);
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;

    let (rtf, stats) = convert_bytes(&content, config)?;

    // Stage in the destination directory so the rename never crosses a
    // filesystem; the temp file is removed automatically on failure.
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| EncodeError::sink_write(dest.display().to_string(), e))?;
    }

    let mut staged = NamedTempFile::new_in(dir)
        .map_err(|e| EncodeError::sink_write(dest.display().to_string(), e))?;
    staged
        .write_all(&rtf)
        .map_err(|e| EncodeError::sink_write(dest.display().to_string(), e))?;
    staged
        .persist(dest)
        .map_err(|e| EncodeError::sink_write(dest.display().to_string(), e.error))?;

    tracing::debug!(
        src = %src.display(),
        dest = %dest.display(),
        chars = stats.input_chars,
        bytes = stats.output_bytes,
        "converted text to RTF"
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_convert_str_matches_convert_bytes() {
        let config = RtfConfig::default();
        let (from_str, _) = convert_str("héllo\n", &config).unwrap();
        let (from_bytes, _) = convert_bytes("héllo\n".as_bytes(), &config).unwrap();
        assert_eq!(from_str, from_bytes);
    }

    #[test]
    fn test_convert_bytes_rejects_invalid_utf8() {
        let result = convert_bytes(&[b'o', b'k', 0xff, 0xfe], &RtfConfig::default());
        assert!(matches!(
            result,
            Err(EncodeError::SourceDecode { offset: 2 })
        ));
    }

    #[test]
    fn test_convert_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("LICENSE.txt");
        let dest = dir.path().join("LICENSE.rtf");
        std::fs::write(&src, "MIT License\n\nCopyright © 2024\n").unwrap();

        let stats = convert_file(&src, &dest, &RtfConfig::default()).unwrap();

        let rtf = std::fs::read(&dest).unwrap();
        assert!(rtf.starts_with(b"{\\rtf1"));
        assert!(rtf.ends_with(b"}"));
        assert!(rtf.iter().all(|&b| b < 128));
        assert_eq!(stats.paragraph_breaks, 3);
        assert_eq!(stats.unicode_escapes, 1); // the copyright sign
        assert_eq!(stats.output_bytes, rtf.len());
    }

    #[test]
    fn test_convert_file_creates_destination_directory() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("in.txt");
        let dest = dir.path().join("nested/out/doc.rtf");
        std::fs::write(&src, "text").unwrap();

        convert_file(&src, &dest, &RtfConfig::default()).unwrap();
        assert!(dest.exists());
    }

    #[test]
    fn test_convert_file_missing_source() {
        let dir = TempDir::new().unwrap();
        let result = convert_file(
            &dir.path().join("missing.txt"),
            &dir.path().join("out.rtf"),
            &RtfConfig::default(),
        );
        assert!(matches!(result, Err(EncodeError::SourceNotFound(_))));
    }

    #[test]
    fn test_convert_file_decode_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("binary.txt");
        let dest = dir.path().join("out.rtf");
        std::fs::write(&src, [0xde, 0xad, 0xbe, 0xef]).unwrap();

        let result = convert_file(&src, &dest, &RtfConfig::default());
        assert!(matches!(result, Err(EncodeError::SourceDecode { .. })));
        assert!(!dest.exists());
    }

    #[test]
    fn test_convert_file_sink_failure_leaves_no_partial_output() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("in.txt");
        std::fs::write(&src, "text").unwrap();

        // Destination parent is a regular file, so staging must fail
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let dest = blocker.join("out.rtf");

        let result = convert_file(&src, &dest, &RtfConfig::default());
        assert!(matches!(result, Err(EncodeError::SinkWrite { .. })));
        assert!(!dest.exists());
    }
}
