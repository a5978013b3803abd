//! The diagnostic report: three lines on stdout, then an empty probe
//! file bound to the resolved encoding.

use crate::charset::{Charset, ProbeError};
use crate::config::ProbeConfig;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const OUTPUT_FILE: &str = "file.txt";

/// Print the encoding report and create the probe file in the current
/// directory.
pub fn run_report(config: &ProbeConfig, out: &mut impl Write) -> Result<(), ProbeError> {
    write_report(config, out, Path::new(OUTPUT_FILE))
}

fn write_report(config: &ProbeConfig, out: &mut impl Write, path: &Path) -> Result<(), ProbeError> {
    writeln!(out, "default charset = {}", config.default_charset.name())?;
    writeln!(
        out,
        "native.encoding = {}",
        render_optional(config.native_encoding.as_deref())
    )?;
    writeln!(
        out,
        "file.encoding = {}",
        render_optional(config.file_encoding.as_deref())
    )?;

    // Resolve before touching the filesystem: an unsupported native label
    // must abort without creating or truncating the probe file.
    let charset = match config.native_encoding.as_deref() {
        Some(label) => Charset::for_label(label)?,
        None => config.default_charset,
    };

    // Scoped: the handle closes when it drops, on every exit path.
    let _writer = EncodedFileWriter::create(path, charset)?;
    Ok(())
}

fn render_optional(value: Option<&str>) -> &str {
    value.unwrap_or("null")
}

/// A writable file handle bound to a charset. Creating it truncates the
/// target; text written through it is encoded with the bound charset.
pub struct EncodedFileWriter {
    file: File,
    charset: Charset,
}

impl EncodedFileWriter {
    pub fn create(path: &Path, charset: Charset) -> Result<EncodedFileWriter, ProbeError> {
        let file = File::create(path)?;
        Ok(EncodedFileWriter { file, charset })
    }

    #[allow(dead_code)] // the diagnostic itself writes no content
    pub fn write_str(&mut self, text: &str) -> Result<(), ProbeError> {
        let (bytes, _, _) = self.charset.encoding().encode(text);
        self.file.write_all(&bytes)?;
        Ok(())
    }
}
