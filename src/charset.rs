use encoding_rs::Encoding;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A concrete text encoding backed by the encoding_rs registry.
///
/// `name()` is the canonical registry name (`"UTF-8"`, `"windows-1252"`),
/// which is also what the report prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static Encoding);

impl Charset {
    pub fn utf8() -> Charset {
        Charset(encoding_rs::UTF_8)
    }

    /// Resolve a charset label (`"UTF-8"`, `"utf8"`, `"ISO-8859-1"`, ...)
    /// to a concrete encoding. Labels unknown to the registry are an error.
    pub fn for_label(label: &str) -> Result<Charset, ProbeError> {
        Encoding::for_label(label.trim().as_bytes())
            .map(Charset)
            .ok_or_else(|| ProbeError::UnsupportedEncoding(label.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.0
    }
}

/// How the process picks its default charset.
///
/// `Modern` is UTF-8 unconditionally; `Compat` restores the legacy
/// behavior where the default follows the host locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingProfile {
    #[default]
    Modern,
    Compat,
}

impl EncodingProfile {
    /// Only the exact value `COMPAT` selects the compat profile; `UTF-8`,
    /// unset, and unrecognized values all behave as the modern profile.
    pub fn from_value(value: Option<&str>) -> EncodingProfile {
        match value {
            Some("COMPAT") => EncodingProfile::Compat,
            _ => EncodingProfile::Modern,
        }
    }
}
