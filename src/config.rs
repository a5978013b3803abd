//! Startup configuration.
//!
//! All ambient reads (environment variables, locale) happen once in
//! `ProbeConfig::from_env`; everything downstream takes the immutable
//! `ProbeConfig` value, so the reporter is testable by injection.

use crate::charset::{Charset, EncodingProfile};
use std::env;

/// Selects the compat profile when set to `COMPAT`.
pub const FILE_ENCODING_VAR: &str = "ENCPROBE_FILE_ENCODING";
/// Explicit native-encoding label, taking precedence over locale detection.
pub const NATIVE_ENCODING_VAR: &str = "ENCPROBE_NATIVE_ENCODING";

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// The encoding used when none is specified for text I/O.
    pub default_charset: Charset,
    /// Raw label of the host's native encoding, if the environment
    /// exposes one. Resolved only when the probe file is opened.
    pub native_encoding: Option<String>,
    /// Effective file.encoding value for the active profile.
    pub file_encoding: Option<String>,
}

impl ProbeConfig {
    pub fn from_env() -> ProbeConfig {
        let profile = EncodingProfile::from_value(env::var(FILE_ENCODING_VAR).ok().as_deref());
        let native_encoding = env::var(NATIVE_ENCODING_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| locale_value().as_deref().and_then(locale_codeset));
        ProbeConfig::resolve(profile, native_encoding)
    }

    /// Derive the config for a profile and an optional native label.
    ///
    /// Under `Compat` the default charset follows the native label when it
    /// resolves, falling back to UTF-8 otherwise (a compat process still
    /// has to pick something). An unresolvable label is kept verbatim in
    /// `native_encoding` and reported; it fails later, at probe-file time.
    pub fn resolve(profile: EncodingProfile, native_encoding: Option<String>) -> ProbeConfig {
        let default_charset = match profile {
            EncodingProfile::Modern => Charset::utf8(),
            EncodingProfile::Compat => native_encoding
                .as_deref()
                .and_then(|label| Charset::for_label(label).ok())
                .unwrap_or_else(Charset::utf8),
        };
        ProbeConfig {
            default_charset,
            native_encoding,
            file_encoding: Some(default_charset.name().to_string()),
        }
    }
}

fn locale_value() -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.is_empty())
}

/// Extract the codeset half of a POSIX locale name: `en_US.UTF-8` yields
/// `UTF-8`. Bare `C`/`POSIX` report `US-ASCII`; a name with no codeset
/// yields nothing, which is how a host that exposes no native encoding
/// shows up.
fn locale_codeset(locale: &str) -> Option<String> {
    let locale = locale.split('@').next().unwrap_or(locale);
    if let Some((_, codeset)) = locale.split_once('.') {
        return Some(codeset.to_string()).filter(|c| !c.is_empty());
    }
    match locale {
        "C" | "POSIX" => Some("US-ASCII".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codeset_extracted_from_full_locale() {
        assert_eq!(locale_codeset("en_US.UTF-8").as_deref(), Some("UTF-8"));
        assert_eq!(locale_codeset("ja_JP.eucJP").as_deref(), Some("eucJP"));
        assert_eq!(
            locale_codeset("de_DE.ISO-8859-1@euro").as_deref(),
            Some("ISO-8859-1")
        );
        assert_eq!(locale_codeset("C.UTF-8").as_deref(), Some("UTF-8"));
    }

    #[test]
    fn minimal_locales_map_to_ascii() {
        assert_eq!(locale_codeset("C").as_deref(), Some("US-ASCII"));
        assert_eq!(locale_codeset("POSIX").as_deref(), Some("US-ASCII"));
    }

    #[test]
    fn locale_without_codeset_exposes_nothing() {
        assert_eq!(locale_codeset("en_US"), None);
        assert_eq!(locale_codeset("en_US."), None);
    }

    #[test]
    fn modern_profile_defaults_to_utf8_regardless_of_native() {
        let config = ProbeConfig::resolve(
            EncodingProfile::Modern,
            Some("ISO-8859-1".to_string()),
        );
        assert_eq!(config.default_charset.name(), "UTF-8");
        assert_eq!(config.native_encoding.as_deref(), Some("ISO-8859-1"));
        assert_eq!(config.file_encoding.as_deref(), Some("UTF-8"));
    }

    #[test]
    fn compat_profile_follows_native_label() {
        let config = ProbeConfig::resolve(
            EncodingProfile::Compat,
            Some("ISO-8859-1".to_string()),
        );
        assert_eq!(config.default_charset.name(), "windows-1252");
        assert_eq!(config.file_encoding.as_deref(), Some("windows-1252"));
    }

    #[test]
    fn compat_profile_without_native_falls_back_to_utf8() {
        let config = ProbeConfig::resolve(EncodingProfile::Compat, None);
        assert_eq!(config.default_charset.name(), "UTF-8");
        assert_eq!(config.native_encoding, None);
    }

    #[test]
    fn compat_profile_keeps_unresolvable_native_verbatim() {
        let config = ProbeConfig::resolve(EncodingProfile::Compat, Some("KLINGON".to_string()));
        assert_eq!(config.default_charset.name(), "UTF-8");
        assert_eq!(config.native_encoding.as_deref(), Some("KLINGON"));
    }
}
