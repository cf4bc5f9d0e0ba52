//! Host platform capability.
//!
//! Path rules differ between Windows and everything else, so the normalizer
//! takes a [`HostPlatform`] value instead of asking the OS. Production code
//! uses [`HostPlatform::current`]; tests inject either branch.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The platform whose path conventions apply.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HostPlatform {
    /// Microsoft Windows (drive letters, UNC shares).
    Windows,
    /// Linux.
    Linux,
    /// macOS.
    #[serde(rename = "macos")]
    #[value(name = "macos")]
    MacOs,
    /// Any other POSIX-like system.
    Other,
}

impl HostPlatform {
    /// The platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    /// Whether Windows path rules apply.
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Parses a platform name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `field` for unknown platforms.
    pub fn parse(field: &str, s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "macos" | "darwin" => Ok(Self::MacOs),
            "other" => Ok(Self::Other),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Unknown platform: '{s}' (expected windows/linux/macos/other)"),
            }),
        }
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Linux => write!(f, "linux"),
            Self::MacOs => write!(f, "macos"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Returns the lowercase drive letter of the Windows system directory, e.g. `c:`.
///
/// The system directory is taken from `SystemRoot` (falling back to `windir`),
/// which Windows sets for every process.
///
/// # Errors
///
/// - [`Error::PlatformUnsupported`] when not running on Windows
/// - [`Error::SystemDriveUnavailable`] when the system directory is unknown
///   or does not start with a drive letter
pub fn get_windows_system_drive_letter() -> Result<String> {
    system_drive_letter_on(HostPlatform::current())
}

fn system_drive_letter_on(platform: HostPlatform) -> Result<String> {
    if !platform.is_windows() {
        return Err(Error::PlatformUnsupported {
            operation: "Windows system drive lookup",
            platform: platform.to_string(),
        });
    }

    let system_dir = env::var("SystemRoot")
        .or_else(|_| env::var("windir"))
        .map_err(|e| Error::SystemDriveUnavailable {
            reason: format!("system directory not set: {e}"),
        })?;

    drive_of(&system_dir).ok_or_else(|| Error::SystemDriveUnavailable {
        reason: format!("system directory has no drive letter: {system_dir}"),
    })
}

/// Extracts the lowercase `x:` drive prefix of a Windows path.
fn drive_of(path: &str) -> Option<String> {
    let mut chars = path.chars();
    let letter = chars.next()?;
    if letter.is_ascii_alphabetic() && chars.next() == Some(':') {
        Some(format!("{}:", letter.to_ascii_lowercase()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_matches_cfg() {
        assert_eq!(HostPlatform::current().is_windows(), cfg!(windows));
    }

    #[test]
    fn test_parse_platform() {
        assert_eq!(HostPlatform::parse("p", "Windows").unwrap(), HostPlatform::Windows);
        assert_eq!(HostPlatform::parse("p", "darwin").unwrap(), HostPlatform::MacOs);
        assert_eq!(HostPlatform::parse("p", "OTHER").unwrap(), HostPlatform::Other);
        assert!(HostPlatform::parse("p", "beos").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for p in [
            HostPlatform::Windows,
            HostPlatform::Linux,
            HostPlatform::MacOs,
            HostPlatform::Other,
        ] {
            assert_eq!(HostPlatform::parse("p", &p.to_string()).unwrap(), p);
        }
    }

    #[test]
    fn test_drive_of() {
        assert_eq!(drive_of(r"C:\Windows").as_deref(), Some("c:"));
        assert_eq!(drive_of("d:/winnt").as_deref(), Some("d:"));
        assert_eq!(drive_of(r"\\server\share"), None);
        assert_eq!(drive_of(""), None);
    }

    #[test]
    fn test_system_drive_rejected_off_windows() {
        let err = system_drive_letter_on(HostPlatform::Linux).unwrap_err();
        assert!(matches!(err, Error::PlatformUnsupported { .. }));
    }

    #[test]
    #[cfg(windows)]
    fn test_system_drive_on_windows() {
        let drive = get_windows_system_drive_letter().unwrap();
        assert_eq!(drive.len(), 2);
        assert!(drive.ends_with(':'));
        assert_eq!(drive, drive.to_lowercase());
    }
}
