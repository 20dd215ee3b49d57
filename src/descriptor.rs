use std::path::Path;
use serde::{Deserialize, Serialize};
use anyhow::{bail, Result};
use crate::classify::{detect_arch, detect_os};
use crate::error::RenderError;

/// Target operating system of a release asset.
///
/// Only mac and linux are modeled as distinct targets; everything else
/// (windows, the BSDs, ...) falls under `Other` and is treated like linux
/// when a formula branch has to pick a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Mac,
    Linux,
    Other,
}

/// Target CPU architecture of a release asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// 32-bit x86 (386/686).
    X86,
    /// 64-bit x86 (amd64/x86_64).
    X64,
    /// Any ARM flavor, 32- or 64-bit. Excluded from formula branches.
    Arm,
    Other,
}

/// One downloadable artifact of a release.
///
/// Assets keep their position: the descriptor's asset order decides the
/// order of the generated conditional branches, first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Release-asset filename, e.g. `serve_darwin_amd64.gz`. Optional,
    /// only used for display and for OS/arch classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub os: Os,
    pub arch: Arch,
    /// Download URL for this asset.
    pub url: String,
    /// Hex digest of the asset, when known. Recorded in the formula as an
    /// inert comment, never enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

impl Asset {
    /// Builds an asset by classifying OS and architecture from the
    /// release-asset filename.
    pub fn classified(name: &str, url: &str, checksum: Option<String>) -> Asset {
        Asset {
            name: Some(name.to_string()),
            os: detect_os(name),
            arch: detect_arch(name),
            url: url.to_string(),
            checksum,
        }
    }
}

/// How the install step of the generated formula picks the binary out of
/// the extracted archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InstallRule {
    /// Install the first file found in the archive root, renamed to the
    /// program name. Assumes exactly one file per archive.
    #[default]
    SingleFile,
    /// Install the named file from the archive, renamed to the program name.
    NamedFile(String),
}

/// Structured release metadata consumed by the renderers.
///
/// A descriptor is built once per render call from external release
/// metadata, consumed immutably, and discarded. Rendering is a pure
/// function of its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDescriptor {
    /// Repository/organization owning the release, e.g. `jpillora`.
    pub owner: String,
    /// Installed binary/command name, e.g. `serve`.
    pub program: String,
    /// Release tag, e.g. `1.7.2`.
    pub version: String,
    #[serde(default)]
    pub install: InstallRule,
    pub assets: Vec<Asset>,
}

impl ReleaseDescriptor {
    pub fn new(owner: &str, program: &str, version: &str) -> ReleaseDescriptor {
        ReleaseDescriptor {
            owner: owner.to_string(),
            program: program.to_string(),
            version: version.to_string(),
            assets: Vec::new(),
            install: InstallRule::default(),
        }
    }

    /// The GitHub repository URL this release belongs to.
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.program)
    }

    /// Checks the fields every renderer relies on.
    ///
    /// # Errors
    /// Returns [`RenderError::InvalidDescriptor`] if `owner`, `program` or
    /// `version` is empty, or if any asset has an empty URL.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.program.is_empty() {
            return Err(RenderError::InvalidDescriptor("program is empty".to_string()));
        }
        if self.owner.is_empty() {
            return Err(RenderError::InvalidDescriptor("owner is empty".to_string()));
        }
        if self.version.is_empty() {
            return Err(RenderError::InvalidDescriptor("version is empty".to_string()));
        }
        for (i, asset) in self.assets.iter().enumerate() {
            if asset.url.is_empty() {
                return Err(RenderError::InvalidDescriptor(
                    format!("asset #{} has an empty url", i + 1),
                ));
            }
        }
        Ok(())
    }

    /// Loads a descriptor from a JSON or TOML file, picked by extension.
    ///
    /// # Errors
    /// Returns an error if the file can't be read or deserialized.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ReleaseDescriptor> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "toml" => Ok(toml::from_str(&content)?),
            "json" => Ok(serde_json::from_str(&content)?),
            other => bail!("Unsupported descriptor format: '{}' (expected .json or .toml)", other),
        }
    }

    /// Saves the descriptor to a JSON or TOML file, picked by extension.
    ///
    /// # Errors
    /// Returns an error if the file can't be written or serialization fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let content = match ext {
            "toml" => toml::to_string_pretty(self)?,
            "json" => serde_json::to_string_pretty(self)?,
            other => bail!("Unsupported descriptor format: '{}' (expected .json or .toml)", other),
        };
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn serve_descriptor() -> ReleaseDescriptor {
        let mut d = ReleaseDescriptor::new("jpillora", "serve", "1.7.2");
        d.assets.push(Asset {
            name: Some("serve_darwin_amd64.gz".to_string()),
            os: Os::Mac,
            arch: Arch::X64,
            url: "https://github.com/jpillora/serve/releases/download/1.7.2/serve_darwin_amd64.gz"
                .to_string(),
            checksum: Some("b19b8a57925f5f51ea671f4919856fa470ef9832".to_string()),
        });
        d
    }

    #[test]
    fn test_repo_url() {
        let d = serve_descriptor();
        assert_eq!(d.repo_url(), "https://github.com/jpillora/serve");
    }

    #[test]
    fn test_validate_ok() {
        assert!(serve_descriptor().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_program() {
        let mut d = serve_descriptor();
        d.program = String::new();
        assert!(matches!(d.validate(), Err(RenderError::InvalidDescriptor(_))));
    }

    #[test]
    fn test_validate_empty_asset_url() {
        let mut d = serve_descriptor();
        d.assets[0].url = String::new();
        assert!(matches!(d.validate(), Err(RenderError::InvalidDescriptor(_))));
    }

    #[test]
    fn test_load_save_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("serve.json");
        let d = serve_descriptor();
        d.save(&path).unwrap();
        let loaded = ReleaseDescriptor::load(&path).unwrap();
        assert_eq!(loaded, d);
    }

    #[test]
    fn test_load_save_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("serve.toml");
        let d = serve_descriptor();
        d.save(&path).unwrap();
        let loaded = ReleaseDescriptor::load(&path).unwrap();
        assert_eq!(loaded, d);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("serve.yaml");
        std::fs::write(&path, "owner: jpillora").unwrap();
        assert!(ReleaseDescriptor::load(&path).is_err());
    }

    #[test]
    fn test_install_rule_defaults_to_single_file() {
        let json = r#"{"owner":"jpillora","program":"serve","version":"1.7.2","assets":[]}"#;
        let d: ReleaseDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(d.install, InstallRule::SingleFile);
    }
}
