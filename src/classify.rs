use regex::Regex;
use crate::descriptor::{Arch, Os};

/// Detects the target OS from a release-asset filename.
///
/// `mac` and `osx` count as mac; anything that is neither mac nor linux
/// (windows, the BSDs, no marker at all) is [`Os::Other`].
pub fn detect_os(name: &str) -> Os {
    let os_re = Regex::new(r"(darwin|linux|(net|free|open)bsd|mac|osx|windows|win)").unwrap();
    let name = name.to_lowercase();
    match os_re.find(&name).map(|m| m.as_str()) {
        Some("darwin" | "mac" | "osx") => Os::Mac,
        Some("linux") => Os::Linux,
        _ => Os::Other,
    }
}

/// Detects the CPU architecture from a release-asset filename.
///
/// ARM is matched first so that `arm64` never falls into the 64-bit x86
/// bucket. Unknown arches default to 64-bit x86, the common case for
/// release archives that carry no marker at all.
pub fn detect_arch(name: &str) -> Arch {
    let arm_re = Regex::new(r"(arm64|aarch64|arm(v[567])?)\b").unwrap();
    let amd64_re = Regex::new(r"(amd64|x86_64)\b").unwrap();
    let i386_re = Regex::new(r"(386|686)\b").unwrap();
    let fuzz_32_re = Regex::new(r"(x?32(bit)?)\b").unwrap();

    let name = name.to_lowercase();
    if arm_re.is_match(&name) {
        Arch::Arm
    } else if amd64_re.is_match(&name) {
        Arch::X64
    } else if i386_re.is_match(&name) || fuzz_32_re.is_match(&name) {
        Arch::X86
    } else {
        // no marker, assume amd64
        Arch::X64
    }
}

/// Extracts the file extension of an archive name, keeping a `.tar` prefix,
/// so `my.file.tar.gz` yields `.tar.gz` and `my.file.gz` yields `.gz`.
pub fn file_ext(name: &str) -> String {
    let ext_re = Regex::new(r"(\.tar)?(\.[a-z][a-z0-9]+)$").unwrap();
    ext_re.find(name).map(|m| m.as_str().to_string()).unwrap_or_default()
}
