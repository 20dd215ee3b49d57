use crate::descriptor::{Arch, Asset, InstallRule, Os, ReleaseDescriptor};
use crate::error::RenderError;

/// Turns a program name into a valid Ruby constant, e.g. `my-tool` becomes
/// `MyTool`. Names that would start with a digit get an `In` prefix.
pub fn ruby_class_name(program: &str) -> String {
    let mut class = String::with_capacity(program.len());
    let mut upper_next = true;
    for c in program.chars() {
        if c.is_ascii_alphanumeric() {
            if upper_next {
                class.extend(c.to_uppercase());
            } else {
                class.push(c);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }
    if !class.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        class.insert_str(0, "In");
    }
    class
}

/// The Ruby guard expression selecting an asset's platform at install time.
///
/// Only two OS categories exist in a formula: mac is `!OS.linux?` and
/// everything else is `OS.linux?`. Unknown arches count as 64-bit.
fn branch_guard(asset: &Asset) -> String {
    let os = match asset.os {
        Os::Mac => "!OS.linux?",
        Os::Linux | Os::Other => "OS.linux?",
    };
    let bits = match asset.arch {
        Arch::X86 => "!Hardware.is_64_bit?",
        Arch::X64 | Arch::Other | Arch::Arm => "Hardware.is_64_bit?",
    };
    format!("{} && {}", os, bits)
}

/// Renders a Homebrew-style formula for the given release.
///
/// The formula selects the download URL through an `if`/`elsif` chain, one
/// branch per non-ARM asset in descriptor order, closed by an unconditional
/// `else` that warns about an unsupported platform at install time. Output
/// is a pure function of the descriptor.
///
/// # Errors
/// Returns [`RenderError::InvalidDescriptor`] if `owner`, `program` or
/// `version` is empty, or if any asset has an empty URL.
///
/// # Example
///
/// ```
/// use brewgen::{Asset, ReleaseDescriptor, render_formula};
///
/// let mut d = ReleaseDescriptor::new("jpillora", "serve", "1.7.2");
/// d.assets.push(Asset::classified(
///     "serve_darwin_amd64.gz",
///     "https://github.com/jpillora/serve/releases/download/1.7.2/serve_darwin_amd64.gz",
///     None,
/// ));
/// let formula = render_formula(&d).unwrap();
/// assert!(formula.contains("class Serve < Formula"));
/// ```
pub fn render_formula(descriptor: &ReleaseDescriptor) -> Result<String, RenderError> {
    descriptor.validate()?;

    let mut out = String::new();
    out.push_str("require \"formula\"\n\n");
    out.push_str(&format!(
        "class {} < Formula\n",
        ruby_class_name(&descriptor.program)
    ));
    out.push_str(&format!("  homepage \"{}\"\n", descriptor.repo_url()));
    out.push_str(&format!("  version \"{}\"\n\n", descriptor.version));

    // ARM assets never get a branch: the formula is pinned to intel below.
    let branches: Vec<&Asset> = descriptor
        .assets
        .iter()
        .filter(|a| a.arch != Arch::Arm)
        .collect();

    if branches.is_empty() {
        out.push_str("  onoe \"Not supported\"\n");
    } else {
        for (i, asset) in branches.iter().enumerate() {
            let keyword = if i == 0 { "if" } else { "elsif" };
            out.push_str(&format!("  {} {}\n", keyword, branch_guard(asset)));
            out.push_str(&format!("    url \"{}\"\n", asset.url));
            if let Some(sum) = &asset.checksum {
                // recorded only: some checksum kinds can't be computed
                // without downloading the whole artifact
                out.push_str(&format!("    # sha256 \"{}\"\n", sum));
            }
        }
        out.push_str("  else\n");
        out.push_str("    onoe \"Not supported\"\n");
        out.push_str("  end\n");
    }

    out.push_str("\n  depends_on :arch => :intel\n\n");
    out.push_str("  def install\n");
    match &descriptor.install {
        InstallRule::SingleFile => {
            out.push_str(&format!(
                "    bin.install Dir[\"*\"][0] => \"{}\"\n",
                descriptor.program
            ));
        }
        InstallRule::NamedFile(file) => {
            out.push_str(&format!(
                "    bin.install \"{}\" => \"{}\"\n",
                file, descriptor.program
            ));
        }
    }
    out.push_str("  end\n\n");
    out.push_str("  def caveats\n");
    out.push_str(&format!(
        "    \"{} was installed using brewgen ({})\"\n",
        descriptor.program,
        descriptor.repo_url()
    ));
    out.push_str("  end\nend\n");
    Ok(out)
}
