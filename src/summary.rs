use crate::descriptor::ReleaseDescriptor;
use crate::error::RenderError;

/// Renders a plain-text summary of a release descriptor.
///
/// This is the human-readable counterpart of [`render_formula`]: repository,
/// owner, program, release and a numbered list of asset URLs, suitable for a
/// quick look at what a descriptor resolves to.
///
/// # Errors
/// Returns [`RenderError::InvalidDescriptor`] under the same conditions as
/// [`render_formula`].
///
/// [`render_formula`]: crate::formula::render_formula
pub fn render_summary(descriptor: &ReleaseDescriptor) -> Result<String, RenderError> {
    descriptor.validate()?;

    let mut out = String::new();
    out.push_str(&format!("repository: {}\n", descriptor.repo_url()));
    out.push_str(&format!("owner: {}\n", descriptor.owner));
    out.push_str(&format!("program: {}\n", descriptor.program));
    out.push_str(&format!("release: {}\n", descriptor.version));
    out.push_str("release assets:\n");
    for (i, asset) in descriptor.assets.iter().enumerate() {
        out.push_str(&format!("  [#{:02}] {}\n", i + 1, asset.url));
    }
    Ok(out)
}
