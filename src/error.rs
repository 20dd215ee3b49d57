use thiserror::Error;

/// Failure modes of the renderers.
///
/// Rendering has no I/O and no external calls, so the only way it can fail
/// is a descriptor missing a required field. An unsupported platform is not
/// an error here: it is emitted as a runtime notice inside the generated
/// formula and surfaces when the formula is evaluated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A required descriptor field is missing or empty.
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
}
