use thiserror::Error;

pub type WindowResult<T> = Result<T, WindowError>;

/// The only two ways this crate can fail, both during window setup.
///
/// Message handling is total and registry misses fall back to the host's
/// default handling, so nothing past creation produces an error.
#[derive(Error, Debug)]
pub enum WindowError {
  /// The host rejected the class-registration descriptor, e.g. a duplicate
  /// class name or an invalid descriptor field.
  #[error("window class registration rejected: {0}")]
  Registration(String),
  /// The class was registered but the host could not create the window.
  /// The registration is not rolled back.
  #[error("window creation failed: {0}")]
  Creation(String),
}
