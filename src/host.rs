use crate::{
  error::WindowResult,
  handle::{CreationToken, DeviceContext, WindowHandle},
  window::settings::{ClassDescriptor, CreateRequest, ShowCommand},
};

#[cfg(test)]
pub(crate) mod mock;
#[cfg(windows)]
pub mod win32;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Rect {
  pub left: i32,
  pub top: i32,
  pub right: i32,
  pub bottom: i32,
}

/// The invalidated region and drawing context handed out by
/// [`WindowHost::begin_paint`]. Must be given back via `end_paint`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PaintSurface {
  pub device: DeviceContext,
  pub area: Rect,
}

/// Everything this crate asks of the host windowing subsystem.
///
/// Implemented by [`win32::Win32Host`] over the real Win32 API and by the
/// in-process mock host in tests. Implementations are used from a single
/// thread only; the dispatch machinery carries no synchronization of its own.
pub trait WindowHost {
  /// Submit a class-registration descriptor. The host installs its dispatch
  /// trampoline as the message callback for the class.
  fn register_class(&self, class: &ClassDescriptor) -> WindowResult<()>;

  /// Create a window of a previously registered class. The host delivers the
  /// creation message, carrying `payload` in its creation envelope, before
  /// this call returns.
  fn create_window(
    &self,
    request: &CreateRequest,
    payload: CreationToken,
  ) -> WindowResult<WindowHandle>;

  fn show_window(&self, window: WindowHandle, show: ShowCommand);

  /// Per-message default handling for codes the handler does not care about.
  fn default_handling(
    &self,
    window: WindowHandle,
    code: u32,
    primary: usize,
    secondary: isize,
  ) -> isize;

  /// Signal process-level quit intent to the host event loop.
  fn post_quit(&self, exit_code: i32);

  fn begin_paint(&self, window: WindowHandle) -> PaintSurface;

  /// Fill the surface with the window-background color. Returns whether the
  /// fill succeeded; callers treat a failed fill as cosmetic.
  fn fill_background(&self, surface: &PaintSurface) -> bool;

  fn end_paint(&self, window: WindowHandle, surface: PaintSurface);
}
