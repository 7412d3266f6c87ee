use crate::{
  error::WindowResult,
  handle::{ModuleHandle, WindowHandle},
  host::WindowHost,
  window::settings::{ClassDescriptor, CreateRequest},
};

/// Message-handling policy of one window kind.
///
/// The [`Dispatcher`](crate::window::dispatcher::Dispatcher) holds handlers
/// as trait objects, so one dispatcher serves every window kind instead of
/// being specialized per concrete type.
pub trait WindowMessageHandler {
  /// Store the window's identity and describe how its class should be
  /// registered and the window created. Called at most once per instance,
  /// with a non-empty display name.
  fn initialize(
    &mut self,
    instance: ModuleHandle,
    name: &str,
  ) -> WindowResult<(ClassDescriptor, CreateRequest)>;

  /// The class identifier handed to [`initialize`](Self::initialize).
  /// Callable before creation; class registration needs it.
  fn class_name(&self) -> &str;

  /// The display handle, set once creation has succeeded.
  fn handle(&self) -> Option<WindowHandle>;

  /// Record the display handle on the handler. Called exactly once, by the
  /// dispatcher, while processing the creation message.
  fn bind_handle(&mut self, window: WindowHandle);

  /// React to one message. Total over all codes: unhandled codes delegate to
  /// the host's default handling, so this never fails.
  fn handle_message(
    &mut self,
    host: &dyn WindowHost,
    code: u32,
    primary: usize,
    secondary: isize,
  ) -> isize;
}
