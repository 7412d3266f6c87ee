//! Opaque identifiers assigned by the host windowing subsystem.

/// Display handle assigned by the host once window creation succeeds.
///
/// A handler's handle is unset until creation and immutable afterwards; the
/// host never reuses a handle while its window is live, which is what makes
/// it usable as a registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(isize);

impl WindowHandle {
  pub const fn from_raw(raw: isize) -> Self {
    Self(raw)
  }

  pub const fn as_raw(self) -> isize {
    self.0
  }
}

/// Instance handle of the module that owns the window class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleHandle(isize);

impl ModuleHandle {
  pub const fn from_raw(raw: isize) -> Self {
    Self(raw)
  }

  pub const fn as_raw(self) -> isize {
    self.0
  }
}

/// Menu handle. The built-in window kinds never attach one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuHandle(isize);

impl MenuHandle {
  pub const fn from_raw(raw: isize) -> Self {
    Self(raw)
  }

  pub const fn as_raw(self) -> isize {
    self.0
  }
}

/// Drawing context id, only valid between paint acquire and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceContext(isize);

impl DeviceContext {
  pub const fn from_raw(raw: isize) -> Self {
    Self(raw)
  }

  pub const fn as_raw(self) -> isize {
    self.0
  }
}

/// Payload threaded through the host's creation call so the dispatcher can
/// establish the handle association on first contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreationToken(usize);

impl CreationToken {
  pub const fn from_raw(raw: usize) -> Self {
    Self(raw)
  }

  pub const fn as_raw(self) -> usize {
    self.0
  }
}
