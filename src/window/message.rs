//! Message codes the built-in window kinds care about.
//!
//! A message is a `(code, primary, secondary)` triple delivered by the host.
//! The values match the Win32 message numbers so the Win32 backend forwards
//! raw codes unchanged; any other backend just has to reuse these constants.

/// First message delivered for a new window (`WM_NCCREATE`). Its creation
/// envelope carries the [`CreationToken`](crate::handle::CreationToken).
pub const CREATE: u32 = 0x0081;

/// Destroy notification (`WM_DESTROY`).
pub const DESTROY: u32 = 0x0002;

/// Last message delivered for a window (`WM_NCDESTROY`). Dissolves the
/// handle association.
pub const RELEASE: u32 = 0x0082;

/// Paint request (`WM_PAINT`).
pub const PAINT: u32 = 0x000F;
