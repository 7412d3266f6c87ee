use tracing::error;

use crate::{
  handle::WindowHandle,
  host::{PaintSurface, WindowHost},
};

/// Scoped drawing context for one paint request.
///
/// Acquires the host's paint surface on construction and releases it on
/// drop, so the acquire/release pairing holds on every path out of a paint
/// handler, including a failed fill.
pub struct Painter<'a> {
  host: &'a dyn WindowHost,
  window: WindowHandle,
  surface: Option<PaintSurface>,
}

impl<'a> Painter<'a> {
  pub fn begin(host: &'a dyn WindowHost, window: WindowHandle) -> Self {
    let surface = host.begin_paint(window);
    Self {
      host,
      window,
      surface: Some(surface),
    }
  }

  /// Fill the invalidated region with the window-background color. A failed
  /// fill is cosmetic; it is logged and otherwise ignored.
  pub fn fill_background(&self) {
    if let Some(surface) = &self.surface {
      if !self.host.fill_background(surface) {
        error!("background fill failed for {:?}", self.window);
      }
    }
  }
}

impl Drop for Painter<'_> {
  fn drop(&mut self) {
    if let Some(surface) = self.surface.take() {
      self.host.end_paint(self.window, surface);
    }
  }
}

#[cfg(test)]
mod tests {
  use std::rc::Rc;

  use super::*;
  use crate::{host::mock::MockHost, window::dispatcher::Dispatcher};

  #[test]
  fn releases_exactly_once_without_a_fill() {
    let host = MockHost::new(Rc::new(Dispatcher::new()));
    let window = WindowHandle::from_raw(1);

    {
      let _painter = Painter::begin(&host, window);
    }
    assert_eq!(host.paints_begun(), 1);
    assert_eq!(host.paints_ended(), 1);
  }

  #[test]
  fn releases_exactly_once_when_the_fill_fails() {
    let host = MockHost::new(Rc::new(Dispatcher::new()));
    host.fail_fill();
    let window = WindowHandle::from_raw(1);

    {
      let painter = Painter::begin(&host, window);
      painter.fill_background();
      painter.fill_background();
    }
    assert_eq!(host.paints_begun(), 1);
    assert_eq!(host.paints_ended(), 1);
  }
}
