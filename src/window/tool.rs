use tracing::debug;

use crate::{
  error::{WindowError, WindowResult},
  handle::{ModuleHandle, WindowHandle},
  host::WindowHost,
  window::{
    handler::WindowMessageHandler,
    message,
    paint::Painter,
    settings::{ClassDescriptor, CreateRequest, WindowStyle},
  },
};

/// An auxiliary window: resizable, smaller than the main window, and its
/// destruction does not end the message loop.
#[derive(Default)]
pub struct ToolWindow {
  instance: Option<ModuleHandle>,
  window: Option<WindowHandle>,
  name: String,
}

impl ToolWindow {
  pub const DEFAULT_SIZE: (i32, i32) = (480, 320);

  pub fn new() -> Self {
    Self::default()
  }
}

impl WindowMessageHandler for ToolWindow {
  fn initialize(
    &mut self,
    instance: ModuleHandle,
    name: &str,
  ) -> WindowResult<(ClassDescriptor, CreateRequest)> {
    debug_assert!(self.instance.is_none(), "initialize called twice");
    if name.is_empty() {
      return Err(WindowError::Registration(
        "window name must not be empty".to_owned(),
      ));
    }

    self.instance = Some(instance);
    self.name = name.to_owned();

    let class = ClassDescriptor::new(name, instance);
    let request = CreateRequest::new(name, instance)
      .with_style(WindowStyle::resizable())
      .with_size(Self::DEFAULT_SIZE);
    Ok((class, request))
  }

  fn class_name(&self) -> &str {
    &self.name
  }

  fn handle(&self) -> Option<WindowHandle> {
    self.window
  }

  fn bind_handle(&mut self, window: WindowHandle) {
    debug_assert!(self.window.is_none(), "handle bound twice");
    self.window = Some(window);
  }

  fn handle_message(
    &mut self,
    host: &dyn WindowHost,
    code: u32,
    primary: usize,
    secondary: isize,
  ) -> isize {
    match code {
      message::DESTROY => {
        debug!("tool window {:?} destroyed", self.window);
        0
      }
      message::PAINT => {
        if let Some(window) = self.window {
          let painter = Painter::begin(host, window);
          painter.fill_background();
        }
        0
      }
      _ => match self.window {
        Some(window) => host.default_handling(window, code, primary, secondary),
        None => 0,
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use super::*;
  use crate::{
    host::mock::MockHost,
    window::{dispatcher::Dispatcher, settings::ShowCommand},
  };

  fn instance() -> ModuleHandle {
    ModuleHandle::from_raw(0x4000_0000)
  }

  #[test]
  fn requests_a_resizable_frame() {
    let mut tool = ToolWindow::new();
    let (_, request) = tool.initialize(instance(), "Tool").unwrap();
    assert!(request.style.resizable);
    assert!(request.style.maximize_box);
    assert_eq!(
      (request.size.width, request.size.height),
      ToolWindow::DEFAULT_SIZE
    );
  }

  #[test]
  fn destroy_does_not_signal_quit() {
    let dispatcher = Rc::new(Dispatcher::new());
    let host = MockHost::new(Rc::clone(&dispatcher));

    let tool = Rc::new(RefCell::new(ToolWindow::new()));
    let window = dispatcher
      .open(&host, tool, instance(), ShowCommand::Normal, "Tool")
      .unwrap();

    assert_eq!(host.deliver(window, message::DESTROY, 0, 0), 0);
    assert_eq!(host.quit_signals(), 0);
  }
}
