use tracing::debug;

use crate::{
  error::{WindowError, WindowResult},
  handle::{ModuleHandle, WindowHandle},
  host::WindowHost,
  window::{
    handler::WindowMessageHandler,
    paint::Painter,
    settings::{ClassDescriptor, CreateRequest},
  },
};

pub mod dispatcher;
pub mod handler;
pub mod message;
pub mod paint;
pub mod settings;
pub mod tool;

/// The application's top-level window: a fixed-size frame with a title bar,
/// system menu and minimize box. Destroying it ends the message loop.
#[derive(Default)]
pub struct MainWindow {
  instance: Option<ModuleHandle>,
  window: Option<WindowHandle>,
  name: String,
}

impl MainWindow {
  pub fn new() -> Self {
    Self::default()
  }
}

impl WindowMessageHandler for MainWindow {
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
    let request = CreateRequest::new(name, instance);
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
        debug!("main window destroyed, requesting quit");
        host.post_quit(0);
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
