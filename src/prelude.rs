pub use std::{cell::RefCell, rc::Rc};

pub use crate::{
  error::{WindowError, WindowResult},
  handle::{ModuleHandle, WindowHandle},
  host::WindowHost,
  window::{
    self,
    dispatcher::Dispatcher,
    handler::WindowMessageHandler,
    message,
    settings::{ShowCommand, Size, WindowStyle},
    tool::ToolWindow,
    MainWindow,
  },
};
