use std::{
  cell::{Cell, RefCell},
  collections::HashMap,
  rc::Rc,
};

use tracing::{debug, trace};

use crate::{
  error::WindowResult,
  handle::{CreationToken, ModuleHandle, WindowHandle},
  host::WindowHost,
  window::{handler::WindowMessageHandler, message, settings::ShowCommand},
};

pub type SharedHandler = Rc<RefCell<dyn WindowMessageHandler>>;

/// Registry of live windows and the trampoline that routes every host
/// message to the handler managing the targeted window.
///
/// The association is an explicit map owned here, keyed by the opaque
/// display handle; no per-window storage slot is borrowed from the host.
/// All state lives behind `RefCell` because delivery is strictly
/// sequential on one thread (the host pump blocks on each handler's
/// return). Do not share a dispatcher across threads.
pub struct Dispatcher {
  handlers: RefCell<HashMap<WindowHandle, SharedHandler>>,
  pending: RefCell<HashMap<CreationToken, SharedHandler>>,
  next_token: Cell<usize>,
}

impl Default for Dispatcher {
  fn default() -> Self {
    Self::new()
  }
}

impl Dispatcher {
  pub fn new() -> Self {
    Self {
      handlers: RefCell::new(HashMap::new()),
      pending: RefCell::new(HashMap::new()),
      next_token: Cell::new(1),
    }
  }

  /// Register the handler's window class and create its window.
  ///
  /// On success the handler has been bound to its display handle (the host
  /// delivered the creation message during `create_window`) and the window
  /// was shown according to `show`. On failure the handler is left without
  /// a handle and nothing stays enrolled; a class registered before a
  /// failing creation is not rolled back.
  pub fn open(
    &self,
    host: &dyn WindowHost,
    handler: SharedHandler,
    instance: ModuleHandle,
    show: ShowCommand,
    name: &str,
  ) -> WindowResult<WindowHandle> {
    let (class, request) = handler.borrow_mut().initialize(instance, name)?;
    host.register_class(&class)?;

    let token = self.enroll(handler);
    let window = match host.create_window(&request, token) {
      Ok(window) => window,
      Err(err) => {
        self.pending.borrow_mut().remove(&token);
        return Err(err);
      }
    };

    debug!("opened {window:?} with class {:?}", class.name);
    host.show_window(window, show);
    Ok(window)
  }

  /// Trampoline entry for the creation message: resolve the payload token to
  /// the enrolled handler, record the handle on it, store the association,
  /// then forward the message. An unknown token is not an error; the message
  /// goes to the host's default handling instead.
  pub fn dispatch_creation(
    &self,
    host: &dyn WindowHost,
    target: WindowHandle,
    payload: CreationToken,
    primary: usize,
    secondary: isize,
  ) -> isize {
    let handler = self.pending.borrow_mut().remove(&payload);
    let Some(handler) = handler else {
      trace!("creation message for {target:?} carries unknown payload {payload:?}");
      return host.default_handling(target, message::CREATE, primary, secondary);
    };

    handler.borrow_mut().bind_handle(target);
    self
      .handlers
      .borrow_mut()
      .insert(target, Rc::clone(&handler));
    debug!("bound {target:?}");

    let result = handler
      .borrow_mut()
      .handle_message(host, message::CREATE, primary, secondary);
    result
  }

  /// Trampoline entry for every message after creation: forward to the
  /// handler associated with `target` and return its result. A lookup miss
  /// (message before creation or after teardown) falls back to the host's
  /// default handling.
  pub fn dispatch(
    &self,
    host: &dyn WindowHost,
    target: WindowHandle,
    code: u32,
    primary: usize,
    secondary: isize,
  ) -> isize {
    let handler = self.handlers.borrow().get(&target).cloned();
    let result = match handler {
      Some(handler) => match handler.try_borrow_mut() {
        Ok(mut handler) => handler.handle_message(host, code, primary, secondary),
        // The host re-entered delivery while this handler was still running
        // a message; let default handling take it.
        Err(_) => host.default_handling(target, code, primary, secondary),
      },
      None => {
        trace!("no handler for {target:?}, message {code:#06x} goes to the host");
        host.default_handling(target, code, primary, secondary)
      }
    };

    if code == message::RELEASE && self.handlers.borrow_mut().remove(&target).is_some() {
      debug!("released {target:?}");
    }

    result
  }

  pub fn live_windows(&self) -> usize {
    self.handlers.borrow().len()
  }

  fn enroll(&self, handler: SharedHandler) -> CreationToken {
    let token = CreationToken::from_raw(self.next_token.get());
    self.next_token.set(token.as_raw() + 1);
    self.pending.borrow_mut().insert(token, handler);
    token
  }
}
