//! Scriptable in-process host for exercising the dispatch machinery without
//! a windowing subsystem. Records every outbound call and can be told to
//! fail registration, creation, or background fills.

use std::{
  cell::{Cell, RefCell},
  rc::Rc,
};

use crate::{
  error::{WindowError, WindowResult},
  handle::{CreationToken, DeviceContext, WindowHandle},
  host::{PaintSurface, Rect, WindowHost},
  window::{
    dispatcher::Dispatcher,
    settings::{ClassDescriptor, CreateRequest, ShowCommand},
  },
};

pub(crate) struct MockHost {
  dispatcher: Rc<Dispatcher>,
  next_window: Cell<isize>,
  fail_registration: Cell<bool>,
  fail_creation: Cell<bool>,
  fail_fill: Cell<bool>,
  default_result: Cell<isize>,
  registered: RefCell<Vec<ClassDescriptor>>,
  created: RefCell<Vec<WindowHandle>>,
  shown: RefCell<Vec<(WindowHandle, ShowCommand)>>,
  defaulted: RefCell<Vec<(WindowHandle, u32)>>,
  quit_signals: RefCell<Vec<i32>>,
  paints_begun: Cell<u32>,
  paints_ended: Cell<u32>,
}

impl MockHost {
  pub fn new(dispatcher: Rc<Dispatcher>) -> Self {
    Self {
      dispatcher,
      next_window: Cell::new(0x100),
      fail_registration: Cell::new(false),
      fail_creation: Cell::new(false),
      fail_fill: Cell::new(false),
      default_result: Cell::new(0),
      registered: RefCell::new(Vec::new()),
      created: RefCell::new(Vec::new()),
      shown: RefCell::new(Vec::new()),
      defaulted: RefCell::new(Vec::new()),
      quit_signals: RefCell::new(Vec::new()),
      paints_begun: Cell::new(0),
      paints_ended: Cell::new(0),
    }
  }

  /// Deliver one message the way the host pump would.
  pub fn deliver(
    &self,
    target: WindowHandle,
    code: u32,
    primary: usize,
    secondary: isize,
  ) -> isize {
    self
      .dispatcher
      .dispatch(self, target, code, primary, secondary)
  }

  pub fn fail_registration(&self) {
    self.fail_registration.set(true);
  }

  pub fn fail_creation(&self) {
    self.fail_creation.set(true);
  }

  pub fn fail_fill(&self) {
    self.fail_fill.set(true);
  }

  pub fn set_default_result(&self, result: isize) {
    self.default_result.set(result);
  }

  pub fn classes_registered(&self) -> usize {
    self.registered.borrow().len()
  }

  pub fn windows_created(&self) -> usize {
    self.created.borrow().len()
  }

  pub fn shown(&self) -> Vec<(WindowHandle, ShowCommand)> {
    self.shown.borrow().clone()
  }

  pub fn defaulted(&self) -> Vec<(WindowHandle, u32)> {
    self.defaulted.borrow().clone()
  }

  pub fn quit_signals(&self) -> usize {
    self.quit_signals.borrow().len()
  }

  pub fn paints_begun(&self) -> u32 {
    self.paints_begun.get()
  }

  pub fn paints_ended(&self) -> u32 {
    self.paints_ended.get()
  }
}

impl WindowHost for MockHost {
  fn register_class(&self, class: &ClassDescriptor) -> WindowResult<()> {
    if self.fail_registration.get() {
      return Err(WindowError::Registration(
        "mock host refused the descriptor".to_owned(),
      ));
    }
    self.registered.borrow_mut().push(class.clone());
    Ok(())
  }

  fn create_window(
    &self,
    _request: &CreateRequest,
    payload: CreationToken,
  ) -> WindowResult<WindowHandle> {
    if self.fail_creation.get() {
      return Err(WindowError::Creation(
        "mock host is out of windows".to_owned(),
      ));
    }
    let window = WindowHandle::from_raw(self.next_window.get());
    self.next_window.set(window.as_raw() + 1);
    self.created.borrow_mut().push(window);

    // The real host delivers the creation message before returning.
    self
      .dispatcher
      .dispatch_creation(self, window, payload, 0, 0);
    Ok(window)
  }

  fn show_window(&self, window: WindowHandle, show: ShowCommand) {
    self.shown.borrow_mut().push((window, show));
  }

  fn default_handling(
    &self,
    window: WindowHandle,
    code: u32,
    _primary: usize,
    _secondary: isize,
  ) -> isize {
    self.defaulted.borrow_mut().push((window, code));
    self.default_result.get()
  }

  fn post_quit(&self, exit_code: i32) {
    self.quit_signals.borrow_mut().push(exit_code);
  }

  fn begin_paint(&self, window: WindowHandle) -> PaintSurface {
    self.paints_begun.set(self.paints_begun.get() + 1);
    PaintSurface {
      device: DeviceContext::from_raw(0x1000 + window.as_raw()),
      area: Rect {
        left: 0,
        top: 0,
        right: 800,
        bottom: 600,
      },
    }
  }

  fn fill_background(&self, _surface: &PaintSurface) -> bool {
    !self.fail_fill.get()
  }

  fn end_paint(&self, _window: WindowHandle, _surface: PaintSurface) {
    self.paints_ended.set(self.paints_ended.get() + 1);
  }
}
