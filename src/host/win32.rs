//! Win32 implementation of [`WindowHost`] plus the `extern "system"` window
//! procedure that feeds raw messages into the dispatcher.
//!
//! Everything here runs on the thread that owns the message pump; the
//! dispatcher and host live in thread-local storage and carry no locks.

use core::ffi::c_void;
use std::{cell::RefCell, collections::HashMap};

use windows::{
  core::{HSTRING, PCWSTR},
  Win32::{
    Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM},
    Graphics::Gdi::{BeginPaint, EndPaint, FillRect, COLOR_WINDOW, HBRUSH, HDC, PAINTSTRUCT},
    System::LibraryLoader::GetModuleHandleW,
    UI::WindowsAndMessaging::{
      self,
      CreateWindowExW,
      DefWindowProcW,
      DispatchMessageW,
      GetMessageW,
      LoadCursorW,
      LoadIconW,
      PostQuitMessage,
      RegisterClassExW,
      ShowWindow,
      TranslateMessage,
      CREATESTRUCTW,
      HICON,
      HMENU,
      MSG,
      SHOW_WINDOW_CMD,
      WINDOW_EX_STYLE,
      WINDOW_STYLE,
      WNDCLASSEXW,
      WNDCLASS_STYLES,
    },
  },
};

use crate::{
  error::{WindowError, WindowResult},
  handle::{CreationToken, DeviceContext, ModuleHandle, WindowHandle},
  host::{PaintSurface, Rect, WindowHost},
  window::{
    dispatcher::Dispatcher,
    message,
    settings::{
      Brush,
      ClassDescriptor,
      ClassStyle,
      CreateRequest,
      Cursor,
      Icon,
      ShowCommand,
      WindowStyle,
    },
  },
};

thread_local! {
  static DISPATCHER: Dispatcher = Dispatcher::new();
  static HOST: Win32Host = Win32Host::new();
}

/// Run `f` against this thread's dispatcher and host. The same pair serves
/// both application code and the window procedure, which is what lets the
/// procedure find the registry that `Dispatcher::open` enrolled into.
pub fn with_host<R>(f: impl FnOnce(&Dispatcher, &Win32Host) -> R) -> R {
  DISPATCHER.with(|dispatcher| HOST.with(|host| f(dispatcher, host)))
}

/// Instance handle of the running module.
pub fn module_handle() -> windows::core::Result<ModuleHandle> {
  let module = unsafe { GetModuleHandleW(None) }?;
  Ok(ModuleHandle::from_raw(module.0 as isize))
}

/// Pump messages until the quit signal arrives; returns the quit exit code.
pub fn run_message_pump() -> i32 {
  let mut msg = MSG::default();
  while unsafe { GetMessageW(&mut msg, None, 0, 0) }.as_bool() {
    unsafe {
      let _ = TranslateMessage(&msg);
      DispatchMessageW(&msg);
    }
  }
  msg.wParam.0 as i32
}

pub struct Win32Host {
  // PAINTSTRUCTs held between begin_paint and end_paint, keyed by window.
  paints: RefCell<HashMap<isize, PAINTSTRUCT>>,
}

impl Default for Win32Host {
  fn default() -> Self {
    Self::new()
  }
}

impl Win32Host {
  pub fn new() -> Self {
    Self {
      paints: RefCell::new(HashMap::new()),
    }
  }
}

impl WindowHost for Win32Host {
  fn register_class(&self, class: &ClassDescriptor) -> WindowResult<()> {
    let name = HSTRING::from(class.name.as_str());
    let descriptor = WNDCLASSEXW {
      cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
      style: class_style(class.style),
      lpfnWndProc: Some(wnd_proc),
      hInstance: to_hinstance(class.instance),
      hIcon: load_icon(class.icon)?,
      hCursor: load_cursor(class.cursor)?,
      hbrBackground: background_brush(class.background),
      lpszClassName: PCWSTR(name.as_ptr()),
      ..Default::default()
    };

    let atom = unsafe { RegisterClassExW(&descriptor) };
    if atom == 0 {
      return Err(WindowError::Registration(
        windows::core::Error::from_win32().to_string(),
      ));
    }
    Ok(())
  }

  fn create_window(
    &self,
    request: &CreateRequest,
    payload: CreationToken,
  ) -> WindowResult<WindowHandle> {
    let class_name = HSTRING::from(request.class_name.as_str());
    let title = HSTRING::from(request.title.as_str());
    let (x, y) = request
      .position
      .unwrap_or((WindowsAndMessaging::CW_USEDEFAULT, WindowsAndMessaging::CW_USEDEFAULT));
    // Null handles mean "no parent" and "no menu" to the host.
    let parent = request.parent.map(to_hwnd).unwrap_or_default();
    let menu = request
      .menu
      .map(|menu| HMENU(menu.as_raw() as *mut c_void))
      .unwrap_or_default();

    let hwnd = unsafe {
      CreateWindowExW(
        WINDOW_EX_STYLE(request.extended_style),
        &class_name,
        &title,
        window_style(request.style),
        x,
        y,
        request.size.width,
        request.size.height,
        parent,
        menu,
        to_hinstance(request.instance),
        Some(payload.as_raw() as *const c_void),
      )
    }
    .map_err(|err| WindowError::Creation(err.to_string()))?;

    Ok(WindowHandle::from_raw(hwnd.0 as isize))
  }

  fn show_window(&self, window: WindowHandle, show: ShowCommand) {
    let _ = unsafe { ShowWindow(to_hwnd(window), show_command(show)) };
  }

  fn default_handling(
    &self,
    window: WindowHandle,
    code: u32,
    primary: usize,
    secondary: isize,
  ) -> isize {
    unsafe { DefWindowProcW(to_hwnd(window), code, WPARAM(primary), LPARAM(secondary)) }.0
  }

  fn post_quit(&self, exit_code: i32) {
    unsafe { PostQuitMessage(exit_code) };
  }

  fn begin_paint(&self, window: WindowHandle) -> PaintSurface {
    let mut paint = PAINTSTRUCT::default();
    let device = unsafe { BeginPaint(to_hwnd(window), &mut paint) };
    let surface = PaintSurface {
      device: DeviceContext::from_raw(device.0 as isize),
      area: Rect {
        left: paint.rcPaint.left,
        top: paint.rcPaint.top,
        right: paint.rcPaint.right,
        bottom: paint.rcPaint.bottom,
      },
    };
    self.paints.borrow_mut().insert(window.as_raw(), paint);
    surface
  }

  fn fill_background(&self, surface: &PaintSurface) -> bool {
    let area = RECT {
      left: surface.area.left,
      top: surface.area.top,
      right: surface.area.right,
      bottom: surface.area.bottom,
    };
    let device = HDC(surface.device.as_raw() as *mut c_void);
    unsafe { FillRect(device, &area, window_background()) != 0 }
  }

  fn end_paint(&self, window: WindowHandle, _surface: PaintSurface) {
    if let Some(paint) = self.paints.borrow_mut().remove(&window.as_raw()) {
      let _ = unsafe { EndPaint(to_hwnd(window), &paint) };
    }
  }
}

/// The single entry point the host invokes for every message to a window of
/// a class registered through [`Win32Host::register_class`]. Unwraps the
/// creation envelope, then hands routing to the dispatcher.
extern "system" fn wnd_proc(
  hwnd: HWND,
  code: u32,
  wparam: WPARAM,
  lparam: LPARAM,
) -> LRESULT {
  let target = WindowHandle::from_raw(hwnd.0 as isize);

  if code == message::CREATE {
    let envelope = lparam.0 as *const CREATESTRUCTW;
    if envelope.is_null() {
      return unsafe { DefWindowProcW(hwnd, code, wparam, lparam) };
    }
    let payload = CreationToken::from_raw(unsafe { (*envelope).lpCreateParams } as usize);
    let result = with_host(|dispatcher, host| {
      dispatcher.dispatch_creation(host, target, payload, wparam.0, lparam.0)
    });
    return LRESULT(result);
  }

  let result =
    with_host(|dispatcher, host| dispatcher.dispatch(host, target, code, wparam.0, lparam.0));
  LRESULT(result)
}

fn to_hwnd(window: WindowHandle) -> HWND {
  HWND(window.as_raw() as *mut c_void)
}

fn to_hinstance(instance: ModuleHandle) -> HINSTANCE {
  HINSTANCE(instance.as_raw() as *mut c_void)
}

fn class_style(style: ClassStyle) -> WNDCLASS_STYLES {
  let mut flags = WNDCLASS_STYLES::default();
  if style.redraw_on_width_change {
    flags |= WindowsAndMessaging::CS_HREDRAW;
  }
  if style.redraw_on_height_change {
    flags |= WindowsAndMessaging::CS_VREDRAW;
  }
  flags
}

fn window_style(style: WindowStyle) -> WINDOW_STYLE {
  let mut flags = WindowsAndMessaging::WS_OVERLAPPED;
  if style.title_bar {
    flags |= WindowsAndMessaging::WS_CAPTION;
  }
  if style.system_menu {
    flags |= WindowsAndMessaging::WS_SYSMENU;
  }
  if style.minimize_box {
    flags |= WindowsAndMessaging::WS_MINIMIZEBOX;
  }
  if style.maximize_box {
    flags |= WindowsAndMessaging::WS_MAXIMIZEBOX;
  }
  if style.resizable {
    flags |= WindowsAndMessaging::WS_THICKFRAME;
  }
  flags
}

fn show_command(show: ShowCommand) -> SHOW_WINDOW_CMD {
  match show {
    ShowCommand::Normal => WindowsAndMessaging::SW_SHOWNORMAL,
    ShowCommand::Minimized => WindowsAndMessaging::SW_SHOWMINIMIZED,
    ShowCommand::Maximized => WindowsAndMessaging::SW_SHOWMAXIMIZED,
    ShowCommand::Hidden => WindowsAndMessaging::SW_HIDE,
  }
}

fn load_icon(icon: Icon) -> WindowResult<HICON> {
  match icon {
    Icon::Application => unsafe { LoadIconW(None, WindowsAndMessaging::IDI_APPLICATION) }
      .map_err(|err| WindowError::Registration(err.to_string())),
    Icon::None => Ok(HICON::default()),
  }
}

fn load_cursor(cursor: Cursor) -> WindowResult<windows::Win32::UI::WindowsAndMessaging::HCURSOR> {
  match cursor {
    Cursor::Arrow => unsafe { LoadCursorW(None, WindowsAndMessaging::IDC_ARROW) }
      .map_err(|err| WindowError::Registration(err.to_string())),
  }
}

fn background_brush(brush: Brush) -> HBRUSH {
  match brush {
    Brush::WindowBackground => window_background(),
  }
}

fn window_background() -> HBRUSH {
  HBRUSH((COLOR_WINDOW.0 + 1) as usize as *mut c_void)
}
