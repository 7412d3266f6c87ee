use crate::handle::{MenuHandle, ModuleHandle, WindowHandle};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Size {
  pub width: i32,
  pub height: i32,
}

impl Default for Size {
  fn default() -> Self {
    Self {
      width: 800,
      height: 600,
    }
  }
}

impl From<(i32, i32)> for Size {
  fn from(value: (i32, i32)) -> Self {
    Self {
      width: value.0,
      height: value.1,
    }
  }
}

/// Frame decorations and sizing behavior of a window.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WindowStyle {
  pub title_bar: bool,
  pub system_menu: bool,
  pub minimize_box: bool,
  pub maximize_box: bool,
  pub resizable: bool,
}

impl WindowStyle {
  /// Title bar, system menu and minimize box, but no resize or maximize.
  pub fn fixed() -> Self {
    Self {
      title_bar: true,
      system_menu: true,
      minimize_box: true,
      maximize_box: false,
      resizable: false,
    }
  }

  pub fn resizable() -> Self {
    Self {
      maximize_box: true,
      resizable: true,
      ..Self::fixed()
    }
  }
}

impl Default for WindowStyle {
  fn default() -> Self {
    Self::fixed()
  }
}

/// Class-level redraw behavior.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ClassStyle {
  pub redraw_on_width_change: bool,
  pub redraw_on_height_change: bool,
}

impl Default for ClassStyle {
  fn default() -> Self {
    Self {
      redraw_on_width_change: true,
      redraw_on_height_change: true,
    }
  }
}

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Icon {
  #[default]
  Application,
  None,
}

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cursor {
  #[default]
  Arrow,
}

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Brush {
  #[default]
  WindowBackground,
}

/// One-time description of a window kind, submitted to the host before any
/// window of that kind can be created. The message callback is not part of
/// the descriptor; the host installs the dispatch trampoline itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDescriptor {
  pub name: String,
  pub instance: ModuleHandle,
  pub style: ClassStyle,
  pub icon: Icon,
  pub cursor: Cursor,
  pub background: Brush,
}

impl ClassDescriptor {
  pub fn new(name: impl Into<String>, instance: ModuleHandle) -> Self {
    Self {
      name: name.into(),
      instance,
      style: ClassStyle::default(),
      icon: Icon::default(),
      cursor: Cursor::default(),
      background: Brush::default(),
    }
  }
}

/// A window-creation request. Position, parent and menu default to none,
/// letting the host pick placement for a top-level window.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRequest {
  pub extended_style: u32,
  pub class_name: String,
  pub title: String,
  pub style: WindowStyle,
  pub position: Option<(i32, i32)>,
  pub size: Size,
  pub parent: Option<WindowHandle>,
  pub menu: Option<MenuHandle>,
  pub instance: ModuleHandle,
}

impl CreateRequest {
  pub fn new(class_name: impl Into<String>, instance: ModuleHandle) -> Self {
    let class_name = class_name.into();
    Self {
      extended_style: 0,
      title: class_name.clone(),
      class_name,
      style: WindowStyle::default(),
      position: None,
      size: Size::default(),
      parent: None,
      menu: None,
      instance,
    }
  }

  pub fn with_title(mut self, title: impl Into<String>) -> Self {
    self.title = title.into();
    self
  }

  pub fn with_size(mut self, size: impl Into<Size>) -> Self {
    self.size = size.into();
    self
  }

  pub fn with_style(mut self, style: WindowStyle) -> Self {
    self.style = style;
    self
  }
}

/// How the host should display a window right after creation.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShowCommand {
  #[default]
  Normal,
  Minimized,
  Maximized,
  Hidden,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_size_matches_fixed_window() {
    let size = Size::default();
    assert_eq!(size.width, 800);
    assert_eq!(size.height, 600);
  }

  #[test]
  fn fixed_style_has_no_resize_or_maximize() {
    let style = WindowStyle::fixed();
    assert!(style.title_bar && style.system_menu && style.minimize_box);
    assert!(!style.maximize_box && !style.resizable);
  }

  #[test]
  fn create_request_defaults_to_top_level() {
    let request = CreateRequest::new("Sample", ModuleHandle::from_raw(1));
    assert_eq!(request.extended_style, 0);
    assert_eq!(request.title, "Sample");
    assert!(request.position.is_none());
    assert!(request.parent.is_none());
    assert!(request.menu.is_none());
  }
}
