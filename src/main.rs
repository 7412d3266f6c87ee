#[cfg(windows)]
fn main() -> Result<std::process::ExitCode, Box<dyn std::error::Error>> {
  use winframe::{host::win32, prelude::*};

  let instance = win32::module_handle()?;

  let main = Rc::new(RefCell::new(MainWindow::new()));
  let tool = Rc::new(RefCell::new(ToolWindow::new()));
  win32::with_host(|dispatcher, host| -> WindowResult<()> {
    dispatcher.open(host, main, instance, ShowCommand::Normal, "Sample")?;
    dispatcher.open(host, tool, instance, ShowCommand::Normal, "Sample Tools")?;
    Ok(())
  })?;

  let exit_code = win32::run_message_pump();
  Ok(std::process::ExitCode::from(exit_code as u8))
}

#[cfg(not(windows))]
fn main() {
  eprintln!("the winframe demo needs a Win32 windowing subsystem");
}
