use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/*
  Opens the main window plus a tool window and logs the dispatch
  lifecycle (open, bind, release) while the pump runs. Closing the
  main window ends the process; closing the tool window does not.
*/

fn init_log() {
  tracing_subscriber::registry()
    .with(tracing_subscriber::fmt::layer())
    .with(
      tracing_subscriber::filter::Targets::new()
        .with_default(tracing::Level::ERROR)
        .with_target("winframe", tracing::Level::TRACE),
    )
    .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  init_log();
  run()
}

#[cfg(windows)]
fn run() -> Result<(), Box<dyn std::error::Error>> {
  use winframe::{host::win32, prelude::*};

  let instance = win32::module_handle()?;

  let main = Rc::new(RefCell::new(MainWindow::new()));
  let tool = Rc::new(RefCell::new(ToolWindow::new()));
  win32::with_host(|dispatcher, host| -> WindowResult<()> {
    dispatcher.open(host, main, instance, ShowCommand::Normal, "Sample")?;
    dispatcher.open(host, tool, instance, ShowCommand::Normal, "Sample Tools")?;
    Ok(())
  })?;

  win32::run_message_pump();
  Ok(())
}

#[cfg(not(windows))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
  eprintln!("the winframe sample needs a Win32 windowing subsystem");
  Ok(())
}
