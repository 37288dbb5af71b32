//! Terminal arcade demo (default binary).
//!
//! Runs the demo game on a crossterm-backed terminal. Set `RUST_LOG` to get
//! logs on stderr (redirect it, e.g. `2>arcade.log`, since the screen is in
//! raw mode while playing).

use anyhow::Result;

use tui_arcade::demo::{Demo, DEMO_SEED};
use tui_arcade::term::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();

    let mut term = TerminalRenderer::new();
    let mut game = Demo::new(DEMO_SEED);
    let mut machine = Demo::machine();

    // The driver restores the terminal before returning, on any path.
    machine.run(&mut game, &mut term)?;
    log::info!("bye");
    Ok(())
}
