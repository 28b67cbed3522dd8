use std::error::Error;
use std::io::{stdin, stdout};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

mod config;
mod error;
mod general;
mod io;

// Verbose trace output, initialised from config.json
pub static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

static CONFIG: OnceLock<config::Config> = OnceLock::new();

/// Process-wide settings. Defaults until `run` has loaded config.json.
pub fn get_config() -> &'static config::Config {
    CONFIG.get_or_init(config::Config::default)
}

fn main() {
    match run() {
        Ok(_) => (),
        Err(err) => {
            general::check::print_error(&err);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let (loaded, warning) = config::load_config(Path::new(config::CONFIG_FILE));
    let _ = CONFIG.set(loaded);
    if let Some(msg) = warning {
        general::check::print_warning(&msg);
    }
    DEBUG_ENABLED.store(get_config().debug, Ordering::SeqCst);

    let stdin = stdin();
    let mut reader = stdin.lock();
    let mut out = stdout();

    let octave_line = io::input::read_octave(&mut reader, &mut out)?;
    let notes_line = io::input::read_note_map(&mut reader, &mut out)?;

    let shifted = general::shift::shift_line(&octave_line, &notes_line)?;
    io::output::write_shifted(&mut out, &shifted)?;
    Ok(())
}
