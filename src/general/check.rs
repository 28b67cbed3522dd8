use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{stderr, IsTerminal, Write};

// termcolor leaves the tty check to the caller
fn choose_color(enabled: bool, is_terminal: bool) -> ColorChoice {
    if enabled && is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn color_choice() -> ColorChoice {
    choose_color(crate::get_config().color, stderr().is_terminal())
}

fn print_stderr_colored(color: Color, text: &str) {
    let mut stderr = StandardStream::stderr(color_choice());
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(color)).set_intense(true));
    let _ = writeln!(&mut stderr, "{}", text);
    let _ = stderr.reset();
}

/// Print a fatal error in red on stderr.
pub fn print_error(err: &dyn std::fmt::Display) {
    print_stderr_colored(Color::Red, &format!("Error: {}", err));
}

pub fn print_warning(msg: &str) {
    print_stderr_colored(Color::Yellow, &format!("Warning: {}", msg));
}

/// Verbose trace line, only shown while debug is enabled.
pub fn debug_log(msg: &str) {
    if crate::is_debug_enabled() {
        let mut stderr = StandardStream::stderr(color_choice());
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)));
        let _ = writeln!(&mut stderr, "[debug] {}", msg);
        let _ = stderr.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_when_redirected() {
        assert_eq!(choose_color(true, false), ColorChoice::Never);
        assert_eq!(choose_color(false, true), ColorChoice::Never);
        assert_eq!(choose_color(true, true), ColorChoice::Auto);
    }
}
