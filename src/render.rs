//! Terminal rendering of response packages
//!
//! Formatting flags and color map onto an `nu_ansi_term::Style`.

use nu_ansi_term::{Color, Style};

use crate::protocol::Package;

/// Shown when a response carries no payload
pub const EMPTY_PAYLOAD: &str = "<empty>";

/// Payload text, lossily decoded as UTF-8
pub fn render_plain(package: &Package) -> String {
    match &package.payload {
        Some(payload) => String::from_utf8_lossy(payload).into_owned(),
        None => EMPTY_PAYLOAD.to_string(),
    }
}

/// Terminal style described by the package's flags and color
///
/// The foreground is always a 24-bit color, so `0,0,0` renders as black
/// rather than the terminal default.
pub fn style(package: &Package) -> Style {
    let mut style = Color::Rgb(package.red, package.green, package.blue).normal();
    if package.bold {
        style = style.bold();
    }
    if package.italic {
        style = style.italic();
    }
    if package.underlined {
        style = style.underline();
    }
    if package.blink {
        style = style.blink();
    }
    style
}

/// Payload text wrapped in the package's style
pub fn render(package: &Package) -> String {
    style(package).paint(render_plain(package)).to_string()
}
