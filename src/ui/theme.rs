//! Report styling, resolved once per process.
//!
//! Off a terminal every style is empty, so tables piped to a file or a test
//! harness contain no escape codes.

use crate::query::ResourceKind;
use owo_colors::{OwoColorize, Style};
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Theme {
    /// Transaction titles and banners
    pub title: Style,
    /// Horizontal rules under titles
    pub rule: Style,
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    /// `EMPLOYEE` tag in the combined resource report
    pub employee: Style,
    /// `EQUIPMENT` tag in the combined resource report
    pub equipment: Style,
    /// Suppress banners and status lines (`SUPERMAIDS_QUIET`)
    pub quiet: bool,
}

impl Theme {
    pub fn detect() -> Self {
        let quiet = std::env::var("SUPERMAIDS_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let base = if console::Term::stdout().is_term() {
            Self::colored()
        } else {
            Self::plain()
        };
        Self { quiet, ..base }
    }

    pub fn colored() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            rule: Style::new().bright_black(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow().bold(),
            employee: Style::new().blue().bold(),
            equipment: Style::new().magenta().bold(),
            quiet: false,
        }
    }

    pub fn plain() -> Self {
        Self {
            title: Style::new(),
            rule: Style::new(),
            success: Style::new(),
            error: Style::new(),
            warn: Style::new(),
            employee: Style::new(),
            equipment: Style::new(),
            quiet: false,
        }
    }

    /// The resource tag as it appears in a table cell
    pub fn tag(&self, kind: ResourceKind) -> String {
        let style = match kind {
            ResourceKind::Employee => self.employee.clone(),
            ResourceKind::Equipment => self.equipment.clone(),
        };
        kind.as_str().style(style).to_string()
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
