use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

/// Width of rules and banners
pub const RULE_WIDTH: usize = 70;

pub fn header(text: &str) {
    if theme().quiet {
        return;
    }
    println!("{} {}", Icons::BROOM, text.style(theme().title.clone()));
}

pub fn status(icon: &str, label: &str, value: &str) {
    if theme().quiet {
        return;
    }
    println!("{} {}: {}", icon, label.style(theme().rule.clone()), value);
}

pub fn success(label: &str) {
    if theme().quiet {
        return;
    }
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

/// Transaction title followed by a thin rule
pub fn section(title: &str) {
    println!();
    println!("{}", title.style(theme().title.clone()));
    println!("{}", rule('-').style(theme().rule.clone()));
}

/// Text framed between two heavy rules
pub fn banner(text: &str) {
    if theme().quiet {
        return;
    }
    println!("{}", rule('='));
    println!("{}", text.style(theme().title.clone()));
    println!("{}", rule('='));
}

pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RULE_WIDTH).collect()
}
