//! Template rendering with named styles.
//!
//! Templates are minijinja sources that never contain ANSI codes. They mark text
//! with `{{ value | style("name") }}`, and the `style` filter looks the name up in a
//! [`Theme`] of `console::Style`s. When color is off (piped output, `TERM=dumb`,
//! `--no-color`) the filter returns the text unchanged.
//!
//! A style name missing from the theme is rendered with [`MISSING_STYLE_INDICATOR`]
//! in front of the text, colored or not, so typos in templates show up in tests.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).force_styling(true).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }
}

pub fn stdout_supports_color() -> bool {
    Term::stdout().features().colors_supported()
}

/// Renders `template` with `data`, applying styles only when `use_color` is set.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    let styles = theme.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            styles.apply(&name, &text)
        } else {
            styles.apply_plain(&name, &text)
        }
    });

    env.render_str(template, data)
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let scale = |c: u8| (c as u16 * 5 / 255) as u8;
        16 + 36 * scale(r) + 6 * scale(g) + scale(b)
    }
}
