//! Resolved output settings for one command.
//!
//! Color follows `--color`, then `[output] color`, then the terminal. Unicode
//! marks need both `[output] unicode` and a locale that can show them.

use is_terminal::IsTerminal;
use legajo::config::{ColorMode, Config};

use crate::cli::ColorWhen;
use crate::ui::style::Style;

const CI_VARS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "JENKINS_URL"];
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

/// What the process environment says about stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Terminal {
    pub tty: bool,
    pub no_color: bool,
    pub dumb: bool,
    pub ci: bool,
    pub ascii_locale: bool,
}

impl Terminal {
    fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    pub(crate) fn from_env(get: impl Fn(&str) -> Option<String>, tty: bool) -> Self {
        // The first locale variable that is set decides.
        let ascii_locale = LOCALE_VARS
            .iter()
            .find_map(|key| get(key))
            .is_some_and(|value| matches!(value.to_uppercase().as_str(), "C" | "POSIX"));

        Self {
            tty,
            no_color: get("NO_COLOR").is_some(),
            dumb: get("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb")),
            ci: CI_VARS.iter().any(|key| get(key).is_some()),
            ascii_locale,
        }
    }

    fn auto_color(&self) -> bool {
        self.tty && !self.no_color && !self.dumb && !self.ci
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::resolve(json, verbose, cli_color, config, Terminal::detect())
    }

    pub(crate) fn resolve(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        terminal: Terminal,
    ) -> Self {
        let color = match (cli_color, config.output.color) {
            (Some(ColorWhen::Never), _) => false,
            (Some(ColorWhen::Always), _) => true,
            (_, ColorMode::Never) => false,
            (_, ColorMode::Always) => true,
            (_, ColorMode::Auto) => terminal.auto_color(),
        };

        Self {
            json,
            verbose,
            color,
            unicode: config.output.unicode && !terminal.dumb && !terminal.ascii_locale,
        }
    }

    pub fn style(&self) -> Style {
        Style::new(self.color, self.unicode)
    }
}
