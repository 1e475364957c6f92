//! Decides whether escape sequences should be emitted by default.
//!
//! The decision is a pure function of an [`Environment`] snapshot. The
//! process wide answer, [`is_color_supported`], captures the real process
//! once and caches the result for the lifetime of the process.

use std::collections::HashMap;
use std::env;
use std::io::{self, IsTerminal};
use std::sync::OnceLock;

static COLOR_SUPPORTED: OnceLock<bool> = OnceLock::new();

/// A snapshot of everything the capability check looks at.
///
/// Missing pieces are treated as empty: no variables, no arguments, not a
/// terminal, an unknown platform.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Environment {
    vars: HashMap<String, String>,
    args: Vec<String>,
    stdout_is_tty: bool,
    os: String,
}

impl Environment {
    /// An environment with nothing in it. Color is disabled for this
    /// environment.
    pub fn empty() -> Environment {
        Environment::default()
    }

    /// Capture the environment of the current process.
    ///
    /// Variables and arguments that aren't valid UTF-8 are converted lossily.
    pub fn capture() -> Environment {
        Environment {
            vars: env::vars_os()
                .map(|(k, v)| {
                    (
                        k.to_string_lossy().into_owned(),
                        v.to_string_lossy().into_owned(),
                    )
                })
                .collect(),
            args: env::args_os()
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
            stdout_is_tty: io::stdout().is_terminal(),
            os: env::consts::OS.to_string(),
        }
    }

    /// Set an environment variable in this snapshot.
    pub fn with_var(mut self, key: &str, value: &str) -> Environment {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Append a command line argument to this snapshot.
    pub fn with_arg(mut self, arg: &str) -> Environment {
        self.args.push(arg.to_string());
        self
    }

    /// Set whether stdout is attached to a terminal.
    pub fn with_tty(mut self, yes: bool) -> Environment {
        self.stdout_is_tty = yes;
        self
    }

    /// Set the platform identifier, using the names of
    /// [`std::env::consts::OS`] (e.g. `"linux"`, `"windows"`).
    pub fn with_os(mut self, os: &str) -> Environment {
        self.os = os.to_string();
        self
    }

    /// Returns the value of `key`, if set.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns true if `key` is set to a non-empty value.
    pub fn var_is_set(&self, key: &str) -> bool {
        self.var(key).is_some_and(|v| !v.is_empty())
    }

    /// Returns true if `flag` is one of the arguments, matched exactly.
    pub fn has_arg(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }

    /// Returns true if stdout is attached to a terminal.
    pub fn is_tty(&self) -> bool {
        self.stdout_is_tty
    }

    /// Returns true if the platform is Windows.
    pub fn is_windows(&self) -> bool {
        self.os == "windows"
    }
}

/// The individual signals that feed into the decision.
#[derive(Clone, Copy, Debug)]
struct Signals {
    no_color: bool,
    force: bool,
    windows: bool,
    tty: bool,
    ci: bool,
}

impl Signals {
    fn read(env: &Environment) -> Signals {
        Signals {
            no_color: env.var_is_set("NO_COLOR") || env.has_arg("--no-color"),
            force: env.var_is_set("FORCE_COLOR") || env.has_arg("--color"),
            windows: env.is_windows(),
            // An unset TERM doesn't count as dumb.
            tty: env.is_tty() && env.var("TERM") != Some("dumb"),
            // Any CI value counts, even an empty one.
            ci: env.var("CI").is_some(),
        }
    }

    fn allows_color(&self) -> bool {
        !self.no_color && (self.force || self.windows || self.tty || self.ci)
    }
}

/// Returns true if `env` supports color output.
///
/// `NO_COLOR` (non-empty) or a `--no-color` argument always disables color.
/// Otherwise color is enabled by any of: a non-empty `FORCE_COLOR`, a
/// `--color` argument, the Windows platform, a terminal on stdout with
/// `TERM` other than `dumb`, or `CI` set to any value.
pub fn supports_color(env: &Environment) -> bool {
    Signals::read(env).allows_color()
}

/// Returns true if the current process supports color output.
///
/// The process environment is inspected on the first call only. Later
/// changes to the environment have no effect; build a table with
/// [`create_colors`](crate::create_colors) to override the decision.
pub fn is_color_supported() -> bool {
    if let Some(&enabled) = COLOR_SUPPORTED.get() {
        return enabled;
    }
    let signals = Signals::read(&Environment::capture());
    let enabled = signals.allows_color();
    // The event is emitted only after the flag is stored, so a subscriber
    // that styles its own output sees the cached value.
    if COLOR_SUPPORTED.set(enabled).is_ok() {
        tracing::debug!(
            enabled,
            no_color = signals.no_color,
            force = signals.force,
            windows = signals.windows,
            tty = signals.tty,
            ci = signals.ci,
            "detected terminal color support"
        );
    }
    COLOR_SUPPORTED.get().copied().unwrap_or(enabled)
}
