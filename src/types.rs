use std::fmt;
use std::str::FromStr;

use crate::ansi;
use crate::detect;

/// ColorChoice represents the color preferences of an end user.
///
/// The `Default` implementation for this type will select `Auto`, which tries
/// to do the right thing based on the current environment.
///
/// The `FromStr` implementation for this type converts a case insensitive
/// string of the variant name to the corresponding variant. Any other string
/// results in an error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ColorChoice {
    /// Always emit escape sequences, regardless of the environment.
    Always,
    /// Emit escape sequences only if the environment looks like it supports
    /// them. See [`is_color_supported`](crate::is_color_supported).
    #[default]
    Auto,
    /// Never emit escape sequences.
    Never,
}

impl FromStr for ColorChoice {
    type Err = ColorChoiceParseError;

    fn from_str(s: &str) -> Result<ColorChoice, ColorChoiceParseError> {
        match s.to_lowercase().as_str() {
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            "auto" => Ok(ColorChoice::Auto),
            unknown => Err(ColorChoiceParseError {
                unknown_choice: unknown.to_string(),
            }),
        }
    }
}

impl ColorChoice {
    /// Returns true if formatters built from this choice should emit escape
    /// sequences.
    ///
    /// `Auto` defers to the process wide capability flag, which is computed
    /// once on first use.
    pub fn should_attempt_color(&self) -> bool {
        match *self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => detect::is_color_supported(),
        }
    }
}

/// An error that occurs when parsing a `ColorChoice` fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error(
    "unrecognized color choice '{unknown_choice}': valid choices are: \
     always, never, auto"
)]
pub struct ColorChoiceParseError {
    unknown_choice: String,
}

impl ColorChoiceParseError {
    /// Return the string that couldn't be parsed as a valid color choice.
    pub fn invalid_choice(&self) -> &str {
        &self.unknown_choice
    }
}

/// The escape sequences that make up a single style.
///
/// `open` switches the style on and `close` switches it off again. When a
/// styled value is nested inside another value using the same `close`, the
/// inner `close` is rewritten to `replace` so the outer style stays active.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct StyleCode {
    open: &'static str,
    close: &'static str,
    replace: &'static str,
}

impl StyleCode {
    /// Create a style code whose replacement is its own open sequence.
    pub const fn new(open: &'static str, close: &'static str) -> StyleCode {
        StyleCode { open, close, replace: open }
    }

    /// Create a style code with an explicit replacement sequence.
    pub const fn with_replace(
        open: &'static str,
        close: &'static str,
        replace: &'static str,
    ) -> StyleCode {
        StyleCode { open, close, replace }
    }

    /// The sequence that turns the style on.
    pub const fn open(&self) -> &'static str {
        self.open
    }

    /// The sequence that turns the style off.
    pub const fn close(&self) -> &'static str {
        self.close
    }

    /// The sequence substituted for a nested `close`.
    pub const fn replace(&self) -> &'static str {
        self.replace
    }

    /// Wrap `text` in this style. See [`ansi::wrap`].
    pub fn wrap(&self, text: &str) -> String {
        ansi::wrap(text, self.open, self.close, self.replace)
    }
}

/// Every style this crate knows how to apply, in table order.
///
/// The `FromStr` implementation accepts the canonical name returned by
/// [`Style::name`] (for example `bgCyan`) as well as its snake case spelling
/// (`bg_cyan`). Matching is exact otherwise.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Style {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Inverse,
    Hidden,
    Strikethrough,

    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,

    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,

    BlackBright,
    RedBright,
    GreenBright,
    YellowBright,
    BlueBright,
    MagentaBright,
    CyanBright,
    WhiteBright,

    BgBlackBright,
    BgRedBright,
    BgGreenBright,
    BgYellowBright,
    BgBlueBright,
    BgMagentaBright,
    BgCyanBright,
    BgWhiteBright,
}

impl Style {
    /// The number of styles.
    pub const COUNT: usize = Style::ALL.len();

    /// All styles, in table order.
    pub const ALL: [Style; 41] = [
        Style::Reset,
        Style::Bold,
        Style::Dim,
        Style::Italic,
        Style::Underline,
        Style::Inverse,
        Style::Hidden,
        Style::Strikethrough,
        Style::Black,
        Style::Red,
        Style::Green,
        Style::Yellow,
        Style::Blue,
        Style::Magenta,
        Style::Cyan,
        Style::White,
        Style::Gray,
        Style::BgBlack,
        Style::BgRed,
        Style::BgGreen,
        Style::BgYellow,
        Style::BgBlue,
        Style::BgMagenta,
        Style::BgCyan,
        Style::BgWhite,
        Style::BlackBright,
        Style::RedBright,
        Style::GreenBright,
        Style::YellowBright,
        Style::BlueBright,
        Style::MagentaBright,
        Style::CyanBright,
        Style::WhiteBright,
        Style::BgBlackBright,
        Style::BgRedBright,
        Style::BgGreenBright,
        Style::BgYellowBright,
        Style::BgBlueBright,
        Style::BgMagentaBright,
        Style::BgCyanBright,
        Style::BgWhiteBright,
    ];

    /// Position of this style in [`Style::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The canonical name of this style, e.g. `"bgCyan"`.
    pub const fn name(self) -> &'static str {
        match self {
            Style::Reset => "reset",
            Style::Bold => "bold",
            Style::Dim => "dim",
            Style::Italic => "italic",
            Style::Underline => "underline",
            Style::Inverse => "inverse",
            Style::Hidden => "hidden",
            Style::Strikethrough => "strikethrough",
            Style::Black => "black",
            Style::Red => "red",
            Style::Green => "green",
            Style::Yellow => "yellow",
            Style::Blue => "blue",
            Style::Magenta => "magenta",
            Style::Cyan => "cyan",
            Style::White => "white",
            Style::Gray => "gray",
            Style::BgBlack => "bgBlack",
            Style::BgRed => "bgRed",
            Style::BgGreen => "bgGreen",
            Style::BgYellow => "bgYellow",
            Style::BgBlue => "bgBlue",
            Style::BgMagenta => "bgMagenta",
            Style::BgCyan => "bgCyan",
            Style::BgWhite => "bgWhite",
            Style::BlackBright => "blackBright",
            Style::RedBright => "redBright",
            Style::GreenBright => "greenBright",
            Style::YellowBright => "yellowBright",
            Style::BlueBright => "blueBright",
            Style::MagentaBright => "magentaBright",
            Style::CyanBright => "cyanBright",
            Style::WhiteBright => "whiteBright",
            Style::BgBlackBright => "bgBlackBright",
            Style::BgRedBright => "bgRedBright",
            Style::BgGreenBright => "bgGreenBright",
            Style::BgYellowBright => "bgYellowBright",
            Style::BgBlueBright => "bgBlueBright",
            Style::BgMagentaBright => "bgMagentaBright",
            Style::BgCyanBright => "bgCyanBright",
            Style::BgWhiteBright => "bgWhiteBright",
        }
    }

    /// The escape sequences for this style.
    pub const fn code(self) -> StyleCode {
        use crate::ansi::*;

        match self {
            Style::Reset => StyleCode::new(RESET, RESET),
            // Bold and dim share one intensity attribute, so closing either
            // one must re-assert the outer style.
            Style::Bold => StyleCode::with_replace(
                "\x1B[1m",
                RESET_INTENSITY,
                "\x1B[22m\x1B[1m",
            ),
            Style::Dim => StyleCode::with_replace(
                "\x1B[2m",
                RESET_INTENSITY,
                "\x1B[22m\x1B[2m",
            ),
            Style::Italic => StyleCode::new("\x1B[3m", "\x1B[23m"),
            Style::Underline => StyleCode::new("\x1B[4m", "\x1B[24m"),
            Style::Inverse => StyleCode::new("\x1B[7m", "\x1B[27m"),
            Style::Hidden => StyleCode::new("\x1B[8m", "\x1B[28m"),
            Style::Strikethrough => StyleCode::new("\x1B[9m", "\x1B[29m"),

            Style::Black => StyleCode::new("\x1B[30m", RESET_FG),
            Style::Red => StyleCode::new("\x1B[31m", RESET_FG),
            Style::Green => StyleCode::new("\x1B[32m", RESET_FG),
            Style::Yellow => StyleCode::new("\x1B[33m", RESET_FG),
            Style::Blue => StyleCode::new("\x1B[34m", RESET_FG),
            Style::Magenta => StyleCode::new("\x1B[35m", RESET_FG),
            Style::Cyan => StyleCode::new("\x1B[36m", RESET_FG),
            Style::White => StyleCode::new("\x1B[37m", RESET_FG),
            Style::Gray => StyleCode::new("\x1B[90m", RESET_FG),

            Style::BgBlack => StyleCode::new("\x1B[40m", RESET_BG),
            Style::BgRed => StyleCode::new("\x1B[41m", RESET_BG),
            Style::BgGreen => StyleCode::new("\x1B[42m", RESET_BG),
            Style::BgYellow => StyleCode::new("\x1B[43m", RESET_BG),
            Style::BgBlue => StyleCode::new("\x1B[44m", RESET_BG),
            Style::BgMagenta => StyleCode::new("\x1B[45m", RESET_BG),
            Style::BgCyan => StyleCode::new("\x1B[46m", RESET_BG),
            Style::BgWhite => StyleCode::new("\x1B[47m", RESET_BG),

            // Same sequence as `Gray`.
            Style::BlackBright => StyleCode::new("\x1B[90m", RESET_FG),
            Style::RedBright => StyleCode::new("\x1B[91m", RESET_FG),
            Style::GreenBright => StyleCode::new("\x1B[92m", RESET_FG),
            Style::YellowBright => StyleCode::new("\x1B[93m", RESET_FG),
            Style::BlueBright => StyleCode::new("\x1B[94m", RESET_FG),
            Style::MagentaBright => StyleCode::new("\x1B[95m", RESET_FG),
            Style::CyanBright => StyleCode::new("\x1B[96m", RESET_FG),
            Style::WhiteBright => StyleCode::new("\x1B[97m", RESET_FG),

            Style::BgBlackBright => StyleCode::new("\x1B[100m", RESET_BG),
            Style::BgRedBright => StyleCode::new("\x1B[101m", RESET_BG),
            Style::BgGreenBright => StyleCode::new("\x1B[102m", RESET_BG),
            Style::BgYellowBright => StyleCode::new("\x1B[103m", RESET_BG),
            Style::BgBlueBright => StyleCode::new("\x1B[104m", RESET_BG),
            Style::BgMagentaBright => StyleCode::new("\x1B[105m", RESET_BG),
            Style::BgCyanBright => StyleCode::new("\x1B[106m", RESET_BG),
            Style::BgWhiteBright => StyleCode::new("\x1B[107m", RESET_BG),
        }
    }

    /// The snake case spelling of [`Style::name`], e.g. `"bg_cyan"`.
    pub fn snake_name(self) -> String {
        let mut out = String::with_capacity(self.name().len() + 2);
        for c in self.name().chars() {
            if c.is_ascii_uppercase() {
                out.push('_');
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Style, ParseStyleError> {
        Style::ALL
            .iter()
            .copied()
            .find(|style| style.name() == s || style.snake_name() == s)
            .ok_or_else(|| ParseStyleError { given: s.to_string() })
    }
}

/// An error from parsing an unknown style name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error(
    "unrecognized style name '{given}'. Choose a modifier (bold, dim, \
     italic, underline, inverse, hidden, strikethrough, reset), a color \
     (red, gray, ...), a bright color (redBright, ...) or a background \
     (bgRed, bgRedBright, ...)"
)]
pub struct ParseStyleError {
    given: String,
}

impl ParseStyleError {
    /// Return the string that couldn't be parsed as a valid style.
    pub fn invalid(&self) -> &str {
        &self.given
    }
}
