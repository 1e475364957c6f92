use std::fmt;

use crate::detect;
use crate::types::{ColorChoice, Style, StyleCode};

/// Applies one style to text.
///
/// A formatter is either enabled, in which case it wraps its input with
/// [`ansi::wrap`](crate::ansi::wrap), or disabled, in which case it returns
/// its input unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Formatter {
    code: StyleCode,
    enabled: bool,
}

impl Formatter {
    /// Create a formatter for the given style code.
    pub const fn new(code: StyleCode, enabled: bool) -> Formatter {
        Formatter { code, enabled }
    }

    /// Format `input` and wrap it in this formatter's style.
    ///
    /// Any `Display` value is accepted and converted to text first. When the
    /// formatter is disabled, the text is returned as is.
    pub fn paint<T: fmt::Display>(&self, input: T) -> String {
        let text = input.to_string();
        if !self.enabled {
            return text;
        }
        self.code.wrap(&text)
    }

    /// The escape sequences this formatter applies when enabled.
    pub const fn code(&self) -> StyleCode {
        self.code
    }

    /// Returns true if this formatter emits escape sequences.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// A table with one [`Formatter`] per [`Style`].
///
/// Tables are cheap, immutable values. Any number of them may exist at the
/// same time, for example one with color forced on for a log file viewer and
/// one with color forced off for piped output.
///
/// ```
/// use minicolor::create_colors;
///
/// let colors = create_colors(Some(true));
/// assert_eq!(colors.red("x"), "\x1B[31mx\x1B[39m");
///
/// let plain = create_colors(Some(false));
/// assert_eq!(plain.red("x"), "x");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Colors {
    enabled: bool,
    formatters: [Formatter; Style::COUNT],
}

/// Build a table of formatters.
///
/// When `enabled` is `None`, the process wide capability flag decides. See
/// [`is_color_supported`](crate::is_color_supported).
pub fn create_colors(enabled: Option<bool>) -> Colors {
    Colors::new(enabled.unwrap_or_else(detect::is_color_supported))
}

impl Colors {
    /// Build a table whose formatters are all enabled or all disabled.
    pub fn new(enabled: bool) -> Colors {
        tracing::trace!(enabled, "building formatter table");
        Colors::build(enabled)
    }

    /// Like `new`, without logging. Used where an event would fire while a
    /// process wide cell is still being initialized.
    pub(crate) fn build(enabled: bool) -> Colors {
        Colors {
            enabled,
            formatters: Style::ALL
                .map(|style| Formatter::new(style.code(), enabled)),
        }
    }

    /// Build a table from an end user's color preference.
    pub fn from_choice(choice: ColorChoice) -> Colors {
        Colors::new(choice.should_attempt_color())
    }

    /// Returns true if this table emits escape sequences.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the formatter for `style`.
    pub fn get(&self, style: Style) -> &Formatter {
        &self.formatters[style.index()]
    }

    /// Returns the formatter for the style called `name`.
    ///
    /// Names are matched the same way as [`Style`]'s `FromStr` impl.
    pub fn lookup(&self, name: &str) -> Option<&Formatter> {
        name.parse::<Style>().ok().map(|style| self.get(style))
    }

    /// Apply `style` to `input`.
    pub fn paint<T: fmt::Display>(&self, style: Style, input: T) -> String {
        self.get(style).paint(input)
    }

    /// Iterate over every style and its formatter, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Style, &Formatter)> + '_ {
        Style::ALL.into_iter().zip(self.formatters.iter())
    }
}

impl Default for Colors {
    /// The same as `create_colors(None)`.
    fn default() -> Colors {
        create_colors(None)
    }
}

macro_rules! style_methods {
    ($($method:ident => $style:ident),+ $(,)?) => {
        impl Colors {
            $(
                #[doc = concat!(
                    "Apply the `", stringify!($method), "` style to `input`."
                )]
                #[inline]
                pub fn $method<T: fmt::Display>(&self, input: T) -> String {
                    self.paint(Style::$style, input)
                }
            )+
        }
    };
}

style_methods! {
    reset => Reset,
    bold => Bold,
    dim => Dim,
    italic => Italic,
    underline => Underline,
    inverse => Inverse,
    hidden => Hidden,
    strikethrough => Strikethrough,

    black => Black,
    red => Red,
    green => Green,
    yellow => Yellow,
    blue => Blue,
    magenta => Magenta,
    cyan => Cyan,
    white => White,
    gray => Gray,

    bg_black => BgBlack,
    bg_red => BgRed,
    bg_green => BgGreen,
    bg_yellow => BgYellow,
    bg_blue => BgBlue,
    bg_magenta => BgMagenta,
    bg_cyan => BgCyan,
    bg_white => BgWhite,

    black_bright => BlackBright,
    red_bright => RedBright,
    green_bright => GreenBright,
    yellow_bright => YellowBright,
    blue_bright => BlueBright,
    magenta_bright => MagentaBright,
    cyan_bright => CyanBright,
    white_bright => WhiteBright,

    bg_black_bright => BgBlackBright,
    bg_red_bright => BgRedBright,
    bg_green_bright => BgGreenBright,
    bg_yellow_bright => BgYellowBright,
    bg_blue_bright => BgBlueBright,
    bg_magenta_bright => BgMagentaBright,
    bg_cyan_bright => BgCyanBright,
    bg_white_bright => BgWhiteBright,
}
