/*!
This crate wraps text in ANSI escape sequences so that it is printed in color
or with a style such as bold or underline. It is meant for command line
programs that want colored output without pulling in a terminal framework.

Whether escape sequences are emitted at all is decided once per process, the
first time a style is used, by looking at the environment. See
[`is_color_supported`] for the exact rules. Callers that want a different
policy build their own table with [`create_colors`].

# Organization

Every style has a free function at the crate root, such as [`red`] or
[`bg_cyan`]. These use a default [`Colors`] table that respects the
environment.

[`create_colors`] builds an independent [`Colors`] table with color forced on
or off. A table has one method per style, plus lookup by [`Style`] or by
name.

The [`ansi`] module contains the escape constants and [`ansi::wrap`], which
all formatters share.

# Nesting

Styled values can be nested by formatting one inside another. When the inner
value closes with the same sequence as the outer style, the inner close is
rewritten so the outer style carries on after it:

```
use minicolor::create_colors;

let c = create_colors(Some(true));
assert_eq!(
    c.red(format!("error: {} not found", c.blue("config.toml"))),
    "\x1B[31merror: \x1B[34mconfig.toml\x1B[31m not found\x1B[39m",
);
```

# Example

```no_run
println!("{} {}", minicolor::bold("warning:"), minicolor::yellow("disk is 90% full"));
```
*/

#![deny(missing_docs)]

use std::fmt;
use std::sync::OnceLock;

pub mod ansi;
mod colors;
mod detect;
mod types;

pub use colors::{Colors, Formatter, create_colors};
pub use detect::{Environment, is_color_supported, supports_color};
pub use types::{
    ColorChoice, ColorChoiceParseError, ParseStyleError, Style, StyleCode,
};

static DEFAULT_COLORS: OnceLock<Colors> = OnceLock::new();

/// The table used by the free functions in this crate.
///
/// It is built on first use from [`is_color_supported`]. Logging happens
/// outside of initialization, so a `tracing` subscriber may itself use the
/// functions of this crate.
pub fn default_colors() -> &'static Colors {
    if let Some(colors) = DEFAULT_COLORS.get() {
        return colors;
    }
    let enabled = is_color_supported();
    if DEFAULT_COLORS.set(Colors::build(enabled)).is_ok() {
        tracing::trace!(enabled, "built default formatter table");
    }
    DEFAULT_COLORS.get_or_init(|| Colors::build(enabled))
}

macro_rules! style_fns {
    ($($name:ident),+ $(,)?) => {
        $(
            #[doc = concat!(
                "Apply the `", stringify!($name), "` style to `input` using ",
                "the [default table](default_colors)."
            )]
            pub fn $name<T: fmt::Display>(input: T) -> String {
                default_colors().$name(input)
            }
        )+
    };
}

style_fns! {
    reset, bold, dim, italic, underline, inverse, hidden, strikethrough,
    black, red, green, yellow, blue, magenta, cyan, white, gray,
    bg_black, bg_red, bg_green, bg_yellow, bg_blue, bg_magenta, bg_cyan,
    bg_white,
    black_bright, red_bright, green_bright, yellow_bright, blue_bright,
    magenta_bright, cyan_bright, white_bright,
    bg_black_bright, bg_red_bright, bg_green_bright, bg_yellow_bright,
    bg_blue_bright, bg_magenta_bright, bg_cyan_bright, bg_white_bright,
}
