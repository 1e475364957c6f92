//! Tests for the crate's public surface.

use minicolor::{
    ColorChoice, Colors, Environment, Style, create_colors, default_colors,
    is_color_supported, supports_color,
};
use pretty_assertions::assert_eq;

#[test]
fn bold_red_hello() {
    let c = create_colors(Some(true));
    assert_eq!(
        c.bold(c.red("Hello")),
        "\x1B[1m\x1B[31mHello\x1B[39m\x1B[22m"
    );
}

#[test]
fn forced_off_red_is_plain() {
    assert_eq!(create_colors(Some(false)).red("x"), "x");
}

#[test]
fn default_table_follows_detection() {
    assert_eq!(default_colors().is_enabled(), is_color_supported());
    assert_eq!(create_colors(None).is_enabled(), is_color_supported());
}

#[test]
fn free_functions_use_default_table() {
    let c = default_colors();
    assert_eq!(minicolor::red("x"), c.red("x"));
    assert_eq!(minicolor::bold(7), c.bold(7));
    assert_eq!(minicolor::bg_cyan_bright("x"), c.bg_cyan_bright("x"));
    assert_eq!(minicolor::gray("x"), minicolor::black_bright("x"));
    if is_color_supported() {
        assert_eq!(minicolor::underline("x"), "\x1B[4mx\x1B[24m");
    } else {
        assert_eq!(minicolor::underline("x"), "x");
    }
}

#[test]
fn escape_table() {
    let c = Colors::new(true);
    let cases = [
        (Style::Reset, "\x1B[0m", "\x1B[0m"),
        (Style::Bold, "\x1B[1m", "\x1B[22m"),
        (Style::Dim, "\x1B[2m", "\x1B[22m"),
        (Style::Italic, "\x1B[3m", "\x1B[23m"),
        (Style::Underline, "\x1B[4m", "\x1B[24m"),
        (Style::Inverse, "\x1B[7m", "\x1B[27m"),
        (Style::Hidden, "\x1B[8m", "\x1B[28m"),
        (Style::Strikethrough, "\x1B[9m", "\x1B[29m"),
        (Style::Black, "\x1B[30m", "\x1B[39m"),
        (Style::White, "\x1B[37m", "\x1B[39m"),
        (Style::Gray, "\x1B[90m", "\x1B[39m"),
        (Style::BgBlack, "\x1B[40m", "\x1B[49m"),
        (Style::BgWhite, "\x1B[47m", "\x1B[49m"),
        (Style::BlackBright, "\x1B[90m", "\x1B[39m"),
        (Style::WhiteBright, "\x1B[97m", "\x1B[39m"),
        (Style::BgBlackBright, "\x1B[100m", "\x1B[49m"),
        (Style::BgWhiteBright, "\x1B[107m", "\x1B[49m"),
    ];
    for (style, open, close) in cases {
        assert_eq!(c.paint(style, "x"), format!("{open}x{close}"), "{style}");
    }
}

#[test]
fn consecutive_foreground_closes() {
    let c = Colors::new(true);
    let inner = format!("{}{}", c.blue("a"), c.green("b"));
    assert_eq!(
        c.red(format!("start {inner} end")),
        "\x1B[31mstart \x1B[34ma\x1B[31m\x1B[32mb\x1B[31m end\x1B[39m"
    );
}

#[test]
fn lookup_and_choice() {
    let c = Colors::from_choice("always".parse::<ColorChoice>().unwrap());
    let cyan = c.lookup("bgCyan").unwrap();
    assert_eq!(cyan.paint("x"), "\x1B[46mx\x1B[49m");
    assert!(c.lookup("bgPurple").is_none());

    let never = Colors::from_choice(ColorChoice::Never);
    assert_eq!(never.lookup("bg_cyan").unwrap().paint("x"), "x");
}

#[test]
fn explicit_environment() {
    let ci = Environment::empty().with_os("linux").with_var("CI", "1");
    assert!(supports_color(&ci));
    assert!(!supports_color(&ci.with_arg("--no-color")));
}

#[test]
fn iteration_order() {
    let names: Vec<&str> =
        Colors::new(false).iter().map(|(s, _)| s.name()).collect();
    assert_eq!(names.len(), Style::COUNT);
    assert_eq!(&names[..3], ["reset", "bold", "dim"]);
    assert_eq!(names.last(), Some(&"bgWhiteBright"));
}
