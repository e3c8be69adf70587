// File: crates/passchart-core/tests/color.rs
// Purpose: CSS color expressions accepted in pass colors.

use passchart_core::color::{parse_css_color, ColorError};
use skia_safe::Color;

#[test]
fn hex_forms() {
    assert_eq!(parse_css_color("#fff"), Ok(Color::from_argb(255, 255, 255, 255)));
    assert_eq!(parse_css_color("#ff000080"), Ok(Color::from_argb(128, 255, 0, 0)));
    assert_eq!(parse_css_color("#36a2eb"), Ok(Color::from_argb(255, 0x36, 0xa2, 0xeb)));
    assert_eq!(parse_css_color("#f008"), Ok(Color::from_argb(0x88, 255, 0, 0)));
    assert!(matches!(parse_css_color("#12345"), Err(ColorError::Hex(_))));
}

#[test]
fn functional_forms() {
    assert_eq!(parse_css_color("rgba(75,192,192,0.4)"), Ok(Color::from_argb(102, 75, 192, 192)));
    assert_eq!(parse_css_color("rgba(220,220,220,1)"), Ok(Color::from_argb(255, 220, 220, 220)));
    assert_eq!(parse_css_color("rgb(255 0 0 / 50%)"), Ok(Color::from_argb(128, 255, 0, 0)));
    assert_eq!(parse_css_color("hsl(120, 100%, 50%)"), Ok(Color::from_argb(255, 0, 255, 0)));
    assert!(matches!(parse_css_color("rgb(1,2)"), Err(ColorError::Function(_))));
    assert!(matches!(parse_css_color("cmyk(0,0,0,0)"), Err(ColorError::Function(_))));
}

#[test]
fn names() {
    assert_eq!(parse_css_color("red"), Ok(Color::from_argb(255, 255, 0, 0)));
    assert_eq!(parse_css_color(" SteelBlue "), Ok(Color::from_argb(255, 70, 130, 180)));
    assert_eq!(parse_css_color("transparent"), Ok(Color::TRANSPARENT));
    assert_eq!(parse_css_color(""), Err(ColorError::Empty));
    assert!(matches!(parse_css_color("blurple"), Err(ColorError::Unknown(_))));
}

#[test]
fn full_named_color_table() {
    assert_eq!(parse_css_color("rebeccapurple"), Ok(Color::from_argb(255, 0x66, 0x33, 0x99)));
    assert_eq!(parse_css_color("lightblue"), Ok(Color::from_argb(255, 0xad, 0xd8, 0xe6)));
    assert_eq!(parse_css_color("YellowGreen"), Ok(Color::from_argb(255, 0x9a, 0xcd, 0x32)));
    assert_eq!(parse_css_color("aliceblue"), Ok(Color::from_argb(255, 0xf0, 0xf8, 0xff)));
}
