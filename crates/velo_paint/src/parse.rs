//! CSS color value parsing
//!
//! Accepts the forms the theme palettes and widget styles use:
//! `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`, `rgba(r, g, b, a)` and a
//! handful of named colors. Channel values in `rgb()`/`rgba()` are 0-255.

use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1, take_while_m_n},
    character::complete::{char, multispace0},
    combinator::{all_consuming, map_res, verify},
    number::complete::float,
    sequence::{delimited, preceded, tuple},
    IResult,
};
use thiserror::Error;

use crate::Color;

/// Errors from parsing a CSS color value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The input is empty or whitespace
    #[error("empty color value")]
    Empty,

    /// The input is not a supported color syntax
    #[error("unsupported color value: {0}")]
    Unsupported(String),
}

/// Parse a CSS color value
pub fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(color) = parse_named_color(input) {
        return Ok(color);
    }

    all_consuming(alt((hex_color, rgba_color, rgb_color)))(input)
        .map(|(_, color)| color)
        .map_err(|_| ColorParseError::Unsupported(input.to_string()))
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

fn ws(input: &str) -> IResult<&str, &str> {
    multispace0(input)
}

/// Whitespace-tolerant comma separator
fn comma(input: &str) -> IResult<&str, char> {
    delimited(ws, char(','), ws)(input)
}

fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |hex: &str| u8::from_str_radix(hex, 16),
    )(input)
}

/// Parse hex color: #RGB, #RRGGBB, or #RRGGBBAA
fn hex_color(input: &str) -> IResult<&str, Color> {
    let (rest, hex) = preceded(char('#'), take_while1(|c: char| c.is_ascii_hexdigit()))(input)?;

    let fail = || nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::HexDigit));

    let color = match hex.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                let v = digit.to_digit(16).ok_or_else(fail)? as u8;
                *slot = v * 16 + v;
            }
            Color::from_rgb8(channels[0], channels[1], channels[2], 1.0)
        }
        6 | 8 => {
            let (tail, (r, g, b)) = tuple((hex_byte, hex_byte, hex_byte))(hex)?;
            let a = if tail.is_empty() {
                1.0
            } else {
                hex_byte(tail)?.1 as f32 / 255.0
            };
            Color::from_rgb8(r, g, b, a)
        }
        _ => return Err(fail()),
    };

    Ok((rest, color))
}

fn channel(input: &str) -> IResult<&str, u8> {
    map_res(float, |v: f32| {
        if (0.0..=255.0).contains(&v) {
            Ok(v.round() as u8)
        } else {
            Err("channel out of range")
        }
    })(input)
}

/// Opacity in 0..=1; NaN and infinities are rejected
fn alpha(input: &str) -> IResult<&str, f32> {
    verify(float, |a: &f32| a.is_finite() && (0.0..=1.0).contains(a))(input)
}

/// Parse rgba(r, g, b, a)
fn rgba_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = tag_no_case("rgba")(input)?;
    let (input, (r, _, g, _, b, _, a)) = delimited(
        tuple((ws, char('('), ws)),
        tuple((channel, comma, channel, comma, channel, comma, alpha)),
        tuple((ws, char(')'))),
    )(input)?;

    Ok((input, Color::from_rgb8(r, g, b, a)))
}

/// Parse rgb(r, g, b)
fn rgb_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = tag_no_case("rgb")(input)?;
    let (input, (r, _, g, _, b)) = delimited(
        tuple((ws, char('('), ws)),
        tuple((channel, comma, channel, comma, channel)),
        tuple((ws, char(')'))),
    )(input)?;

    Ok((input, Color::from_rgb8(r, g, b, 1.0)))
}

/// Parse named colors
fn parse_named_color(name: &str) -> Option<Color> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        "transparent" => Some(Color::TRANSPARENT),
        "red" => Some(Color::from_hex(0xFF0000)),
        "green" => Some(Color::from_hex(0x008000)),
        "blue" => Some(Color::from_hex(0x0000FF)),
        "gray" | "grey" => Some(Color::from_hex(0x808080)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_color("#fff").unwrap(), Color::WHITE);
        assert_eq!(parse_color("#009688").unwrap().to_css(), "#009688");
        assert_eq!(parse_color("#00000080").unwrap().to_rgb8(), [0, 0, 0]);
        assert!((parse_color("#00000080").unwrap().a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_rgb_functions() {
        let c = parse_color("rgba(255, 255, 255, 0.1)").unwrap();
        assert_eq!(c.to_rgb8(), [255, 255, 255]);
        assert!((c.a - 0.1).abs() < 1e-6);

        let c = parse_color("RGB(0,150,136)").unwrap();
        assert_eq!(c.to_css(), "#009688");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_color("   "), Err(ColorParseError::Empty));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("var(--primary)").is_err());
        assert!(parse_color("rgb(300, 0, 0)").is_err());
        assert!(parse_color("#ffffff trailing").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite_or_out_of_range_alpha() {
        for input in [
            "rgba(0, 0, 0, NaN)",
            "rgba(0, 0, 0, inf)",
            "rgba(0, 0, 0, -inf)",
            "rgba(0, 0, 0, 1.5)",
            "rgba(0, 0, 0, -0.1)",
        ] {
            assert_eq!(
                parse_color(input),
                Err(ColorParseError::Unsupported(input.to_string())),
                "{input}"
            );
        }
        assert!(parse_color("rgb(NaN, 0, 0)").is_err());
        assert_eq!(parse_color("rgba(0, 0, 0, 1)").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_parse_named() {
        assert_eq!("Black".parse::<Color>().unwrap(), Color::BLACK);
    }
}
