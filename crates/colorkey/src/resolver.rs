use std::str::FromStr;

use cssparser::{BasicParseErrorKind, Color, Parser, ParserInput, RGBA};
use palette::Srgb;

use crate::error::ColorError;
use crate::key::CanonicalColorKey;

/// Maps a raw color token to its canonical key.
///
/// Implementations must be pure: the same token always yields the same
/// result.
pub trait ColorResolver {
    fn resolve(&self, token: &str) -> Result<CanonicalColorKey, ColorError>;
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> Result<CanonicalColorKey, ColorError>,
{
    fn resolve(&self, token: &str) -> Result<CanonicalColorKey, ColorError> {
        self(token)
    }
}

/// Default resolver backed by `palette`'s 8-bit sRGB type.
///
/// Understands `#rgb`, `#rrggbb` (any case) and opaque `rgb()` in any form
/// cssparser accepts. Out-of-range channels clamp to `0..=255`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SrgbResolver;

impl ColorResolver for SrgbResolver {
    fn resolve(&self, token: &str) -> Result<CanonicalColorKey, ColorError> {
        let trimmed = token.trim();
        let color = if let Some(digits) = trimmed.strip_prefix('#') {
            parse_hex(token, digits)?
        } else if is_rgb_function(trimmed) {
            parse_rgb(token, trimmed)?
        } else {
            return Err(ColorError::Unsupported {
                token: token.to_string(),
            });
        };
        Ok(CanonicalColorKey::from_srgb(color))
    }
}

/// Resolve `token` with [`SrgbResolver`].
pub fn canonicalize(token: &str) -> Result<CanonicalColorKey, ColorError> {
    SrgbResolver.resolve(token)
}

fn parse_hex(token: &str, digits: &str) -> Result<Srgb<u8>, ColorError> {
    let invalid = |message: String| ColorError::InvalidHex {
        token: token.to_string(),
        message,
    };
    // palette also accepts a sign inside `from_str_radix` chunks; only plain
    // hex digits are colors here.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid("expected only hexadecimal digits".into()));
    }
    Srgb::<u8>::from_str(digits).map_err(|err| invalid(err.to_string()))
}

fn is_rgb_function(text: &str) -> bool {
    text.get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rgb("))
}

/// Resolve an `rgb()` function with cssparser's color grammar. Channels
/// outside `0..=255` are clamped, so `rgb(300, 0, 0)` is red.
fn parse_rgb(token: &str, text: &str) -> Result<Srgb<u8>, ColorError> {
    let invalid = |message: String| ColorError::InvalidRgb {
        token: token.to_string(),
        message,
    };
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let color = Color::parse(&mut parser).map_err(|err| invalid(describe(&err.kind)))?;
    parser
        .expect_exhausted()
        .map_err(|err| invalid(describe(&err.kind)))?;

    match color {
        Color::RGBA(RGBA {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }) => Ok(Srgb::new(red, green, blue)),
        Color::RGBA(_) => Err(invalid("alpha channels are not supported".into())),
        _ => Err(ColorError::Unsupported {
            token: token.to_string(),
        }),
    }
}

fn describe(kind: &BasicParseErrorKind<'_>) -> String {
    match kind {
        BasicParseErrorKind::UnexpectedToken(found) => format!("unexpected {found:?}"),
        BasicParseErrorKind::EndOfInput => "unexpected end of input".into(),
        other => format!("{other:?}"),
    }
}
