//! Token-level serialization for values, selectors and at-rule params.
//!
//! Text is tokenized with `cssparser` and written back token by token, so
//! whitespace runs collapse to single spaces, comments disappear and quoted
//! strings come back double-quoted.
//!
//! ```rust
//! use stylesheet::normalize_value;
//!
//! assert_eq!(normalize_value("  0   auto ", true).unwrap(), "0 auto");
//! assert_eq!(normalize_value("rgb( 255 ,0 ,  0 )", true).unwrap(), "rgb(255, 0, 0)");
//! assert_eq!(normalize_value("rgb( 255 ,0 )", false).unwrap(), "rgb( 255 ,0 )");
//! ```

use cssparser::{ParseError, ParseErrorKind, Parser, ParserInput, ToCss, Token};

use crate::error::StylesheetError;

pub(crate) type Parsed<'i, T> = Result<T, ParseError<'i, StylesheetError>>;

/// Re-serialize a single value.
///
/// With `normalize_commas`, whitespace after `(` and before `,` and `)` is
/// dropped and exactly one space follows every comma. Without it, whitespace
/// inside blocks is only collapsed.
pub fn normalize_value(value: &str, normalize_commas: bool) -> Result<String, StylesheetError> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    write_tokens(&mut parser, normalize_commas).map_err(|err| match err.kind {
        ParseErrorKind::Custom(inner) => inner,
        ParseErrorKind::Basic(_) => StylesheetError::InvalidDeclaration {
            line: err.location.line as usize + 1,
            column: err.location.column as usize,
            text: value.trim().to_string(),
        },
    })
}

/// Write every remaining token of `input` into a fresh string.
pub(crate) fn write_tokens<'i>(
    input: &mut Parser<'i, '_>,
    normalize_commas: bool,
) -> Parsed<'i, String> {
    let mut out = String::new();
    write_sequence(input, &mut out, normalize_commas, false)?;
    Ok(out)
}

fn write_sequence<'i>(
    input: &mut Parser<'i, '_>,
    out: &mut String,
    normalize_commas: bool,
    nested: bool,
) -> Parsed<'i, ()> {
    // Without comma normalization, space just inside a block is content.
    let keep_edges = nested && !normalize_commas;
    let mut pending_space = false;
    let mut at_start = true;
    loop {
        let location = input.current_source_location();
        let token = match input.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            // A dropped comment still separates its neighbours.
            Token::WhiteSpace(_) | Token::Comment(_) => {
                pending_space |= !at_start || keep_edges;
                continue;
            }
            Token::Comma if normalize_commas => {
                out.push(',');
                pending_space = true;
                at_start = false;
                continue;
            }
            Token::BadString(_) => {
                return Err(ParseError {
                    kind: ParseErrorKind::Custom(StylesheetError::UnterminatedString {
                        line: location.line as usize + 1,
                        column: location.column as usize,
                    }),
                    location,
                });
            }
            Token::BadUrl(_) => {
                return Err(ParseError {
                    kind: ParseErrorKind::Custom(StylesheetError::InvalidUrl {
                        line: location.line as usize + 1,
                        column: location.column as usize,
                    }),
                    location,
                });
            }
            _ => {}
        }

        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        at_start = false;

        // Block openers print their opening half; the rest comes from the
        // nested block.
        out.push_str(&token.to_css_string());
        let close = match token {
            Token::Function(_) | Token::ParenthesisBlock => Some(')'),
            Token::SquareBracketBlock => Some(']'),
            Token::CurlyBracketBlock => Some('}'),
            _ => None,
        };
        if let Some(close) = close {
            input.parse_nested_block(|block| write_sequence(block, out, normalize_commas, true))?;
            out.push(close);
        }
    }
    if pending_space && keep_edges {
        out.push(' ');
    }
    Ok(())
}
