use cssparser::{
    parse_important, AtRuleParser, CowRcStr, DeclarationListParser, DeclarationParser, Delimiter,
    ParseError, ParseErrorKind, Parser, ParserInput, ParserState, QualifiedRuleParser,
    RuleListParser, Token,
};

use crate::error::StylesheetError;
use crate::node::{Declaration, Node, Stylesheet};
use crate::value::{write_tokens, Parsed};

/// Parse stylesheet text into a [`Stylesheet`] tree, normalizing comma
/// spacing in selectors, params and values.
pub fn parse(source: &str) -> Result<Stylesheet, StylesheetError> {
    parse_with(source, true)
}

/// Parse stylesheet text into a [`Stylesheet`] tree.
///
/// Tokenizing follows CSS Syntax Level 3: the end of input closes any open
/// block, string or comment. Comments between rules and declarations become
/// [`Node::Comment`]; comments inside selectors, params and values are
/// dropped. Selectors and values are re-serialized from their tokens with
/// whitespace runs collapsed, so `color: #fff /* brand */` yields the value
/// `#fff`.
///
/// A rule or declaration that cannot be parsed aborts with its position.
pub fn parse_with(source: &str, normalize_commas: bool) -> Result<Stylesheet, StylesheetError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut input = ParserInput::new(source);
    let mut parser = Parser::new(&mut input);
    let nodes = rule_list(&mut parser, normalize_commas, true)
        .map_err(|err| into_error(err, "", Item::Rule))?;
    Ok(Stylesheet::new(nodes))
}

/// What kind of item failed, for error reporting.
#[derive(Debug, Clone, Copy)]
enum Item {
    Rule,
    Declaration,
}

/// Turn a cssparser error into ours. Errors raised by nested blocks are
/// already ours and pass through unchanged.
fn into_error(err: ParseError<'_, StylesheetError>, text: &str, item: Item) -> StylesheetError {
    match err.kind {
        ParseErrorKind::Custom(inner) => inner,
        ParseErrorKind::Basic(_) => {
            let line = err.location.line as usize + 1;
            let column = err.location.column as usize;
            let text = text.trim().trim_end_matches(';').trim_end().to_string();
            match item {
                Item::Rule => StylesheetError::InvalidRule { line, column, text },
                Item::Declaration => StylesheetError::InvalidDeclaration { line, column, text },
            }
        }
    }
}

fn reraise<'i>(
    err: ParseError<'i, StylesheetError>,
    text: &str,
    item: Item,
) -> ParseError<'i, StylesheetError> {
    let location = err.location;
    ParseError {
        kind: ParseErrorKind::Custom(into_error(err, text, item)),
        location,
    }
}

/// At-rules whose block holds rules rather than declarations.
fn holds_rules(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    let bare = ["-webkit-", "-moz-", "-o-", "-ms-"]
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(&name);
    matches!(
        bare,
        "media"
            | "supports"
            | "document"
            | "layer"
            | "container"
            | "scope"
            | "starting-style"
            | "keyframes"
    )
}

enum Trivia<'i> {
    Comment(&'i str),
    Whitespace,
    Content,
}

/// Consume whitespace and comments ahead of the next item, keeping the
/// comments as nodes.
fn take_comments(input: &mut Parser<'_, '_>, nodes: &mut Vec<Node>) {
    loop {
        let state = input.state();
        let trivia = match input.next_including_whitespace_and_comments() {
            Ok(&Token::Comment(text)) => Trivia::Comment(text),
            Ok(&Token::WhiteSpace(_)) => Trivia::Whitespace,
            _ => Trivia::Content,
        };
        match trivia {
            Trivia::Comment(text) => nodes.push(Node::Comment {
                text: text.trim().to_string(),
            }),
            Trivia::Whitespace => {}
            Trivia::Content => {
                input.reset(&state);
                return;
            }
        }
    }
}

fn rule_list<'i>(
    input: &mut Parser<'i, '_>,
    normalize_commas: bool,
    top_level: bool,
) -> Parsed<'i, Vec<Node>> {
    let parser = BlockParser { normalize_commas };
    let mut rules = if top_level {
        RuleListParser::new_for_stylesheet(input, parser)
    } else {
        RuleListParser::new_for_nested_rule(input, parser)
    };
    let mut nodes = Vec::new();
    loop {
        take_comments(rules.input, &mut nodes);
        match rules.next() {
            Some(Ok(node)) => nodes.push(node),
            Some(Err((err, text))) => return Err(reraise(err, text, Item::Rule)),
            None => return Ok(nodes),
        }
    }
}

fn declaration_list<'i>(input: &mut Parser<'i, '_>, normalize_commas: bool) -> Parsed<'i, Vec<Node>> {
    let mut decls = DeclarationListParser::new(input, BlockParser { normalize_commas });
    let mut nodes = Vec::new();
    loop {
        take_comments(decls.input, &mut nodes);
        match decls.next() {
            Some(Ok(node)) => nodes.push(node),
            Some(Err((err, text))) => return Err(reraise(err, text, Item::Declaration)),
            None => return Ok(nodes),
        }
    }
}

/// Builds [`Node`]s for every kind of item a block can hold.
#[derive(Debug, Clone, Copy)]
struct BlockParser {
    normalize_commas: bool,
}

impl<'i> QualifiedRuleParser<'i> for BlockParser {
    type Prelude = String;
    type QualifiedRule = Node;
    type Error = StylesheetError;

    fn parse_prelude<'t>(&mut self, input: &mut Parser<'i, 't>) -> Parsed<'i, String> {
        write_tokens(input, self.normalize_commas)
    }

    fn parse_block<'t>(
        &mut self,
        selector: String,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Parsed<'i, Node> {
        let nodes = declaration_list(input, self.normalize_commas)?;
        Ok(Node::Rule { selector, nodes })
    }
}

impl<'i> AtRuleParser<'i> for BlockParser {
    type Prelude = (String, String);
    type AtRule = Node;
    type Error = StylesheetError;

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Parsed<'i, (String, String)> {
        let params = write_tokens(input, self.normalize_commas)?;
        Ok((name.to_string(), params))
    }

    fn rule_without_block(
        &mut self,
        (name, params): (String, String),
        _start: &ParserState,
    ) -> Result<Node, ()> {
        Ok(Node::AtRule {
            name,
            params,
            nodes: None,
        })
    }

    fn parse_block<'t>(
        &mut self,
        (name, params): (String, String),
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Parsed<'i, Node> {
        let nodes = if holds_rules(&name) {
            rule_list(input, self.normalize_commas, false)?
        } else {
            declaration_list(input, self.normalize_commas)?
        };
        Ok(Node::AtRule {
            name,
            params,
            nodes: Some(nodes),
        })
    }
}

impl<'i> DeclarationParser<'i> for BlockParser {
    type Declaration = Node;
    type Error = StylesheetError;

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Parsed<'i, Node> {
        let normalize_commas = self.normalize_commas;
        let value = input.parse_until_before(Delimiter::Bang, |input| {
            write_tokens(input, normalize_commas)
        })?;
        let important = input.try_parse(parse_important).is_ok();
        input.expect_exhausted()?;
        Ok(Node::Declaration(Declaration {
            property: name.to_string(),
            value,
            important,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(property: &str, value: &str) -> Node {
        Node::Declaration(Declaration::new(property, value))
    }

    fn values(source: &str) -> Vec<String> {
        let sheet = parse(source).expect("parse");
        let mut values = Vec::new();
        sheet.walk_decls(|d| values.push(d.value.clone()));
        values
    }

    #[test]
    fn parses_rules_and_declarations() {
        let sheet = parse("a { color: red; margin: 0 }").expect("parse");
        assert_eq!(
            sheet.nodes,
            vec![Node::Rule {
                selector: "a".into(),
                nodes: vec![decl("color", "red"), decl("margin", "0")],
            }]
        );
    }

    #[test]
    fn important_is_split_from_value() {
        let sheet = parse("a { color: #FFF ! IMPORTANT; }").expect("parse");
        let mut seen = Vec::new();
        sheet.walk_decls(|d| seen.push((d.value.clone(), d.important)));
        assert_eq!(seen, vec![("#FFF".to_string(), true)]);
    }

    #[test]
    fn semicolons_inside_parens_and_strings_do_not_split() {
        assert_eq!(
            values("a { background: url(data:image/png;base64,AAA); content: \"x;y\"; }"),
            vec!["url(data:image/png;base64,AAA)", "\"x;y\""]
        );
    }

    #[test]
    fn inline_comments_leave_the_value() {
        assert_eq!(values("a { color: #fff /* brand */; }"), vec!["#fff"]);
        assert_eq!(values("a { border: 1px /* w */ solid red; }"), vec!["1px solid red"]);
        assert_eq!(values("a { color: /* lead */ red }"), vec!["red"]);
    }

    #[test]
    fn comments_in_selectors_are_dropped() {
        let sheet = parse("a /* x */ , b { top: 0 }").expect("parse");
        assert!(matches!(
            &sheet.nodes[0],
            Node::Rule { selector, .. } if selector == "a, b"
        ));
    }

    #[test]
    fn pseudo_class_selector_is_a_rule() {
        let sheet = parse("a:hover{color:blue}").expect("parse");
        assert!(matches!(
            &sheet.nodes[0],
            Node::Rule { selector, .. } if selector == "a:hover"
        ));
    }

    #[test]
    fn statement_and_block_at_rules() {
        let sheet =
            parse("@import url(x.css);\n@media print { a { color: red; } }").expect("parse");
        assert_eq!(sheet.nodes.len(), 2);
        assert!(matches!(
            &sheet.nodes[0],
            Node::AtRule { name, params, nodes: None } if name == "import" && params == "url(x.css)"
        ));
        assert!(matches!(
            &sheet.nodes[1],
            Node::AtRule { name, nodes: Some(inner), .. } if name == "media" && inner.len() == 1
        ));
    }

    #[test]
    fn keyframes_hold_rules_and_font_face_holds_declarations() {
        let sheet = parse(
            "@-webkit-keyframes spin { from { color: #000 } 50% { color: #fff } }\n\
             @font-face { font-family: x }",
        )
        .expect("parse");
        assert!(matches!(
            &sheet.nodes[0],
            Node::AtRule { nodes: Some(frames), .. }
                if matches!(&frames[1], Node::Rule { selector, .. } if selector == "50%")
        ));
        assert!(matches!(
            &sheet.nodes[1],
            Node::AtRule { nodes: Some(decls), .. } if decls == &vec![decl("font-family", "x")]
        ));
    }

    #[test]
    fn comments_become_nodes() {
        let sheet = parse("/* header */ a { /* inner */ color: red; }").expect("parse");
        assert_eq!(
            sheet.nodes[0],
            Node::Comment {
                text: "header".into()
            }
        );
        assert!(matches!(
            &sheet.nodes[1],
            Node::Rule { nodes, .. } if nodes[0] == Node::Comment { text: "inner".into() }
        ));
    }

    #[test]
    fn end_of_input_closes_open_blocks() {
        let sheet = parse("a { color: red;\n  top: 0").expect("parse");
        assert_eq!(sheet.declaration_count(), 2);
        assert!(matches!(
            parse("@media print { a { color: #fff"),
            Ok(sheet) if sheet.declaration_count() == 1
        ));
        assert_eq!(values("a { /* open comment }"), Vec::<String>::new());
    }

    #[test]
    fn stray_close_brace_rejected() {
        let err = parse("a { color: red; } }").unwrap_err();
        assert!(matches!(err, StylesheetError::InvalidRule { line: 1, .. }));
    }

    #[test]
    fn missing_colon_rejected() {
        let err = parse("a {\n  color red; }").unwrap_err();
        assert!(matches!(
            err,
            StylesheetError::InvalidDeclaration { line: 2, text, .. } if text == "color red"
        ));
    }

    #[test]
    fn string_broken_by_newline_rejected() {
        assert!(matches!(
            parse("a { content: \"nope\n; }"),
            Err(StylesheetError::UnterminatedString { line: 1, .. })
        ));
    }

    #[test]
    fn commas_kept_when_normalization_is_off() {
        let sheet = parse_with("a { margin: fn(1 ,2) }", false).expect("parse");
        let mut seen = Vec::new();
        sheet.walk_decls(|d| seen.push(d.value.clone()));
        assert_eq!(seen, vec!["fn(1 ,2)"]);
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        let sheet = parse("\u{feff}a { color: red; }").expect("parse");
        assert_eq!(sheet.declaration_count(), 1);
    }
}
