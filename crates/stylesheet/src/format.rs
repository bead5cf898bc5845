use crate::config::FormatConfig;
use crate::error::StylesheetError;
use crate::node::Node;
use crate::parser::parse_with;

/// Parse `source`, normalizing selectors, params and values, and print it
/// back with the layout described by `cfg`.
///
/// Formatting is idempotent: formatting already formatted text returns it
/// unchanged.
pub fn format(source: &str, cfg: &FormatConfig) -> Result<String, StylesheetError> {
    cfg.validate()?;
    let mut sheet = parse_with(source, cfg.normalize_commas)?;
    if cfg.sort_declarations {
        sort_declarations(&mut sheet.nodes);
    }
    Ok(sheet.to_css(cfg))
}

/// Stable-sort each run of adjacent declarations by property name. Comments
/// and nested blocks end a run and keep their place.
fn sort_declarations(nodes: &mut [Node]) {
    for run in nodes.split_mut(|node| !matches!(node, Node::Declaration(_))) {
        run.sort_by(|a, b| property(a).cmp(property(b)));
    }
    for node in nodes {
        match node {
            Node::Rule { nodes, .. }
            | Node::AtRule {
                nodes: Some(nodes), ..
            } => sort_declarations(nodes),
            _ => {}
        }
    }
}

fn property(node: &Node) -> &str {
    match node {
        Node::Declaration(decl) => &decl.property,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_keep_source_order_by_default() {
        let out = format("a{top:0;color:red}", &FormatConfig::default()).expect("format");
        assert_eq!(out, "a {\n  top: 0;\n  color: red;\n}\n");
    }

    #[test]
    fn sorting_reorders_runs_between_comments() {
        let cfg = FormatConfig {
            sort_declarations: true,
            ..Default::default()
        };
        let out = format(
            "a{top:0;color:red;/* keep */z-index:1;left:0}@media print{b{margin:0;border:0}}",
            &cfg,
        )
        .expect("format");
        assert_eq!(
            out,
            "a {\n  color: red;\n  top: 0;\n  /* keep */\n  left: 0;\n  z-index: 1;\n}\n\n\
             @media print {\n  b {\n    border: 0;\n    margin: 0;\n  }\n}\n"
        );
        assert_eq!(format(&out, &cfg).expect("reformat"), out);
    }
}
