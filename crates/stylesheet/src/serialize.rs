use crate::config::FormatConfig;
use crate::node::{Node, Stylesheet};

pub(crate) fn write_stylesheet(sheet: &Stylesheet, cfg: &FormatConfig) -> String {
    let mut out = String::new();
    write_nodes(&mut out, &sheet.nodes, 0, cfg);
    out
}

fn write_nodes(out: &mut String, nodes: &[Node], depth: usize, cfg: &FormatConfig) {
    let indent = cfg.indent.repeat(depth);
    let mut prev: Option<&Node> = None;

    for node in nodes {
        if cfg.strip_comments && matches!(node, Node::Comment { .. }) {
            continue;
        }
        if let Some(prev) = prev {
            // A comment directly above a block stays attached to it.
            let separate = prev.is_block()
                || (node.is_block() && !matches!(prev, Node::Comment { .. }));
            if cfg.blank_line_between_rules && separate {
                out.push('\n');
            }
        }

        match node {
            Node::Rule { selector, nodes } => {
                write_block_open(out, &indent, selector);
                write_nodes(out, nodes, depth + 1, cfg);
                write_block_close(out, &indent);
            }
            Node::AtRule {
                name,
                params,
                nodes: Some(nodes),
            } => {
                write_block_open(out, &indent, &at_rule_head(name, params));
                write_nodes(out, nodes, depth + 1, cfg);
                write_block_close(out, &indent);
            }
            Node::AtRule {
                name,
                params,
                nodes: None,
            } => {
                out.push_str(&indent);
                out.push_str(&at_rule_head(name, params));
                out.push_str(";\n");
            }
            Node::Declaration(decl) => {
                out.push_str(&indent);
                out.push_str(&decl.property);
                out.push_str(": ");
                out.push_str(&decl.value);
                if decl.important {
                    out.push_str(" !important");
                }
                out.push_str(";\n");
            }
            Node::Comment { text } => {
                out.push_str(&indent);
                out.push_str("/* ");
                out.push_str(text);
                out.push_str(" */\n");
            }
        }
        prev = Some(node);
    }
}

fn at_rule_head(name: &str, params: &str) -> String {
    if params.is_empty() {
        format!("@{name}")
    } else {
        format!("@{name} {params}")
    }
}

fn write_block_open(out: &mut String, indent: &str, head: &str) {
    out.push_str(indent);
    out.push_str(head);
    out.push_str(" {\n");
}

fn write_block_close(out: &mut String, indent: &str) {
    out.push_str(indent);
    out.push_str("}\n");
}
