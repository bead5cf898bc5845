use stylesheet::{Declaration, FormatConfig, Node, Stylesheet};

use crate::config::DedupConfig;
use crate::group::ColorGroup;

/// Build the root-scope rule holding one generated declaration per group, in
/// index order. The rule is produced even when there are no groups.
pub fn root_rule(groups: &[ColorGroup], cfg: &DedupConfig) -> Node {
    let mut nodes = Vec::with_capacity(groups.len() * 2);
    for group in groups {
        if cfg.emit_provenance {
            nodes.push(Node::Comment {
                text: group.provenance(),
            });
        }
        nodes.push(Node::Declaration(Declaration::new(
            group.var_name.clone(),
            group.key.as_str(),
        )));
    }
    Node::Rule {
        selector: cfg.root_selector.clone(),
        nodes,
    }
}

/// Serialize the root block followed by the (already rewritten) document.
///
/// The body keeps its rule order; only the root block is added in front.
pub fn assemble(
    groups: &[ColorGroup],
    sheet: &Stylesheet,
    cfg: &DedupConfig,
    format: &FormatConfig,
) -> String {
    let mut out = Stylesheet::new(vec![root_rule(groups, cfg)]).to_css(format);
    let body = sheet.to_css(format);
    if !body.is_empty() {
        if format.blank_line_between_rules {
            out.push('\n');
        }
        out.push_str(&body);
    }
    out
}
