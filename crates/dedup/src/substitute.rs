use std::collections::HashMap;

use stylesheet::Stylesheet;

use crate::group::ColorGroup;

/// Rewrite every declaration whose whole value equals a grouped token into a
/// reference to that token's group. Returns the number of declarations
/// rewritten.
///
/// Values that merely contain a token (`1px solid #fff`,
/// `linear-gradient(#f00, #0f0)`) are left untouched. Each declaration is
/// visited once, and since a token belongs to exactly one group a value can
/// match at most one group.
pub fn substitute(sheet: &mut Stylesheet, groups: &[ColorGroup]) -> usize {
    let mut references: HashMap<&str, String> = HashMap::new();
    for group in groups {
        let reference = group.reference();
        for token in &group.tokens {
            let previous = references.insert(token.as_str(), reference.clone());
            debug_assert!(previous.is_none(), "token {token} is in two groups");
        }
    }

    let mut rewritten = 0;
    sheet.walk_decls_mut(|decl| {
        if let Some(reference) = references.get(decl.value.as_str()) {
            decl.value.clone_from(reference);
            rewritten += 1;
        }
    });
    rewritten
}
