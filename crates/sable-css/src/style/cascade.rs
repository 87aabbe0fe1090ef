//! Style resolution for a single node.
//!
//! The cascade here is the minimal one the engine needs: start from the
//! defaults, inherit `color` and `font-size` from the parent, then apply
//! every matching rule's declarations in document order. Later rules win
//! by overwriting; there is no specificity.

use sable_dom::{ElementData, Node};

use crate::parser::{Selector, Stylesheet};

use super::computed::ComputedStyle;
use super::values::apply_declaration;

/// Resolve the computed style for a node given its parent's style and the
/// stylesheet. Text nodes only inherit.
#[must_use]
pub fn compute_style(
    node: &Node,
    parent: &ComputedStyle,
    stylesheet: Option<&Stylesheet>,
) -> ComputedStyle {
    let mut style = ComputedStyle {
        color: parent.color,
        font_size: parent.font_size,
        ..ComputedStyle::default()
    };

    let Some(element) = node.as_element() else {
        return style;
    };
    let Some(stylesheet) = stylesheet else {
        return style;
    };

    for rule in &stylesheet.rules {
        if matches_selectors(element, &rule.selectors) {
            for decl in &rule.declarations {
                apply_declaration(&mut style, decl);
            }
        }
    }

    style
}

/// True when any selector in the list matches the element.
///
/// `Class` compares the whole `class` attribute string, not
/// space-separated tokens.
fn matches_selectors(element: &ElementData, selectors: &[Selector]) -> bool {
    selectors.iter().any(|selector| match selector {
        Selector::Tag(name) => element.tag_name == *name,
        Selector::Class(name) => element.class_attr() == Some(name.as_str()),
        Selector::Id(name) => element.id() == Some(name.as_str()),
    })
}
