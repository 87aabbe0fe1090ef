//! Integration tests for style computation: defaults, inheritance, and
//! selector matching.

use sable_css::{
    AlignItems, Color, ComputedStyle, DisplayValue, Edges, JustifyContent, compute_style,
    parse_css,
};
use sable_dom::{DomArena, NodeId};
use sable_html::parse_html;

/// Find the first element with the given tag, depth-first.
fn find_element(dom: &DomArena, id: NodeId, tag: &str) -> Option<NodeId> {
    if dom.as_element(id).is_some_and(|e| e.tag_name == tag) {
        return Some(id);
    }
    for &child in dom.children(id) {
        if let Some(found) = find_element(dom, child, tag) {
            return Some(found);
        }
    }
    None
}

/// Compute the style for the first `tag` element in `html` under a default
/// parent style.
fn styled(html: &str, css: &str, tag: &str) -> ComputedStyle {
    let dom = parse_html(html);
    let sheet = parse_css(css);
    let root = dom.root().expect("root exists");
    let id = find_element(&dom, root, tag).expect("element exists");
    let node = dom.get(id).expect("node exists");
    compute_style(node, &ComputedStyle::default(), Some(&sheet))
}

#[test]
fn defaults() {
    let style = ComputedStyle::default();
    assert_eq!(style.display, DisplayValue::Block);
    assert_eq!(style.width, None);
    assert_eq!(style.height, None);
    assert_eq!(style.margin, Edges::default());
    assert_eq!(style.padding, Edges::default());
    assert_eq!(style.border, Edges::default());
    assert_eq!(style.background, Color::TRANSPARENT);
    assert_eq!(style.border_color, Color::BLACK);
    assert_eq!(style.color, Color::BLACK);
    assert_eq!(style.font_size, 16.0);
    assert_eq!(style.flex_grow, 0.0);
    assert_eq!(style.justify_content, JustifyContent::FlexStart);
    assert_eq!(style.align_items, AlignItems::Stretch);
}

#[test]
fn matching_rule_sets_color_and_font_size() {
    let style = styled(
        "<p>Hello World</p>",
        "p { color: red; font-size: 20px }",
        "p",
    );
    assert_eq!(style.color, Color::rgba(255, 0, 0, 255));
    assert_eq!(style.font_size, 20.0);
}

#[test]
fn text_children_inherit_color_and_font_size() {
    let dom = parse_html("<p>Hello World</p>");
    let sheet = parse_css("p { color: red; font-size: 20px }");
    let root = dom.root().expect("root exists");
    let p = find_element(&dom, root, "p").expect("p exists");
    let p_style = compute_style(
        dom.get(p).expect("p node"),
        &ComputedStyle::default(),
        Some(&sheet),
    );

    let text = dom.children(p)[0];
    let text_style = compute_style(dom.get(text).expect("text node"), &p_style, Some(&sheet));
    assert_eq!(text_style.color, Color::rgba(255, 0, 0, 255));
    assert_eq!(text_style.font_size, 20.0);
}

#[test]
fn only_color_and_font_size_inherit() {
    let parent = ComputedStyle {
        color: Color::rgba(1, 2, 3, 255),
        font_size: 32.0,
        margin: Edges::uniform(10.0),
        background: Color::WHITE,
        width: Some(120.0),
        ..ComputedStyle::default()
    };

    let dom = parse_html("<p>x</p>");
    let root = dom.root().expect("root exists");
    let p = find_element(&dom, root, "p").expect("p exists");
    let style = compute_style(dom.get(p).expect("p node"), &parent, None);

    assert_eq!(style.color, parent.color);
    assert_eq!(style.font_size, parent.font_size);
    // Everything else resets to defaults
    assert_eq!(style.margin, Edges::default());
    assert_eq!(style.background, Color::TRANSPARENT);
    assert_eq!(style.width, None);
}

#[test]
fn later_rules_override_earlier_ones() {
    let style = styled("<p>x</p>", "p { color: red } p { color: blue }", "p");
    assert_eq!(style.color, Color::rgba(0, 0, 255, 255));
}

#[test]
fn class_matching_is_whole_string_equality() {
    let matched = styled(r#"<div class="note">x</div>"#, ".note { color: red }", "div");
    assert_eq!(matched.color, Color::rgba(255, 0, 0, 255));

    // Space-separated class lists do not split into tokens
    let unmatched = styled(
        r#"<div class="note wide">x</div>"#,
        ".note { color: red }",
        "div",
    );
    assert_eq!(unmatched.color, Color::BLACK);
}

#[test]
fn id_selector_matches_the_id_attribute() {
    let style = styled(r#"<div id="main">x</div>"#, "#main { color: green }", "div");
    assert_eq!(style.color, Color::rgba(0, 128, 0, 255));
}

#[test]
fn unmatched_rules_leave_defaults() {
    let style = styled("<div>x</div>", "p { color: red }", "div");
    assert_eq!(style.color, Color::BLACK);
}

#[test]
fn display_values_map_and_unknown_values_are_ignored() {
    assert_eq!(
        styled("<div>x</div>", "div { display: inline }", "div").display,
        DisplayValue::Inline
    );
    assert_eq!(
        styled("<div>x</div>", "div { display: none }", "div").display,
        DisplayValue::None
    );
    assert_eq!(
        styled("<div>x</div>", "div { display: flex }", "div").display,
        DisplayValue::Flex
    );
    assert_eq!(
        styled("<div>x</div>", "div { display: banana }", "div").display,
        DisplayValue::Block
    );
}

#[test]
fn named_colors() {
    let cases = [
        ("black", Color::rgba(0, 0, 0, 255)),
        ("white", Color::rgba(255, 255, 255, 255)),
        ("red", Color::rgba(255, 0, 0, 255)),
        ("green", Color::rgba(0, 128, 0, 255)),
        ("blue", Color::rgba(0, 0, 255, 255)),
        ("yellow", Color::rgba(255, 255, 0, 255)),
        ("gray", Color::rgba(128, 128, 128, 255)),
        ("grey", Color::rgba(128, 128, 128, 255)),
        ("transparent", Color::rgba(0, 0, 0, 0)),
    ];
    for (name, expected) in cases {
        let style = styled("<div>x</div>", &format!("div {{ background: {name} }}"), "div");
        assert_eq!(style.background, expected, "color {name}");
    }
}

#[test]
fn hex_and_rgb_colors() {
    assert_eq!(
        styled("<div>x</div>", "div { color: #1a2b3c }", "div").color,
        Color::rgba(0x1A, 0x2B, 0x3C, 255)
    );
    assert_eq!(
        styled("<div>x</div>", "div { color: rgb(12, 34, 56) }", "div").color,
        Color::rgba(12, 34, 56, 255)
    );
    assert_eq!(
        styled("<div>x</div>", "div { color: rgba(12, 34, 56, 128) }", "div").color,
        Color::rgba(12, 34, 56, 128)
    );
}

#[test]
fn shorthand_edges_apply_to_margin_padding_and_border_width() {
    let style = styled(
        "<div>x</div>",
        "div { margin: 1px 2px 3px 4px; padding: 5px; border-width: 2px 6px }",
        "div",
    );
    assert_eq!(
        style.margin,
        Edges {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0
        }
    );
    assert_eq!(style.padding, Edges::uniform(5.0));
    assert_eq!(
        style.border,
        Edges {
            top: 2.0,
            right: 6.0,
            bottom: 2.0,
            left: 6.0
        }
    );
}

#[test]
fn longhand_edges_override_a_single_side() {
    let style = styled(
        "<div>x</div>",
        "div { margin: 10px; margin-left: 3px }",
        "div",
    );
    assert_eq!(
        style.margin,
        Edges {
            top: 10.0,
            right: 10.0,
            bottom: 10.0,
            left: 3.0
        }
    );
}

#[test]
fn unknown_properties_are_ignored() {
    let style = styled("<div>x</div>", "div { zoom: 3; color: red }", "div");
    assert_eq!(style.color, Color::rgba(255, 0, 0, 255));
}

#[test]
fn percentages_and_foreign_units_are_raw_magnitudes() {
    let style = styled(
        "<div>x</div>",
        "div { width: 50%; height: 2em; font-size: 1.5rem }",
        "div",
    );
    assert_eq!(style.width, Some(50.0));
    assert_eq!(style.height, Some(2.0));
    assert_eq!(style.font_size, 1.5);
}

#[test]
fn flex_properties_parse_without_affecting_block_fields() {
    let style = styled(
        "<div>x</div>",
        "div { flex-grow: 2; justify-content: center; align-items: flex-end }",
        "div",
    );
    assert_eq!(style.flex_grow, 2.0);
    assert_eq!(style.justify_content, JustifyContent::Center);
    assert_eq!(style.align_items, AlignItems::FlexEnd);
}
