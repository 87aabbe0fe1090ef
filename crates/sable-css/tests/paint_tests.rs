//! Integration tests for display-list generation.

use sable_css::{
    Color, LayoutTree, PaintList, PaintOp, Rect, build_layout_tree, compute_layout, paint,
    paint_background, parse_css,
};
use sable_html::parse_html;

fn painted(html: &str, css: &str) -> PaintList {
    let dom = parse_html(html);
    let sheet = parse_css(css);
    let mut tree = build_layout_tree(&dom, Some(&sheet));
    compute_layout(&mut tree, 800.0, 600.0);
    paint(&tree)
}

#[test]
fn empty_tree_paints_nothing() {
    let tree = LayoutTree::new();
    assert!(paint(&tree).is_empty());
}

#[test]
fn transparent_backgrounds_emit_no_fill() {
    // Nothing is styled, so nothing is painted
    let list = painted("<body><div><p>x</p></div></body>", "");
    let fills = list
        .ops()
        .iter()
        .filter(|op| matches!(op, PaintOp::FillRect { .. }))
        .count();
    assert_eq!(fills, 0);
}

#[test]
fn visible_background_fills_the_node_rect() {
    let list = painted("<body><div></div></body>", "div { height: 50px; background: red }");
    let red = Color::rgba(255, 0, 0, 255);
    assert!(list.ops().iter().any(|op| matches!(
        op,
        PaintOp::FillRect { rect, color }
            if *color == red && rect.width == 800.0 && rect.height == 50.0
    )));
}

#[test]
fn borders_emit_one_strip_per_nonzero_edge() {
    let list = painted(
        "<body><div></div></body>",
        "div { height: 50px; border-width: 2px; border-color: blue }",
    );
    let blue = Color::rgba(0, 0, 255, 255);

    let strips: Vec<&Rect> = list
        .ops()
        .iter()
        .filter_map(|op| match op {
            PaintOp::FillRect { rect, color } if *color == blue => Some(rect),
            _ => None,
        })
        .collect();
    assert_eq!(strips.len(), 4);

    // Top, right, bottom, left, in painting order
    assert_eq!(strips[0], &Rect::new(0.0, 0.0, 800.0, 2.0));
    assert_eq!(strips[1], &Rect::new(798.0, 0.0, 2.0, 50.0));
    assert_eq!(strips[2], &Rect::new(0.0, 48.0, 800.0, 2.0));
    assert_eq!(strips[3], &Rect::new(0.0, 0.0, 2.0, 50.0));
}

#[test]
fn partial_borders_skip_zero_edges() {
    let list = painted(
        "<body><div></div></body>",
        "div { height: 50px; border-width: 3px 0 0 0; border-color: blue }",
    );
    let blue = Color::rgba(0, 0, 255, 255);
    let strips: Vec<&Rect> = list
        .ops()
        .iter()
        .filter_map(|op| match op {
            PaintOp::FillRect { rect, color } if *color == blue => Some(rect),
            _ => None,
        })
        .collect();
    assert_eq!(strips.len(), 1);
    assert_eq!(strips[0], &Rect::new(0.0, 0.0, 800.0, 3.0));
}

#[test]
fn text_emits_draw_text_with_inherited_style() {
    let list = painted("<body><p>Hello</p></body>", "p { color: red; font-size: 20px }");

    let text_ops: Vec<_> = list
        .ops()
        .iter()
        .filter_map(|op| match op {
            PaintOp::DrawText {
                rect,
                text,
                color,
                font_size,
            } => Some((rect, text, color, font_size)),
            _ => None,
        })
        .collect();
    assert_eq!(text_ops.len(), 1);

    let (rect, text, color, font_size) = text_ops[0];
    assert_eq!(text, "Hello");
    assert_eq!(*color, Color::rgba(255, 0, 0, 255));
    assert_eq!(*font_size, 20.0);
    // The text box spans the paragraph's content area
    assert_eq!(rect.x, 0.0);
    assert_eq!(rect.width, 800.0);
}

#[test]
fn paint_order_is_background_then_borders_then_text_then_children() {
    let list = painted(
        "<body><div><p>txt</p></div></body>",
        "div { background: red; border-width: 2px; border-color: blue; height: 100px }",
    );

    let kinds: Vec<&str> = list
        .ops()
        .iter()
        .map(|op| match op {
            PaintOp::FillRect { color, .. } if color.r == 255 => "bg",
            PaintOp::FillRect { .. } => "border",
            PaintOp::DrawText { .. } => "text",
            PaintOp::StrokeRect { .. } => "stroke",
            PaintOp::ClipRect { .. } => "clip",
        })
        .collect();
    assert_eq!(kinds, vec!["bg", "border", "border", "border", "border", "text"]);
}

#[test]
fn paint_background_covers_the_viewport_first() {
    let mut list = PaintList::new();
    paint_background(&mut list, 800.0, 600.0, Color::WHITE);
    list.extend(painted("<body><p>x</p></body>", "body { background: gray }"));

    match &list.ops()[0] {
        PaintOp::FillRect { rect, color } => {
            assert_eq!(rect, &Rect::new(0.0, 0.0, 800.0, 600.0));
            assert_eq!(*color, Color::WHITE);
        }
        other => panic!("expected background fill, got {other:?}"),
    }
    // The page background stays behind the body's own fill
    assert!(matches!(
        &list.ops()[1],
        PaintOp::FillRect { color, .. } if *color == Color::rgba(128, 128, 128, 255)
    ));
}

#[test]
fn dump_lists_ops_in_order() {
    let mut list = PaintList::new();
    list.push_fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
    list.push_stroke_rect(Rect::new(1.0, 1.0, 8.0, 8.0), Color::BLACK);
    list.push_draw_text(
        Rect::new(2.0, 2.0, 6.0, 6.0),
        "hi".to_string(),
        Color::BLACK,
        16.0,
    );
    list.push_clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));

    let dump = list.dump();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("0: FillRect"));
    assert!(lines[1].starts_with("1: StrokeRect"));
    assert!(lines[2].starts_with("2: DrawText"));
    assert!(lines[3].starts_with("3: ClipRect"));
}
