//! Declaration application and property-specific value parsers.
//!
//! Lengths are pixels: non-px units and percentages are interpreted as raw
//! pixel magnitudes (reported once through the warning channel). Unknown
//! properties and unparseable values are silently ignored.

use sable_common::warning::warn_once;

use crate::parser::Declaration;
use crate::tokenizer::CssToken;

use super::computed::{AlignItems, Color, ComputedStyle, DisplayValue, Edges, JustifyContent};

/// Apply one declaration to a computed style, in place.
pub fn apply_declaration(style: &mut ComputedStyle, decl: &Declaration) {
    match decl.property.as_str() {
        "display" => match decl.value.as_str() {
            "block" => style.display = DisplayValue::Block,
            "inline" => style.display = DisplayValue::Inline,
            "none" => style.display = DisplayValue::None,
            "flex" => style.display = DisplayValue::Flex,
            _ => {}
        },

        "width" => {
            if let Some(v) = parse_length(&decl.tokens) {
                style.width = Some(v);
            }
        }
        "height" => {
            if let Some(v) = parse_length(&decl.tokens) {
                style.height = Some(v);
            }
        }

        "margin" => style.margin = parse_edges(&decl.tokens),
        "margin-top" => {
            if let Some(v) = parse_length(&decl.tokens) {
                style.margin.top = v;
            }
        }
        "margin-right" => {
            if let Some(v) = parse_length(&decl.tokens) {
                style.margin.right = v;
            }
        }
        "margin-bottom" => {
            if let Some(v) = parse_length(&decl.tokens) {
                style.margin.bottom = v;
            }
        }
        "margin-left" => {
            if let Some(v) = parse_length(&decl.tokens) {
                style.margin.left = v;
            }
        }

        "padding" => style.padding = parse_edges(&decl.tokens),
        "padding-top" => {
            if let Some(v) = parse_length(&decl.tokens) {
                style.padding.top = v;
            }
        }
        "padding-right" => {
            if let Some(v) = parse_length(&decl.tokens) {
                style.padding.right = v;
            }
        }
        "padding-bottom" => {
            if let Some(v) = parse_length(&decl.tokens) {
                style.padding.bottom = v;
            }
        }
        "padding-left" => {
            if let Some(v) = parse_length(&decl.tokens) {
                style.padding.left = v;
            }
        }

        "font-size" => {
            if let Some(v) = parse_length(&decl.tokens) {
                style.font_size = v;
            }
        }

        "color" => {
            if let Some(c) = parse_color(decl) {
                style.color = c;
            }
        }

        "background" | "background-color" => {
            if let Some(c) = parse_color(decl) {
                style.background = c;
            }
        }

        "border-width" => style.border = parse_edges(&decl.tokens),

        "border-color" => {
            if let Some(c) = parse_color(decl) {
                style.border_color = c;
            }
        }

        "flex-grow" => {
            if let Some(CssToken::Number(v)) = decl.tokens.first()
                && let Ok(v) = v.parse::<f32>()
            {
                style.flex_grow = v;
            }
        }

        "justify-content" => match decl.value.as_str() {
            "flex-start" => style.justify_content = JustifyContent::FlexStart,
            "flex-end" => style.justify_content = JustifyContent::FlexEnd,
            "center" => style.justify_content = JustifyContent::Center,
            "space-between" => style.justify_content = JustifyContent::SpaceBetween,
            "space-around" => style.justify_content = JustifyContent::SpaceAround,
            _ => {}
        },

        "align-items" => match decl.value.as_str() {
            "flex-start" => style.align_items = AlignItems::FlexStart,
            "flex-end" => style.align_items = AlignItems::FlexEnd,
            "center" => style.align_items = AlignItems::Center,
            "stretch" => style.align_items = AlignItems::Stretch,
            _ => {}
        },

        // Unrecognised properties are silently ignored
        _ => {}
    }
}

/// Interpret the first numeric token as a pixel length.
///
/// Dimensions in any unit and bare percentages yield their raw magnitude.
fn parse_length(tokens: &[CssToken]) -> Option<f32> {
    let value = match tokens.first()? {
        CssToken::Number(v) => v,
        CssToken::Dimension { value, unit } => {
            if unit != "px" {
                warn_once("CSS", &format!("unit '{unit}' is treated as px"));
            }
            value
        }
        CssToken::Percentage(v) => {
            warn_once("CSS", "percentage lengths are treated as raw px magnitudes");
            v
        }
        _ => return None,
    };
    value.parse().ok()
}

/// Expand a 1/2/3/4-value shorthand into four edges.
///
/// One value sets all edges; two set top/bottom and right/left; three set
/// top, right/left, bottom; four set top, right, bottom, left. Any other
/// count yields zero edges.
fn parse_edges(tokens: &[CssToken]) -> Edges {
    let mut lengths = Vec::new();
    for token in tokens {
        let value = match token {
            CssToken::Number(v) => v,
            CssToken::Dimension { value, .. } => value,
            _ => continue,
        };
        if let Ok(v) = value.parse::<f32>() {
            lengths.push(v);
        }
    }

    match lengths.as_slice() {
        [all] => Edges::uniform(*all),
        [tb, rl] => Edges {
            top: *tb,
            right: *rl,
            bottom: *tb,
            left: *rl,
        },
        [t, rl, b] => Edges {
            top: *t,
            right: *rl,
            bottom: *b,
            left: *rl,
        },
        [t, r, b, l] => Edges {
            top: *t,
            right: *r,
            bottom: *b,
            left: *l,
        },
        _ => Edges::default(),
    }
}

/// Parse a colour from a declaration: a recognised keyword, a `#` hex
/// string of length 3/6/8, or an `rgb()`/`rgba()` function with integer
/// components.
fn parse_color(decl: &Declaration) -> Option<Color> {
    match decl.value.as_str() {
        "black" => return Some(Color::rgba(0, 0, 0, 255)),
        "white" => return Some(Color::rgba(255, 255, 255, 255)),
        "red" => return Some(Color::rgba(255, 0, 0, 255)),
        "green" => return Some(Color::rgba(0, 128, 0, 255)),
        "blue" => return Some(Color::rgba(0, 0, 255, 255)),
        "yellow" => return Some(Color::rgba(255, 255, 0, 255)),
        "gray" | "grey" => return Some(Color::rgba(128, 128, 128, 255)),
        "transparent" => return Some(Color::rgba(0, 0, 0, 0)),
        _ => {}
    }

    match decl.tokens.first() {
        Some(CssToken::Hash(hex)) => parse_hex_color(hex),
        Some(CssToken::Function(name)) if name == "rgb" || name == "rgba" => {
            parse_rgb_function(&decl.tokens[1..])
        }
        _ => None,
    }
}

/// `#RGB`, `#RRGGBB` or `#RRGGBBAA`, leading `#` already stripped.
fn parse_hex_color(hex: &str) -> Option<Color> {
    let byte = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);

    match hex.len() {
        3 => {
            let r = byte(&hex[0..1].repeat(2));
            let g = byte(&hex[1..2].repeat(2));
            let b = byte(&hex[2..3].repeat(2));
            Some(Color::rgba(r, g, b, 255))
        }
        6 => Some(Color::rgba(
            byte(&hex[0..2]),
            byte(&hex[2..4]),
            byte(&hex[4..6]),
            255,
        )),
        8 => Some(Color::rgba(
            byte(&hex[0..2]),
            byte(&hex[2..4]),
            byte(&hex[4..6]),
            byte(&hex[6..8]),
        )),
        _ => None,
    }
}

/// Integer components of `rgb(…)`/`rgba(…)`. Components that do not fit a
/// `u8` are skipped; fewer than three valid components yields no colour.
fn parse_rgb_function(tokens: &[CssToken]) -> Option<Color> {
    let mut nums = Vec::new();
    for token in tokens {
        if let CssToken::Number(v) = token
            && let Ok(v) = v.parse::<u8>()
        {
            nums.push(v);
        }
    }

    if nums.len() >= 3 {
        let a = if nums.len() >= 4 { nums[3] } else { 255 };
        return Some(Color::rgba(nums[0], nums[1], nums[2], a));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_css;

    fn style_for(css: &str) -> ComputedStyle {
        let sheet = parse_css(css);
        let mut style = ComputedStyle::default();
        for rule in &sheet.rules {
            for decl in &rule.declarations {
                apply_declaration(&mut style, decl);
            }
        }
        style
    }

    #[test]
    fn hex_shorthand_expands_digits() {
        let style = style_for("p { color: #f00 }");
        assert_eq!(style.color, Color::rgba(255, 0, 0, 255));
    }

    #[test]
    fn eight_digit_hex_carries_alpha() {
        let style = style_for("p { background: #11223344 }");
        assert_eq!(style.background, Color::rgba(0x11, 0x22, 0x33, 0x44));
    }

    #[test]
    fn rgba_with_fractional_alpha_keeps_opaque() {
        // 0.5 is not an integer component, so it is skipped and the
        // default alpha applies
        let style = style_for("p { color: rgba(10, 20, 30, 0.5) }");
        assert_eq!(style.color, Color::rgba(10, 20, 30, 255));
    }

    #[test]
    fn edge_shorthand_counts() {
        assert_eq!(
            style_for("p { margin: 5 }").margin,
            Edges::uniform(5.0)
        );
        assert_eq!(
            style_for("p { margin: 5 10 }").margin,
            Edges {
                top: 5.0,
                right: 10.0,
                bottom: 5.0,
                left: 10.0
            }
        );
        assert_eq!(
            style_for("p { margin: 5 10 15 }").margin,
            Edges {
                top: 5.0,
                right: 10.0,
                bottom: 15.0,
                left: 10.0
            }
        );
        assert_eq!(
            style_for("p { margin: 5 10 15 20 }").margin,
            Edges {
                top: 5.0,
                right: 10.0,
                bottom: 15.0,
                left: 20.0
            }
        );
    }
}
