//! Integration tests for the HTML tokenizer.

use sable_html::{Attribute, HtmlToken, HtmlTokenizer};

/// Helper to tokenize a string and return the tokens.
fn tokenize(input: &str) -> Vec<HtmlToken> {
    HtmlTokenizer::new(input).tokenize()
}

#[test]
fn simple_start_and_end_tags() {
    let tokens = tokenize("<div></div>");
    assert_eq!(
        tokens,
        vec![
            HtmlToken::StartTag {
                name: "div".to_string(),
                attributes: vec![],
            },
            HtmlToken::EndTag {
                name: "div".to_string(),
            },
            HtmlToken::EndOfFile,
        ]
    );
}

#[test]
fn tag_names_are_lowercased() {
    let tokens = tokenize("<DIV></DiV>");
    assert_eq!(
        tokens[0],
        HtmlToken::StartTag {
            name: "div".to_string(),
            attributes: vec![],
        }
    );
    assert_eq!(
        tokens[1],
        HtmlToken::EndTag {
            name: "div".to_string(),
        }
    );
}

#[test]
fn quoted_attribute_values() {
    let tokens = tokenize(r#"<a href="x.html" title='hi there'>"#);
    assert_eq!(
        tokens[0],
        HtmlToken::StartTag {
            name: "a".to_string(),
            attributes: vec![
                Attribute::new("href".to_string(), "x.html".to_string()),
                Attribute::new("title".to_string(), "hi there".to_string()),
            ],
        }
    );
}

#[test]
fn unquoted_attribute_value_stops_at_whitespace() {
    let tokens = tokenize("<input type=text name=q>");
    assert_eq!(
        tokens[0],
        HtmlToken::StartTag {
            name: "input".to_string(),
            attributes: vec![
                Attribute::new("type".to_string(), "text".to_string()),
                Attribute::new("name".to_string(), "q".to_string()),
            ],
        }
    );
}

#[test]
fn attribute_without_value_is_empty() {
    let tokens = tokenize("<input disabled>");
    assert_eq!(
        tokens[0],
        HtmlToken::StartTag {
            name: "input".to_string(),
            attributes: vec![Attribute::new("disabled".to_string(), String::new())],
        }
    );
}

#[test]
fn attribute_names_are_lowercased_and_allow_colons() {
    let tokens = tokenize(r#"<html XML:Lang="en">"#);
    assert_eq!(
        tokens[0],
        HtmlToken::StartTag {
            name: "html".to_string(),
            attributes: vec![Attribute::new("xml:lang".to_string(), "en".to_string())],
        }
    );
}

#[test]
fn self_closing_tag() {
    let tokens = tokenize("<br/><img src=x />");
    assert_eq!(
        tokens[0],
        HtmlToken::SelfClosingTag {
            name: "br".to_string(),
            attributes: vec![],
        }
    );
    assert_eq!(
        tokens[1],
        HtmlToken::SelfClosingTag {
            name: "img".to_string(),
            attributes: vec![Attribute::new("src".to_string(), "x".to_string())],
        }
    );
}

#[test]
fn text_is_emitted_verbatim() {
    let tokens = tokenize("<p>a &amp; b</p>");
    assert_eq!(tokens[1], HtmlToken::Text("a &amp; b".to_string()));
}

#[test]
fn comment_token() {
    let tokens = tokenize("<!-- hello -->");
    assert_eq!(tokens[0], HtmlToken::Comment(" hello ".to_string()));
}

#[test]
fn unterminated_comment_swallows_to_eof() {
    let tokens = tokenize("<!-- still open");
    assert_eq!(tokens[0], HtmlToken::Comment(" still open".to_string()));
    assert_eq!(tokens[1], HtmlToken::EndOfFile);
}

#[test]
fn doctype_both_cases() {
    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(tokens[0], HtmlToken::Doctype("html".to_string()));

    let tokens = tokenize("<!doctype html>");
    assert_eq!(tokens[0], HtmlToken::Doctype("html".to_string()));
}

#[test]
fn unterminated_quote_swallows_to_eof() {
    let tokens = tokenize(r#"<a href="never closed"#);
    assert_eq!(
        tokens[0],
        HtmlToken::StartTag {
            name: "a".to_string(),
            attributes: vec![Attribute::new(
                "href".to_string(),
                "never closed".to_string()
            )],
        }
    );
    assert_eq!(tokens[1], HtmlToken::EndOfFile);
}

#[test]
fn stream_ends_with_exactly_one_eof() {
    for input in ["", "text", "<p>x</p>", "<!-- open", "<div attr"] {
        let tokens = tokenize(input);
        let eofs = tokens.iter().filter(|t| t.is_eof()).count();
        assert_eq!(eofs, 1, "input {input:?}");
        assert!(tokens.last().is_some_and(HtmlToken::is_eof), "input {input:?}");
    }
}

#[test]
fn tokenizing_is_deterministic() {
    let input = "<div class=a>text<br></div>";
    assert_eq!(tokenize(input), tokenize(input));
}
