use serde::{Deserialize, Serialize};

use crate::utility::str::decode_html_entities;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type", content = "content")]
pub enum HtmlToken {
    StartTag {
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    EndTag {
        name: String,
    },
    Text(String),
}

// Lexical analysis
pub fn tokenize_html(html: &str) -> Vec<HtmlToken> {
    let mut tokens = Vec::new();

    let mut rest = html;
    let mut text_buffer = String::new();

    while !rest.is_empty() {
        let lt = match rest.find('<') {
            Some(lt) => lt,
            None => {
                text_buffer.push_str(rest);
                break;
            }
        };

        text_buffer.push_str(&rest[..lt]);
        rest = &rest[lt..];

        match read_markup(rest) {
            Some((len, token)) => {
                if !text_buffer.is_empty() {
                    tokens.push(HtmlToken::Text(decode_html_entities(&text_buffer)));
                    text_buffer.clear();
                }
                if let Some(token) = token {
                    tokens.push(token);
                }
                rest = &rest[len..];
            }

            // '<' that does not open a tag
            None => {
                text_buffer.push('<');
                rest = &rest[1..];
            }
        }
    }

    if !text_buffer.is_empty() {
        tokens.push(HtmlToken::Text(decode_html_entities(&text_buffer)));
    }

    tokens
}

// Reads the markup at the head of `s` (which starts with '<')
// Returns the consumed length and the token; comments and declarations yield no token
fn read_markup(s: &str) -> Option<(usize, Option<HtmlToken>)> {
    if let Some(body) = s.strip_prefix("<!--") {
        let len = match body.find("-->") {
            Some(end) => "<!--".len() + end + "-->".len(),
            None => s.len(),
        };
        return Some((len, None));
    }

    if s.starts_with("<!") || s.starts_with("<?") {
        let len = s.find('>').map(|end| end + 1).unwrap_or(s.len());
        return Some((len, None));
    }

    if let Some(body) = s.strip_prefix("</") {
        let name_len = tag_name_len(body);
        if name_len == 0 {
            return None;
        }
        let end = body.find('>')?;
        let name = body[..name_len].to_ascii_lowercase();
        return Some(("</".len() + end + 1, Some(HtmlToken::EndTag { name })));
    }

    let body = &s[1..];
    let name_len = tag_name_len(body);
    if name_len == 0 {
        return None;
    }
    let name = body[..name_len].to_ascii_lowercase();

    let (attributes, self_closing, attributes_len) = read_attributes(&body[name_len..])?;

    Some((
        1 + name_len + attributes_len,
        Some(HtmlToken::StartTag {
            name,
            attributes,
            self_closing,
        }),
    ))
}

fn tag_name_len(s: &str) -> usize {
    match s.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => s
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == ':'))
            .unwrap_or(s.len()),
        _ => 0,
    }
}

// Reads attributes up to and including '>'
fn read_attributes(s: &str) -> Option<(Vec<(String, String)>, bool, usize)> {
    let mut attributes = Vec::new();
    let mut rest = s;

    loop {
        let c = rest.chars().next()?;

        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
            continue;
        }

        if c == '>' {
            return Some((attributes, false, s.len() - rest.len() + 1));
        }

        if c == '/' {
            if rest[1..].starts_with('>') {
                return Some((attributes, true, s.len() - rest.len() + 2));
            }
            rest = &rest[1..];
            continue;
        }

        let name_len = rest
            .find(|c: char| c.is_whitespace() || c == '=' || c == '>' || c == '/')
            .unwrap_or(rest.len());
        let name = rest[..name_len].to_ascii_lowercase();
        rest = rest[name_len..].trim_start();

        rest = match rest.strip_prefix('=') {
            Some(value) => value.trim_start(),
            None => {
                attributes.push((name, String::new()));
                continue;
            }
        };

        let value = match rest.chars().next()? {
            quote @ ('"' | '\'') => {
                let value_len = rest[1..].find(quote)?;
                let value = &rest[1..(1 + value_len)];
                rest = &rest[(value_len + 2)..];
                value
            }
            _ => {
                let value_len = rest
                    .find(|c: char| c.is_whitespace() || c == '>')
                    .unwrap_or(rest.len());
                let value = &rest[..value_len];
                rest = &rest[value_len..];
                value
            }
        };

        attributes.push((name, decode_html_entities(value)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn start(name: &str, attributes: &[(&str, &str)]) -> HtmlToken {
        HtmlToken::StartTag {
            name: name.to_owned(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            self_closing: false,
        }
    }

    fn end(name: &str) -> HtmlToken {
        HtmlToken::EndTag {
            name: name.to_owned(),
        }
    }

    #[test]
    fn test_tags_and_text() {
        let tokens = tokenize_html("<TR><th>1st sing.</th></TR>");
        assert_eq!(
            tokens,
            vec![
                start("tr", &[]),
                start("th", &[]),
                HtmlToken::Text("1st sing.".to_owned()),
                end("th"),
                end("tr"),
            ]
        );
    }

    #[test]
    fn test_attribute_forms() {
        let tokens =
            tokenize_html(r#"<td class="a b" colspan=2 data-x='q&amp;a' hidden style = "x">"#);
        assert_eq!(
            tokens,
            vec![start(
                "td",
                &[
                    ("class", "a b"),
                    ("colspan", "2"),
                    ("data-x", "q&a"),
                    ("hidden", ""),
                    ("style", "x"),
                ]
            )]
        );
    }

    #[test]
    fn test_self_closing_and_comments() {
        let tokens = tokenize_html("a<br/><!-- note -->b<!DOCTYPE html>");
        assert_eq!(
            tokens,
            vec![
                HtmlToken::Text("a".to_owned()),
                HtmlToken::StartTag {
                    name: "br".to_owned(),
                    attributes: vec![],
                    self_closing: true,
                },
                HtmlToken::Text("b".to_owned()),
            ]
        );
    }

    #[test]
    fn test_stray_lt_is_text() {
        let tokens = tokenize_html("a < b &amp; c");
        assert_eq!(tokens, vec![HtmlToken::Text("a < b & c".to_owned())]);
    }

    #[test]
    fn test_non_ascii_attribute_value() {
        let tokens = tokenize_html(r#"<span title="sääli">x</span>"#);
        assert_eq!(
            tokens,
            vec![
                start("span", &[("title", "sääli")]),
                HtmlToken::Text("x".to_owned()),
                end("span"),
            ]
        );
    }

    #[test]
    fn test_large_page_is_linear() {
        let page = "<div class=\"x\"><span>word</span></div>\n".repeat(20_000);

        let started = Instant::now();
        let tokens = tokenize_html(&page);
        assert!(started.elapsed() < Duration::from_secs(5));

        assert_eq!(tokens.len(), 6 * 20_000);
        assert_eq!(tokens[0], start("div", &[("class", "x")]));
        assert_eq!(tokens[5], HtmlToken::Text("\n".to_owned()));
    }

    #[test]
    fn test_unterminated_tag_is_text() {
        let tokens = tokenize_html(r#"x <td class="a"#);
        assert_eq!(tokens, vec![HtmlToken::Text(r#"x <td class="a"#.to_owned())]);
    }
}
