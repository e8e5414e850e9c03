//! Pulls the JSON object out of free-form model output.
//!
//! Models wrap their answer in prose, in ```json fences, or both. The body of
//! the first fenced block is searched first, then the whole text. Within the
//! searched text every `{` is tried in order; the first brace-balanced span
//! (string and escape aware) that parses as a JSON object wins.

use serde_json::Value;

const FENCE: &str = "```";

pub fn extract_json_object(text: &str) -> Option<&str> {
    fenced_body(text)
        .and_then(first_json_object)
        .or_else(|| first_json_object(text))
}

/// Content of the first ``` block, minus an optional language tag.
/// An unterminated fence runs to the end of the text.
fn fenced_body(text: &str) -> Option<&str> {
    let open = text.find(FENCE)?;
    let after = &text[open + FENCE.len()..];
    let tag_len = after
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(after.len());
    let body = &after[tag_len..];

    Some(match body.find(FENCE) {
        Some(close) => &body[..close],
        None => body,
    })
}

fn first_json_object(text: &str) -> Option<&str> {
    text.match_indices('{')
        .filter_map(|(start, _)| balanced_span(&text[start..]))
        .find(|candidate| matches!(serde_json::from_str::<Value>(candidate), Ok(Value::Object(_))))
}

/// `text` starts with `{`; returns the slice up to its matching `}`.
fn balanced_span(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[..=idx]);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBJ: &str = r#"{"summary":"x","technologies":[],"structure":"y"}"#;

    #[test]
    fn bare_object() {
        assert_eq!(extract_json_object(OBJ), Some(OBJ));
    }

    #[test]
    fn surrounding_whitespace() {
        let text = format!("\n\n  {OBJ}  \n");
        assert_eq!(extract_json_object(&text), Some(OBJ));
    }

    #[test]
    fn prose_and_inline_json_fence() {
        let text = format!("Here is the JSON: ```json {OBJ} ```");
        assert_eq!(extract_json_object(&text), Some(OBJ));
    }

    #[test]
    fn multiline_fence_without_tag() {
        let text = format!("```\n{OBJ}\n```");
        assert_eq!(extract_json_object(&text), Some(OBJ));
    }

    #[test]
    fn multiline_fence_with_tag_and_trailing_prose() {
        let text = format!("Sure!\n```json\n{OBJ}\n```\nLet me know if you need more.");
        assert_eq!(extract_json_object(&text), Some(OBJ));
    }

    #[test]
    fn unterminated_fence() {
        let text = format!("```json\n{OBJ}");
        assert_eq!(extract_json_object(&text), Some(OBJ));
    }

    #[test]
    fn prose_without_fence() {
        let text = format!("The analysis is: {OBJ} Hope this helps.");
        assert_eq!(extract_json_object(&text), Some(OBJ));
    }

    #[test]
    fn braces_inside_strings() {
        let obj = r#"{"summary":"uses {templates} and }","technologies":["a"],"structure":"{"}"#;
        assert_eq!(extract_json_object(obj), Some(obj));
    }

    #[test]
    fn escaped_quotes_inside_strings() {
        let obj = r#"{"summary":"say \"hi\" {","technologies":[],"structure":"y"}"#;
        let text = format!("prefix {obj} suffix");
        assert_eq!(extract_json_object(&text), Some(obj));
    }

    #[test]
    fn nested_objects_return_outermost() {
        let obj = r#"{"summary":"x","meta":{"a":{"b":1}},"structure":"y"}"#;
        assert_eq!(extract_json_object(obj), Some(obj));
    }

    #[test]
    fn skips_non_json_brace_spans() {
        let text = format!("Use {{curly}} braces, then: {OBJ}");
        assert_eq!(extract_json_object(&text), Some(OBJ));
    }

    #[test]
    fn fence_without_object_falls_back_to_whole_text() {
        let text = format!("```bash\nls -la\n```\n{OBJ}");
        assert_eq!(extract_json_object(&text), Some(OBJ));
    }

    #[test]
    fn first_of_several_objects() {
        let text = format!(r#"{OBJ} and also {{"other":1}}"#);
        assert_eq!(extract_json_object(&text), Some(OBJ));
    }

    #[test]
    fn arrays_are_not_objects() {
        assert_eq!(extract_json_object(r#"["summary","x"]"#), None);
    }

    #[test]
    fn nothing_to_extract() {
        assert_eq!(extract_json_object(""), None);
        assert_eq!(extract_json_object("I could not analyze this repository."), None);
        assert_eq!(extract_json_object("}{"), None);
    }

    #[test]
    fn unbalanced_object() {
        assert_eq!(extract_json_object(r#"{"summary":"x","technologies":["#), None);
    }

    #[test]
    fn unicode_content() {
        let obj = r#"{"summary":"日本語のプロジェクト","technologies":["Rust"],"structure":"é"}"#;
        let text = format!("→ {obj} ←");
        assert_eq!(extract_json_object(&text), Some(obj));
    }
}
