//! Splits template source into text and field nodes.

use super::{Node, TemplateError};

enum Action {
    Field(Vec<String>),
    Comment,
}

/// Lenient parse: malformed actions are dropped and reported, an unclosed
/// `{{` keeps the rest of the source as text.
pub(super) fn parse(src: &str) -> (Vec<Node>, Vec<TemplateError>) {
    let mut nodes = Vec::new();
    let mut errors = Vec::new();
    let mut text = String::new();
    let mut rest = src;
    let mut offset = 0;

    while let Some(open) = rest.find("{{") {
        text.push_str(&rest[..open]);
        let start = offset + open;
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            errors.push(TemplateError::Unclosed { offset: start });
            text.push_str(&rest[open..]);
            rest = "";
            break;
        };

        let mut inner = &after_open[..close];
        if let Some(stripped) = strip_left_trim(inner) {
            let kept = text.trim_end().len();
            text.truncate(kept);
            inner = stripped;
        }
        let trim_right = match strip_right_trim(inner) {
            Some(stripped) => {
                inner = stripped;
                true
            }
            None => false,
        };

        match parse_action(inner) {
            Some(Action::Field(path)) => {
                if !text.is_empty() {
                    nodes.push(Node::Text(std::mem::take(&mut text)));
                }
                nodes.push(Node::Field(path));
            }
            Some(Action::Comment) => {}
            None => errors.push(TemplateError::UnsupportedAction {
                action: inner.trim().to_string(),
                offset: start,
            }),
        }

        let consumed = open + 2 + close + 2;
        rest = &rest[consumed..];
        offset += consumed;
        if trim_right {
            let trimmed = rest.trim_start();
            offset += rest.len() - trimmed.len();
            rest = trimmed;
        }
    }

    text.push_str(rest);
    if !text.is_empty() {
        nodes.push(Node::Text(text));
    }
    (nodes, errors)
}

/// `{{- x` trims whitespace before the action. The dash must be followed by a space.
fn strip_left_trim(inner: &str) -> Option<&str> {
    let rest = inner.strip_prefix('-')?;
    rest.starts_with(|c: char| c.is_ascii_whitespace())
        .then_some(rest)
}

fn strip_right_trim(inner: &str) -> Option<&str> {
    let rest = inner.strip_suffix('-')?;
    rest.ends_with(|c: char| c.is_ascii_whitespace())
        .then_some(rest)
}

fn parse_action(inner: &str) -> Option<Action> {
    let action = inner.trim();
    if action.len() >= 4 && action.starts_with("/*") && action.ends_with("*/") {
        return Some(Action::Comment);
    }
    let path = action.strip_prefix('.')?;
    if path.is_empty() {
        return Some(Action::Field(Vec::new()));
    }
    let fields: Vec<String> = path.split('.').map(str::to_string).collect();
    fields
        .iter()
        .all(|f| is_identifier(f))
        .then_some(Action::Field(fields))
}

fn is_identifier(field: &str) -> bool {
    !field.is_empty() && field.chars().all(|c| c.is_alphanumeric() || c == '_')
}
