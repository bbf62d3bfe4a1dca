//! Selector grammar: tokenizes a selector list and yields its pseudo-classes.
//!
//! tree-sitter's CSS grammar accepts selectors that browsers reject, so the
//! prelude of every style rule is re-checked here before its pseudo-classes
//! are trusted.

use baseline_core::errors::SelectorError;

/// One `:name` token. Pseudo-elements (`::name`) are not included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoClass {
    /// Lowercased name without the colon.
    pub name: String,
    /// Byte offset of the colon within the selector text.
    pub offset: usize,
}

struct Open {
    ch: char,
    offset: usize,
    /// Name of the functional pseudo-class this paren belongs to.
    pseudo: Option<String>,
    /// Byte offset right after the opening char.
    content_start: usize,
}

/// Parse a selector list and return every pseudo-class, nested ones included.
pub fn pseudo_classes(selector: &str) -> Result<Vec<PseudoClass>, SelectorError> {
    if selector.trim().is_empty() {
        return Err(SelectorError::Empty);
    }

    let bytes = selector.as_bytes();
    let mut out = Vec::new();
    let mut stack: Vec<Open> = Vec::new();
    let mut member_start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'\\' => {
                if i + 1 >= bytes.len() {
                    return Err(SelectorError::DanglingEscape);
                }
                i += next_char_len(selector, i + 1) + 1;
                continue;
            }
            b'"' | b'\'' => {
                i = skip_string(bytes, i)?;
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = selector[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |end| i + 2 + end + 2);
                continue;
            }
            b'(' | b'[' => {
                stack.push(Open {
                    ch: b as char,
                    offset: i,
                    pseudo: None,
                    content_start: i + 1,
                });
            }
            b')' | b']' => {
                let expected = if b == b')' { '(' } else { '[' };
                match stack.pop() {
                    Some(open) if open.ch == expected => {
                        if let Some(name) = open.pseudo {
                            if selector[open.content_start..i].trim().is_empty() {
                                return Err(SelectorError::EmptyArguments {
                                    name,
                                    offset: open.offset,
                                });
                            }
                        }
                    }
                    _ => {
                        return Err(SelectorError::UnexpectedClose {
                            found: b as char,
                            offset: i,
                        })
                    }
                }
            }
            b',' if stack.is_empty() => {
                if selector[member_start..i].trim().is_empty() {
                    return Err(SelectorError::EmptyListMember { offset: i });
                }
                member_start = i + 1;
            }
            b':' if !in_attribute(&stack) => {
                let colon = i;
                let element = bytes.get(i + 1) == Some(&b':');
                let name_start = if element { i + 2 } else { i + 1 };
                let name_end = ident_end(bytes, name_start);
                if name_end == name_start {
                    return Err(SelectorError::MissingPseudoName { offset: colon });
                }
                let name = selector[name_start..name_end].to_ascii_lowercase();
                i = name_end;
                if bytes.get(i) == Some(&b'(') {
                    stack.push(Open {
                        ch: '(',
                        offset: i,
                        pseudo: Some(name.clone()),
                        content_start: i + 1,
                    });
                    i += 1;
                }
                if !element {
                    out.push(PseudoClass {
                        name,
                        offset: colon,
                    });
                }
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    if let Some(open) = stack.pop() {
        return Err(SelectorError::Unbalanced {
            open: open.ch,
            offset: open.offset,
        });
    }
    if selector[member_start..].trim().is_empty() {
        return Err(SelectorError::EmptyListMember {
            offset: bytes.len(),
        });
    }
    Ok(out)
}

fn in_attribute(stack: &[Open]) -> bool {
    stack.last().is_some_and(|open| open.ch == '[')
}

fn next_char_len(s: &str, at: usize) -> usize {
    s[at..].chars().next().map_or(1, char::len_utf8)
}

/// Returns the index just past the closing quote.
fn skip_string(bytes: &[u8], start: usize) -> Result<usize, SelectorError> {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            c if c == quote => return Ok(i + 1),
            b'\n' => break,
            _ => i += 1,
        }
    }
    Err(SelectorError::UnterminatedString { offset: start })
}

/// CSS identifier characters: ASCII alphanumerics, `-`, `_`, and non-ASCII.
fn ident_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b >= 0x80 {
            i += 1;
        } else {
            break;
        }
    }
    i
}
