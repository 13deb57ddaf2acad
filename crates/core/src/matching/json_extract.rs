//! Locate a JSON object embedded in free-form model output.
//!
//! Models wrap JSON in prose or markdown fences. Rather than a greedy
//! `{.*}` match (which swallows trailing text containing braces), this scans
//! for the first balanced `{...}` span, tracking string literals and escapes
//! so braces inside strings don't count.

/// Return the first balanced top-level `{...}` span, if any.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find('{') {
        let start = search_from + offset;
        if let Some(end) = balanced_end(&text[start..]) {
            return Some(&text[start..start + end]);
        }
        // Unbalanced from here; a later brace may still open a valid object
        search_from = start + 1;
    }

    None
}

/// Byte length of the balanced object starting at `text[0] == '{'`.
fn balanced_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + ch.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}
