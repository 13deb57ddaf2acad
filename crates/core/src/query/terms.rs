//! Term matching shared by the extractors.
//!
//! Plain substring search misfires on short terms ("ml" in "html", "la" in
//! "flask", "intern" in "internal"), so terms only match on word boundaries.
//! A boundary is only required on a side where the term itself starts or
//! ends with an alphanumeric character, which lets ".net" and "c#" match
//! naturally. A trailing plural "s"/"es" is tolerated.

/// True if `term` occurs in `haystack` as a whole word (or its plural).
///
/// Both arguments are expected to be lower-cased already.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }

    let needs_leading = term.chars().next().is_some_and(char::is_alphanumeric);
    let needs_trailing = term.chars().last().is_some_and(char::is_alphanumeric);

    let mut start = 0;
    while let Some(pos) = haystack[start..].find(term) {
        let begin = start + pos;
        let end = begin + term.len();

        let leading_ok =
            !needs_leading || !haystack[..begin].chars().last().is_some_and(char::is_alphanumeric);
        let trailing_ok = !needs_trailing || trailing_boundary(&haystack[end..]);

        if leading_ok && trailing_ok {
            return true;
        }

        // Advance by one character, not one byte
        start = begin + haystack[begin..].chars().next().map_or(1, char::len_utf8);
    }

    false
}

/// True if any of `terms` occurs in `haystack`.
pub fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| contains_term(haystack, t))
}

fn trailing_boundary(rest: &str) -> bool {
    let is_end = |s: &str| !s.chars().next().is_some_and(char::is_alphanumeric);
    if is_end(rest) {
        return true;
    }
    if let Some(after) = rest.strip_prefix("es") {
        if is_end(after) {
            return true;
        }
    }
    rest.strip_prefix('s').is_some_and(is_end)
}

/// Append `item` unless an equal string (ignoring case) is already present.
pub fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing.eq_ignore_ascii_case(item)) {
        list.push(item.to_string());
    }
}

/// Upper-case the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word() {
        assert!(contains_term("senior ml engineer", "ml"));
        assert!(!contains_term("html and css", "ml"));
        assert!(!contains_term("flask apis", "la"));
        assert!(!contains_term("internal tools", "intern"));
        assert!(contains_term("ml", "ml"));
    }

    #[test]
    fn test_plurals() {
        assert!(contains_term("python developers", "developer"));
        assert!(contains_term("hiring data scientists", "data scientist"));
        assert!(contains_term("fullstack classes", "class"));
        assert!(!contains_term("javascript", "java"));
    }

    #[test]
    fn test_symbolic_terms() {
        assert!(contains_term("c# and .net devs", "c#"));
        assert!(contains_term("c# and .net devs", ".net"));
        assert!(contains_term("asp.net core", ".net"));
        assert!(contains_term("express with node.js", "node.js"));
    }

    #[test]
    fn test_multi_word() {
        assert!(contains_term("open to work from home", "work from home"));
        assert!(!contains_term("homework", "home"));
    }

    #[test]
    fn test_repeated_occurrence() {
        // First hit is inside a word, second is standalone
        assert!(contains_term("html then ml", "ml"));
    }

    #[test]
    fn test_non_ascii_haystack() {
        assert!(contains_term("développeur react à paris", "react"));
        assert!(!contains_term("développeur", "ml"));
    }

    #[test]
    fn test_empty_term() {
        assert!(!contains_term("anything", ""));
    }

    #[test]
    fn test_push_unique() {
        let mut list = vec!["Python".to_string()];
        push_unique(&mut list, "python");
        push_unique(&mut list, "Rust");
        assert_eq!(list, vec!["Python", "Rust"]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("looking for"), "Looking for");
        assert_eq!(capitalize(""), "");
    }
}
