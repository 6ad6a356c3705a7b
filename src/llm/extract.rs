//! JSON substring extraction from model replies
//!
//! The service is prompted to reply with bare JSON, but models wrap output in
//! prose or code fences often enough that we slice out the JSON ourselves:
//! first `[` to last `]` for arrays, first `{` to last `}` for objects.

/// Slice from the first `[` to the last `]`, inclusive
pub fn json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Slice from the first `{` to the last `}`, inclusive
pub fn json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_bare() {
        assert_eq!(json_array(r#"[{"a":1}]"#), Some(r#"[{"a":1}]"#));
    }

    #[test]
    fn test_array_wrapped_in_prose() {
        let reply = "Sure! Here is the result:\n```json\n[1, 2]\n```\nHope that helps.";
        assert_eq!(json_array(reply), Some("[1, 2]"));
    }

    #[test]
    fn test_array_missing_brackets() {
        assert_eq!(json_array("no json here"), None);
        assert_eq!(json_array("only open ["), None);
        assert_eq!(json_array("] reversed ["), None);
    }

    #[test]
    fn test_object_wrapped() {
        let reply = "The nutrition is {\"calories\": 95} per serving.";
        assert_eq!(json_object(reply), Some("{\"calories\": 95}"));
    }

    #[test]
    fn test_object_missing_braces() {
        assert_eq!(json_object("calories: 95"), None);
    }
}
