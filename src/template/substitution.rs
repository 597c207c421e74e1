//! Placeholder substitution engine for email templates

use std::collections::HashMap;

use super::escape::EscapePolicy;

/// Substitute {{variable}} placeholders in a template string.
///
/// Values are inserted verbatim. Equivalent to calling [`substitute_with`]
/// with [`EscapePolicy::None`].
pub fn substitute(template: &str, values: &HashMap<String, String>) -> String {
    substitute_with(template, values, EscapePolicy::None)
}

/// Substitute {{variable}} placeholders, applying `escape` to each value.
///
/// The template is scanned left to right in a single pass. Each well-formed
/// token is looked up in `values` by its identifier (whitespace inside the
/// braces is ignored): a hit is replaced by the mapped value, a miss is kept
/// as literal text. Replacement values are never re-scanned, so a value that
/// happens to contain token syntax comes through unchanged and the result
/// does not depend on any iteration order. An opening `{{` with no closing
/// `}}` is literal text to the end of the template.
pub fn substitute_with(
    template: &str,
    values: &HashMap<String, String>,
    escape: EscapePolicy,
) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    loop {
        let Some(start) = rest.find("{{") else {
            output.push_str(rest);
            break;
        };

        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            // Unterminated token, keep it as literal text
            output.push_str(&rest[start..]);
            break;
        };

        let raw = &after_open[..end];
        match values.get(raw.trim()) {
            Some(value) => output.push_str(&escape.apply(value)),
            None => {
                output.push_str("{{");
                output.push_str(raw);
                output.push_str("}}");
            }
        }

        rest = &after_open[end + 2..];
    }

    output
}

/// Collect the identifiers of all well-formed {{variable}} tokens.
///
/// Identifiers are returned in order of first appearance, deduplicated.
/// Running this over rendered output lists the tokens that did not resolve.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            break;
        };

        let identifier = after_open[..end].trim();
        if !identifier.is_empty() && !found.iter().any(|f| f == identifier) {
            found.push(identifier.to_string());
        }

        rest = &after_open[end + 2..];
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitute_simple() {
        let result = substitute("Hello {{name}}!", &values(&[("name", "World")]));
        assert_eq!(result, "Hello World!");
    }

    #[test]
    fn test_substitute_no_tokens() {
        let result = substitute("No tokens here", &HashMap::new());
        assert_eq!(result, "No tokens here");
    }

    #[test]
    fn test_substitute_no_tokens_with_values() {
        let result = substitute("No tokens here", &values(&[("name", "World")]));
        assert_eq!(result, "No tokens here");
    }

    #[test]
    fn test_substitute_empty_template() {
        assert_eq!(substitute("", &values(&[("a", "X")])), "");
    }

    #[test]
    fn test_substitute_missing_key_passes_through() {
        let result = substitute("{{a}} and {{b}}", &values(&[("a", "X")]));
        assert_eq!(result, "X and {{b}}");
    }

    #[test]
    fn test_substitute_all_occurrences() {
        let result = substitute(
            "{{name}}, yes you, {{name}}!",
            &values(&[("name", "Alice")]),
        );
        assert_eq!(result, "Alice, yes you, Alice!");
    }

    #[test]
    fn test_substitute_whitespace_in_braces() {
        let vals = values(&[("k", "v")]);
        assert_eq!(substitute("{{k}}", &vals), "v");
        assert_eq!(substitute("{{ k }}", &vals), "v");
        assert_eq!(substitute("{{  k  }}", &vals), "v");
    }

    #[test]
    fn test_substitute_value_not_rescanned() {
        // A value containing token syntax is emitted literally, never
        // resolved against other keys.
        let vals = values(&[("a", "{{b}}"), ("b", "X")]);
        assert_eq!(substitute("{{a}}", &vals), "{{b}}");
    }

    #[test]
    fn test_substitute_idempotent_when_resolved() {
        let vals = values(&[("greeting", "Hello"), ("name", "World")]);
        let once = substitute("{{greeting}}, {{name}}!", &vals);
        assert_eq!(substitute(&once, &vals), once);
    }

    #[test]
    fn test_substitute_unterminated_token_is_literal() {
        let result = substitute("before {{name after", &values(&[("name", "X")]));
        assert_eq!(result, "before {{name after");
    }

    #[test]
    fn test_substitute_adjacent_tokens() {
        let result = substitute("{{a}}{{b}}", &values(&[("a", "1"), ("b", "2")]));
        assert_eq!(result, "12");
    }

    #[test]
    fn test_substitute_empty_value() {
        let result = substitute("x{{a}}y", &values(&[("a", "")]));
        assert_eq!(result, "xy");
    }

    #[test]
    fn test_substitute_with_html_escape() {
        let vals = values(&[("name", "<Ada & Co>")]);
        let result = substitute_with("Hi {{name}}", &vals, EscapePolicy::Html);
        assert_eq!(result, "Hi &lt;Ada &amp; Co&gt;");
    }

    #[test]
    fn test_substitute_with_escape_leaves_template_markup() {
        // Only substituted values are escaped, the surrounding markup is not
        let vals = values(&[("name", "A<B")]);
        let result = substitute_with("<b>{{name}}</b>", &vals, EscapePolicy::Html);
        assert_eq!(result, "<b>A&lt;B</b>");
    }

    #[test]
    fn test_placeholders_in_order_deduplicated() {
        let found = placeholders("{{b}} {{ a }} {{b}} {{c}}");
        assert_eq!(found, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_placeholders_none() {
        assert!(placeholders("plain text").is_empty());
    }

    #[test]
    fn test_placeholders_ignores_unterminated() {
        assert_eq!(placeholders("{{a}} {{b"), vec!["a"]);
    }

    #[test]
    fn test_placeholders_lists_unresolved_after_render() {
        let rendered = substitute("{{a}} {{b}}", &values(&[("a", "X")]));
        assert_eq!(placeholders(&rendered), vec!["b"]);
    }
}
