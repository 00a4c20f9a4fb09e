//! String template rendering utilities.

/// Replace every `{{KEY}}` placeholder with its value.
///
/// Single left-to-right pass over the template: substituted values are
/// never rescanned, so placeholder-like text inside a value is kept as is.
/// Unknown placeholders are left untouched.
pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            result.push_str(&rest[start..]);
            return result;
        };

        let key = &after[..end];
        match variables.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => {
                result.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                result.push_str("{{");
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
pub(crate) fn is_present(template: &str, key: &str) -> bool {
    let placeholder = format!("{{{{{}}}}}", key);
    template.contains(&placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_all_occurrences() {
        let out = render("{{A}}-{{B}}-{{A}}", &[("A", "x"), ("B", "y")]);
        assert_eq!(out, "x-y-x");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        assert_eq!(render("{{MISSING}}", &[("A", "x")]), "{{MISSING}}");
    }

    #[test]
    fn render_does_not_rescan_values() {
        let out = render(
            "{{AUTHOR}} on {{DATE}}",
            &[("AUTHOR", "{{DATE}}"), ("DATE", "11/06/2025")],
        );
        assert_eq!(out, "{{DATE}} on 11/06/2025");
    }

    #[test]
    fn render_handles_unterminated_and_nested_braces() {
        assert_eq!(render("a {{A", &[("A", "x")]), "a {{A");
        assert_eq!(render("{{ {{A}}", &[("A", "x")]), "{{ x");
    }

    #[test]
    fn is_present_detects_placeholder() {
        assert!(is_present("// @file {{FILENAME}}", "FILENAME"));
        assert!(!is_present("// @file", "FILENAME"));
    }
}
