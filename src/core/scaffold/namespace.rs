use heck::ToUpperCamelCase;

/// Root namespace every generated tool lives in.
pub const ROOT_NAMESPACE: &str = "UTK";

/// `UTK::<Parent>::<Tool>`, or `UTK::<Tool>` without a parent.
pub fn build(tool: &str, parent: Option<&str>) -> String {
    std::iter::once(ROOT_NAMESPACE.to_string())
        .chain(parent.map(|p| p.to_upper_camel_case()))
        .chain(std::iter::once(tool.to_upper_camel_case()))
        .collect::<Vec<_>>()
        .join("::")
}
