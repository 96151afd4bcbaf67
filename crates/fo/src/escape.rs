/// Escapes the five XML metacharacters.
///
/// Applied to every free-text value inserted into the output: element text,
/// header labels, fallback literals, and free-string attribute values. The
/// ampersand must be replaced first.
pub fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
