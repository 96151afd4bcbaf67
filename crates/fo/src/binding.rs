//! Binding resolution with deterministic fallback semantics.

use platen_template::Binding;
use platen_xmlpath::XmlDocument;

/// Resolves a binding against the data document.
///
/// Any evaluation error (a relative path included) and any empty or absent
/// result yield the declared fallback; a non-empty value is returned
/// verbatim. Escaping happens at emission, not here. Pure relative to its
/// inputs: same document and binding always produce the same string.
pub fn resolve(doc: &XmlDocument, binding: &Binding) -> String {
    match doc.evaluate(&binding.path) {
        Ok(value) if !value.is_empty() => value,
        Ok(_) => binding.fallback.clone(),
        Err(e) => {
            log::debug!("binding '{}' failed ({e}), using fallback", binding.path);
            binding.fallback.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(path: &str, fallback: &str) -> Binding {
        Binding {
            path: path.to_string(),
            fallback: fallback.to_string(),
        }
    }

    fn doc(xml: &str) -> XmlDocument<'_> {
        XmlDocument::parse(xml).unwrap()
    }

    #[test]
    fn returns_value_when_present() {
        let doc = doc("<Case><Account><Name>Orbyt</Name></Account></Case>");
        assert_eq!(resolve(&doc, &binding("/Case/Account/Name", "N/A")), "Orbyt");
    }

    #[test]
    fn falls_back_when_path_absent() {
        let doc = doc("<Case><Account/></Case>");
        assert_eq!(resolve(&doc, &binding("/Case/Account/Name", "N/A")), "N/A");
    }

    #[test]
    fn falls_back_when_value_empty() {
        let doc = doc("<Case><Account><Name></Name></Account></Case>");
        assert_eq!(resolve(&doc, &binding("/Case/Account/Name", "N/A")), "N/A");
    }

    #[test]
    fn falls_back_on_relative_path() {
        let doc = doc("<Case><Name>Orbyt</Name></Case>");
        assert_eq!(resolve(&doc, &binding("Case/Name", "N/A")), "N/A");
    }

    #[test]
    fn value_is_not_escaped_at_this_layer() {
        let doc = doc("<Case><Name>A &amp; B</Name></Case>");
        assert_eq!(resolve(&doc, &binding("/Case/Name", "")), "A & B");
    }

    #[test]
    fn empty_fallback_is_allowed() {
        let doc = doc("<Case/>");
        assert_eq!(resolve(&doc, &binding("/Case/Missing", "")), "");
    }
}
