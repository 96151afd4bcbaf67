//! The static document envelope.
//!
//! One fixed layout-master set with a single A4 page master. A page's
//! declared `size` selects among the masters; with one preset defined, every
//! page sequence references `A4`.

const ENVELOPE_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<fo:root xmlns:fo="http://www.w3.org/1999/XSL/Format">
  <fo:layout-master-set>
    <fo:simple-page-master master-name="A4" page-width="210mm" page-height="297mm" margin="10mm">
      <fo:region-body />
    </fo:simple-page-master>
  </fo:layout-master-set>
"#;

/// Wraps composed page sequences in the document envelope: XML declaration,
/// namespaced root, layout-master set. The boilerplate is byte-for-byte
/// fixed so identical input always yields identical output text.
pub fn emit_document(page_sequences: &str) -> String {
    format!("{ENVELOPE_HEAD}  {page_sequences}\n</fo:root>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_declares_xml_and_namespace() {
        let out = emit_document("");
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(out.contains("<fo:root xmlns:fo=\"http://www.w3.org/1999/XSL/Format\">"));
        assert!(out.ends_with("</fo:root>"));
    }

    #[test]
    fn envelope_defines_single_a4_master() {
        let out = emit_document("");
        assert!(out.contains(
            "<fo:simple-page-master master-name=\"A4\" page-width=\"210mm\" page-height=\"297mm\" margin=\"10mm\">"
        ));
        assert_eq!(out.matches("fo:simple-page-master").count(), 2);
    }

    #[test]
    fn page_sequences_are_embedded_verbatim() {
        let out = emit_document("<fo:page-sequence/>");
        assert!(out.contains("  <fo:page-sequence/>\n</fo:root>"));
    }
}
