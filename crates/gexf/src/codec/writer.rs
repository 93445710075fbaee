//! Streaming XML token writer.
//!
//! Emits start tags, end tags and character data with indentation. An
//! element that receives no child element is closed on the same line
//! (`<a x="1"></a>`, `<a>text</a>`); elements are never self-closed.

use std::io::{self, Write};

/// Writer for XML tokens.
///
/// Tracks the open element stack so [`XmlWriter::end`] always closes the
/// innermost element.
#[derive(Debug)]
pub struct XmlWriter<W: Write> {
    out: W,
    indent: String,
    open: Vec<String>,
    depth: usize,
    /// Set right after a start tag; cleared by a nested start tag.
    indented_in: bool,
    put_newline: bool,
}

impl<W: Write> XmlWriter<W> {
    /// Creates a writer indenting with four spaces per level.
    pub fn new(out: W) -> Self {
        Self::with_indent(out, "    ")
    }

    /// Creates a writer with a custom indentation step.
    ///
    /// An empty step writes the whole document on one line.
    pub fn with_indent(out: W, indent: impl Into<String>) -> Self {
        Self {
            out,
            indent: indent.into(),
            open: Vec::new(),
            depth: 0,
            indented_in: false,
            put_newline: false,
        }
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Writes a start tag with attributes in the given order.
    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
        self.indent_start()?;
        self.out.write_all(b"<")?;
        self.out.write_all(name.as_bytes())?;
        for (key, value) in attrs {
            self.out.write_all(b" ")?;
            self.out.write_all(key.as_bytes())?;
            self.out.write_all(b"=\"")?;
            escape(&mut self.out, value)?;
            self.out.write_all(b"\"")?;
        }
        self.out.write_all(b">")?;
        self.open.push(name.to_string());
        Ok(())
    }

    /// Closes the innermost open element.
    pub fn end(&mut self) -> io::Result<()> {
        let name = self.open.pop().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "end tag without open element")
        })?;
        self.indent_end()?;
        self.out.write_all(b"</")?;
        self.out.write_all(name.as_bytes())?;
        self.out.write_all(b">")
    }

    /// Writes escaped character data inside the current element.
    pub fn text(&mut self, text: &str) -> io::Result<()> {
        escape(&mut self.out, text)
    }

    /// Writes a complete element holding only `text`.
    pub fn element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> io::Result<()> {
        self.start(name, attrs)?;
        if !text.is_empty() {
            self.text(text)?;
        }
        self.end()
    }

    /// Flushes and returns the underlying sink.
    ///
    /// Fails if elements are still open.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(name) = self.open.last() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("element <{}> was not closed", name),
            ));
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn indent_start(&mut self) -> io::Result<()> {
        if self.indent.is_empty() {
            return Ok(());
        }
        self.write_indent()?;
        self.depth += 1;
        self.indented_in = true;
        Ok(())
    }

    fn indent_end(&mut self) -> io::Result<()> {
        if self.indent.is_empty() {
            return Ok(());
        }
        self.depth -= 1;
        if self.indented_in {
            // No child element since the start tag: close inline.
            self.indented_in = false;
            return Ok(());
        }
        self.write_indent()
    }

    fn write_indent(&mut self) -> io::Result<()> {
        if self.put_newline {
            self.out.write_all(b"\n")?;
        } else {
            self.put_newline = true;
        }
        for _ in 0..self.depth {
            self.out.write_all(self.indent.as_bytes())?;
        }
        Ok(())
    }
}

/// Writes `s` escaped for use in text or a double-quoted attribute.
///
/// Characters not allowed in XML 1.0 are replaced with U+FFFD.
pub fn escape<W: Write + ?Sized>(out: &mut W, s: &str) -> io::Result<()> {
    let bytes = s.as_bytes();
    let mut last = 0;
    for (i, c) in s.char_indices() {
        let replacement: &[u8] = match c {
            '&' => b"&amp;",
            '<' => b"&lt;",
            '>' => b"&gt;",
            '"' => b"&#34;",
            '\'' => b"&#39;",
            '\t' => b"&#x9;",
            '\n' => b"&#xA;",
            '\r' => b"&#xD;",
            c if !is_xml_char(c) => "\u{FFFD}".as_bytes(),
            _ => continue,
        };
        out.write_all(&bytes[last..i])?;
        out.write_all(replacement)?;
        last = i + c.len_utf8();
    }
    out.write_all(&bytes[last..])
}

/// Returns the escaped form of `s` as a new string.
pub fn escape_str(s: &str) -> String {
    let mut buf = Vec::with_capacity(s.len());
    // Writing to a Vec cannot fail
    let _ = escape(&mut buf, s);
    String::from_utf8(buf).unwrap_or_default()
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn render(f: impl FnOnce(&mut XmlWriter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut w = XmlWriter::new(Vec::new());
        f(&mut w).unwrap();
        String::from_utf8(w.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_nested_indentation() {
        let out = render(|w| {
            w.start("a", &[])?;
            w.start("b", &[("x", "1"), ("y", "2")])?;
            w.element("c", &[], "text")?;
            w.end()?;
            w.element("d", &[("k", "v")], "")?;
            w.end()
        });
        assert_eq!(
            out,
            "<a>\n    <b x=\"1\" y=\"2\">\n        <c>text</c>\n    </b>\n    <d k=\"v\"></d>\n</a>"
        );
    }

    #[test]
    fn test_empty_root_closes_inline() {
        let out = render(|w| {
            w.start("root", &[("id", "0")])?;
            w.end()
        });
        assert_eq!(out, "<root id=\"0\"></root>");
    }

    #[test]
    fn test_no_indent_single_line() {
        let mut w = XmlWriter::with_indent(Vec::new(), "");
        w.start("a", &[]).unwrap();
        w.element("b", &[], "x").unwrap();
        w.end().unwrap();
        let out = String::from_utf8(w.finish().unwrap()).unwrap();
        assert_eq!(out, "<a><b>x</b></a>");
    }

    #[test]
    fn test_attribute_and_text_escaping() {
        let out = render(|w| w.element("e", &[("v", "a\"b'<c>&\n")], "x < y & z"));
        assert_eq!(
            out,
            "<e v=\"a&#34;b&#39;&lt;c&gt;&amp;&#xA;\">x &lt; y &amp; z</e>"
        );
    }

    #[test]
    fn test_invalid_chars_replaced() {
        assert_eq!(escape_str("a\u{0}b\u{1F}c"), "a\u{FFFD}b\u{FFFD}c");
        assert_eq!(escape_str("unicode: \u{1F600}"), "unicode: \u{1F600}");
    }

    #[test]
    fn test_unbalanced_end_rejected() {
        let mut w = XmlWriter::new(Vec::new());
        let err = w.end().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_unclosed_element_rejected_on_finish() {
        let mut w = XmlWriter::new(Vec::new());
        w.start("open", &[]).unwrap();
        assert_eq!(w.depth(), 1);
        assert!(w.finish().is_err());
    }

    proptest! {
        #[test]
        fn prop_escaped_has_no_markup(s in any::<String>()) {
            let escaped = escape_str(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('\''));
            prop_assert!(!escaped.contains('\n'));
        }

        #[test]
        fn prop_plain_text_unchanged(s in "[a-zA-Z0-9 _.-]*") {
            prop_assert_eq!(escape_str(&s), s);
        }
    }
}
