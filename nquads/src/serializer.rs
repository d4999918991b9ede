//! Serializer for the N-Quads concrete syntax.
//!
//! **Important**:
//! the methods in this module accepting a [`Write`]
//! make no effort to minimize the number of write operations.
//! Hence, in most cased, they should be passed a [`BufWriter`].
//!
//! [`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
//! [`BufWriter`]: https://doc.rust-lang.org/std/io/struct.BufWriter.html

use rdfjs_term::Quad;
use std::io;

/// Write `quad` to `w` as one line of N-Quads, including its line break.
pub fn write_quad<W: io::Write>(w: &mut W, quad: &Quad) -> io::Result<()> {
    writeln!(w, "{quad}")
}

/// Serialize `quad` as one line of N-Quads, including its line break.
pub fn to_nquads_line(quad: &Quad) -> String {
    format!("{quad}\n")
}

/// N-Quads serializer.
pub struct NqSerializer<W> {
    write: W,
}

impl<W> NqSerializer<W>
where
    W: io::Write,
{
    /// Build a new N-Quads serializer writing to `write`.
    #[inline]
    pub fn new(write: W) -> Self {
        NqSerializer { write }
    }

    /// Write one quad.
    pub fn serialize_quad(&mut self, quad: &Quad) -> io::Result<&mut Self> {
        write_quad(&mut self.write, quad)?;
        Ok(self)
    }

    /// Write all the quads of `quads`, in order.
    pub fn serialize_quads<'a, I>(&mut self, quads: I) -> io::Result<&mut Self>
    where
        I: IntoIterator<Item = &'a Quad>,
    {
        for quad in quads {
            write_quad(&mut self.write, quad)?;
        }
        Ok(self)
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.write.flush()
    }

    /// Consume this serializer, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.write
    }
}

impl NqSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    #[must_use]
    pub fn new_stringifier() -> Self {
        Self::new(Vec::new())
    }

    /// The N-Quads written so far.
    pub fn as_str(&self) -> &str {
        // only `Display` output of quads is ever written to the buffer
        std::str::from_utf8(&self.write).unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{parse_quad, read_quads};
    use rdfjs_term::ns::xsd;
    use rdfjs_term::{Literal, Term};

    fn quads() -> Vec<Quad> {
        let me = Term::blank_node("me");
        vec![
            Quad::new(
                me.clone(),
                Term::named_node("http://schema.org/name"),
                Term::literal("Pierre-Antoine"),
                None,
            ),
            Quad::new(
                me.clone(),
                Term::named_node("http://example.org/value"),
                Literal::new_typed("42", xsd::integer.clone()).into(),
                Some(me.clone()),
            ),
            Quad::new(
                me.clone(),
                Term::named_node("http://example.org/message"),
                Literal::new_lang("hello\n\"world\"", "en").into(),
                Some(Term::named_node("http://example.org/g")),
            ),
        ]
    }

    #[test]
    fn stringifier() -> Result<(), Box<dyn std::error::Error>> {
        let quads = quads();
        let mut ser = NqSerializer::new_stringifier();
        let got = ser.serialize_quads(&quads)?.as_str();
        let expected = r#"_:me <http://schema.org/name> "Pierre-Antoine" .
_:me <http://example.org/value> "42"^^<http://www.w3.org/2001/XMLSchema#integer> _:me .
_:me <http://example.org/message> "hello\n\"world\""@en <http://example.org/g> .
"#;
        assert_eq!(got, expected);
        Ok(())
    }

    #[test]
    fn serialized_quads_parse_back() -> Result<(), Box<dyn std::error::Error>> {
        let quads = quads();
        for q in &quads {
            assert_eq!(parse_quad(&to_nquads_line(q)).as_ref(), Some(q));
        }
        let mut ser = NqSerializer::new(Vec::new());
        ser.serialize_quads(&quads)?.flush()?;
        let parsed = read_quads(&ser.into_inner()[..])?;
        assert_eq!(parsed, quads);
        Ok(())
    }

    #[test]
    fn single_quad() -> Result<(), Box<dyn std::error::Error>> {
        let mut buf = vec![];
        let q = Quad::new(
            Term::variable("s"),
            Term::variable("p"),
            Term::variable("o"),
            Some(Term::variable("g")),
        );
        write_quad(&mut buf, &q)?;
        assert_eq!(String::from_utf8(buf)?, "?s ?p ?o ?g .\n");
        Ok(())
    }
}
