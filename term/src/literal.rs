//! RDF literals like specified in
//! [RDF](https://www.w3.org/TR/rdf11-primer/#section-literal).
//!

use crate::escape::write_escaped;
use crate::ns::{rdf, xsd};
use crate::NamedNode;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An RDF literal.
///
/// Each literal has a lexical value, i.e. a text, a language tag
/// (which may be empty) and an optional datatype.
///
/// # Datatypes
///
/// A literal built without a datatype has the implicit datatype `xsd:string`:
/// [`Literal::datatype`] always returns the *effective* datatype,
/// and a literal without datatype is equal to the same literal
/// with an explicit `xsd:string` datatype.
///
/// # Language tagged literals
///
/// Language-tagged literals have the type `rdf:langString` and a non-empty
/// language tag. A literal never carries a language tag together with another
/// datatype: the constructors drop the tag in that case.
#[derive(Clone, Debug, Eq)]
pub struct Literal {
    value: Arc<str>,
    language: Arc<str>,
    datatype: Option<NamedNode>,
}

impl Literal {
    /// Return a new literal.
    ///
    /// * If `language` is not empty and `datatype` is `None`,
    ///   the datatype becomes `rdf:langString`.
    /// * If `datatype` is neither `None` nor `rdf:langString`,
    ///   `language` is ignored.
    pub fn new<V, L>(value: V, language: L, datatype: Option<NamedNode>) -> Self
    where
        V: Into<Arc<str>>,
        L: Into<Arc<str>>,
    {
        let language = language.into();
        let datatype = match datatype {
            None if !language.is_empty() => Some(rdf::langString.clone()),
            dt => dt,
        };
        let language = match &datatype {
            Some(dt) if *dt != *rdf::langString => Arc::from(""),
            _ => language,
        };
        Literal {
            value: value.into(),
            language,
            datatype,
        }
    }

    /// Return a new simple literal, with the implicit datatype `xsd:string`.
    pub fn new_simple<V: Into<Arc<str>>>(value: V) -> Self {
        Literal {
            value: value.into(),
            language: Arc::from(""),
            datatype: None,
        }
    }

    /// Return a new language-tagged literal.
    pub fn new_lang<V, L>(value: V, language: L) -> Self
    where
        V: Into<Arc<str>>,
        L: Into<Arc<str>>,
    {
        Literal {
            value: value.into(),
            language: language.into(),
            datatype: Some(rdf::langString.clone()),
        }
    }

    /// Return a new literal with an explicit datatype.
    ///
    /// Nothing checks that `value` belongs to the lexical space of `datatype`.
    pub fn new_typed<V: Into<Arc<str>>>(value: V, datatype: NamedNode) -> Self {
        Literal {
            value: value.into(),
            language: Arc::from(""),
            datatype: Some(datatype),
        }
    }

    /// The lexical value of this literal, unescaped.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The language tag of this literal, or the empty string.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The effective datatype of this literal.
    ///
    /// This is `xsd:string` when no datatype was given.
    pub fn datatype(&self) -> &NamedNode {
        self.datatype.as_ref().unwrap_or(&*xsd::string)
    }

    /// The datatype of this literal, only if it was explicitly given.
    pub fn explicit_datatype(&self) -> Option<&NamedNode> {
        self.datatype.as_ref()
    }

    /// Whether this literal has a language tag.
    pub fn is_language_tagged(&self) -> bool {
        !self.language.is_empty() && *self.datatype() == *rdf::langString
    }

    /// Writes the literal to the `fmt::Write` using the N-Quads syntax.
    pub fn write_fmt<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        w.write_char('"')?;
        write_escaped(w, &self.value)?;
        w.write_char('"')?;
        let dt = self.datatype();
        if *dt == *xsd::string {
            Ok(())
        } else if self.is_language_tagged() {
            w.write_char('@')?;
            w.write_str(&self.language)
        } else {
            w.write_str("^^")?;
            dt.write_fmt(w)
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_fmt(f)
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Literal) -> bool {
        self.value == other.value
            && self.language == other.language
            && self.datatype() == other.datatype()
    }
}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.language.hash(state);
        self.datatype().hash(state);
    }
}

#[cfg(test)]
mod test {
    // Most of the code from this module is tested through its use in other modules
    // (especially the ::test module).

    use super::*;

    #[test]
    fn language_implies_lang_string() {
        let lit = Literal::new("chat", "fr", None);
        assert_eq!(lit.datatype(), &*rdf::langString);
        assert_eq!(lit.language(), "fr");
        assert!(lit.is_language_tagged());
    }

    #[test]
    fn language_dropped_with_other_datatype() {
        let lit = Literal::new("42", "en", Some(xsd::integer.clone()));
        assert_eq!(lit.language(), "");
        assert_eq!(lit.datatype(), &*xsd::integer);
        assert!(!lit.is_language_tagged());
    }

    #[test]
    fn implicit_datatype() {
        let lit = Literal::new_simple("foo");
        assert_eq!(lit.datatype(), &*xsd::string);
        assert!(lit.explicit_datatype().is_none());

        let lit = Literal::new_typed("foo", xsd::string.clone());
        assert_eq!(lit.explicit_datatype(), Some(&*xsd::string));
    }

    #[test]
    fn lang_string_without_language() {
        let lit = Literal::new_typed("foo", rdf::langString.clone());
        assert!(!lit.is_language_tagged());
        assert_eq!(
            lit.to_string(),
            "\"foo\"^^<http://www.w3.org/1999/02/22-rdf-syntax-ns#langString>"
        );
    }
}
