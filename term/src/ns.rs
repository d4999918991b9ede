//! # Standard namespaces
//!
//! This module provides the few standard IRIs that the term model relies on,
//! most notably [`xsd::string`] (the implicit datatype of simple literals)
//! and [`rdf::langString`] (the datatype of language-tagged literals).
//!
//! Each term is a process-wide [`NamedNode`](crate::NamedNode),
//! built once on first use.

/// Helper for creating a "namespace module"
/// defining a set of named nodes within a given IRI space.
///
/// NB: the prefix is never checked to be a valid IRI.
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*) => {
        /// Prefix used in this namespace.
        pub static PREFIX: &str = $iri_prefix;
        lazy_static::lazy_static! {
            $(
                /// Generated term.
                pub static ref $suffix: $crate::NamedNode =
                    $crate::NamedNode::new(concat!($iri_prefix, stringify!($suffix)));
            )*
        }
    };
}

/// The standard `xsd:` namespace.
#[allow(non_upper_case_globals)]
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        // datatypes
        boolean,
        date,
        dateTime,
        decimal,
        double,
        integer,
        string
    );
}

/// The standard `rdf:` namespace.
#[allow(non_upper_case_globals)]
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // datatypes
        langString,
        HTML,
        XMLLiteral
    );
}
