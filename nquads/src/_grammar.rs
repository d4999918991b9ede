// this module is transparently re-exported by its parent `nquads`
//
// Regular-expression based grammar of N-Quads terms and lines.

use lazy_static::lazy_static;
use rdfjs_term::ns::{rdf, xsd};
use rdfjs_term::{unescape, Literal, NamedNode, Quad, Result, Term, TermError};
use regex::{Captures, Regex};

/// Optional whitespace
const WSO: &str = r"[ \t]*";
/// Mandatory whitespace
const WS: &str = r"[ \t]+";

lazy_static! {
    /// The production of a term, with 6 capture groups:
    /// 1. the IRI of a named node,
    /// 2. the label of a blank node,
    /// 3. the escaped lexical form of a literal,
    /// 4. the datatype IRI of a literal,
    /// 5. the language tag of a literal,
    /// 6. the name of a variable.
    ///
    /// # Rule
    ///
    /// ```text
    /// term := iri | bnode | literal | variable
    /// iri := '<' scheme ':' [^>]* '>'
    /// bnode := '_:' [A-Za-z0-9]+
    /// literal := '"' ([^"\\] | '\\' .)* '"' ('^^' iri | '@' [a-z]+ ('-' [a-zA-Z0-9]+)*)?
    /// variable := '?' [A-Za-z0-9]+
    /// ```
    static ref TERM: String = {
        let iri = r"(?:<([^:>]+:[^>]*)>)";
        let bnode = r"(?:_:([a-zA-Z0-9]+))";
        let plain = r#""([^"\\]*(?:\\.[^"\\]*)*)""#;
        let datatype = format!(r"(?:\^\^{iri})");
        let language = r"(?:@([a-z]+(?:-[a-zA-Z0-9]+)*))";
        let literal = format!(r"(?:{plain}(?:{datatype}|{language})?)");
        let variable = r"(?:\?([a-zA-Z0-9]+))";
        format!(r"(?:{iri}|{bnode}|{literal}|{variable})")
    };

    /// Matches a whole term, see [`TERM`].
    static ref TERM_LINE: Regex = Regex::new(&format!("^{}$", *TERM)).unwrap();

    /// Matches a whole N-Quads line: 4 times the groups of [`TERM`],
    /// the last ones being empty when the quad is in the default graph.
    static ref QUAD_LINE: Regex = {
        let term = &*TERM;
        let graph = format!(r"(?:\.|(?:{term}{WSO}\.))");
        Regex::new(&format!(
            r"^{WSO}{term}{WS}{term}{WS}{term}{WS}{graph}{WSO}\r?\n?$"
        ))
        .unwrap()
    };
}

/// Number of capture groups in [`TERM`]
const GROUPS: usize = 6;

/// Parse a single term from its N-Quads representation.
///
/// The empty string is parsed as the default graph,
/// so that an empty graph slot can be passed explicitly.
///
/// # Error
///
/// [`TermError::MalformedTerm`] is raised if `txt` is not exactly one term.
pub fn parse_term(txt: &str) -> Result<Term> {
    if txt.is_empty() {
        return Ok(Term::default_graph());
    }
    TERM_LINE
        .captures(txt)
        .and_then(|caps| term_from_captures(&caps, 1))
        .ok_or_else(|| TermError::MalformedTerm(txt.to_string()))
}

/// Parse a quad from one line of N-Quads.
///
/// The line may or may not include its terminating line break.
/// Return `None` if the line does not match the grammar
/// (this includes empty lines and comments).
pub fn parse_quad(line: &str) -> Option<Quad> {
    let caps = QUAD_LINE.captures(line)?;
    let subject = term_from_captures(&caps, 1)?;
    let predicate = term_from_captures(&caps, 1 + GROUPS)?;
    let object = term_from_captures(&caps, 1 + 2 * GROUPS)?;
    let graph = term_from_captures(&caps, 1 + 3 * GROUPS);
    Some(Quad::new(subject, predicate, object, graph))
}

/// Build the term matched by the 6 groups starting at `first`, if any.
fn term_from_captures(caps: &Captures, first: usize) -> Option<Term> {
    let group = |i: usize| caps.get(first + i).map(|m| m.as_str());
    if let Some(iri) = group(0) {
        Some(Term::named_node(iri))
    } else if let Some(label) = group(1) {
        Some(Term::blank_node(label))
    } else if let Some(lex) = group(2) {
        let value = unescape(lex);
        let literal = match (group(3), group(4)) {
            (Some(dt), _) if dt != xsd::string.value() => {
                Literal::new_typed(value, NamedNode::new(dt))
            }
            (_, Some(tag)) => Literal::new_lang(value, tag),
            _ => Literal::new_simple(value),
        };
        Some(literal.into())
    } else {
        group(5).map(Term::variable)
    }
}
