use super::*;
use crate::ns::{rdf, xsd};
use std::hash::Hasher;
use test_case::test_case;

fn h<H: std::hash::Hash>(x: &H) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn named_node() {
    let exp = "http://champin.net/";
    let t = Term::named_node(exp);
    assert_eq!(t.term_type(), TermType::NamedNode);
    assert_eq!(t.value(), exp);
    assert_eq!(format!("{}", t), format!("<{}>", exp));
}

#[test]
fn blank_node() {
    let t = Term::blank_node("b1");
    assert_eq!(t.term_type(), TermType::BlankNode);
    assert_eq!(t.value(), "b1");
    assert_eq!(t.to_string(), "_:b1");
}

#[test]
fn variable() {
    let t = Term::variable("x");
    assert_eq!(t.term_type(), TermType::Variable);
    assert_eq!(t.value(), "x");
    assert_eq!(t.to_string(), "?x");
}

#[test]
fn default_graph() {
    let t = Term::default_graph();
    assert_eq!(t.term_type(), TermType::DefaultGraph);
    assert_eq!(t.value(), "");
    assert_eq!(t.to_string(), "");
    assert!(t.is_default_graph());
    assert_eq!(t, Term::DefaultGraph(DefaultGraph));
}

#[test]
fn default_graph_is_not_an_empty_named_node() {
    assert_ne!(Term::default_graph(), Term::named_node(""));
    assert_ne!(Term::named_node(""), Term::default_graph());
}

#[test]
fn same_value_different_type() {
    let candidates = [
        Term::named_node("foo"),
        Term::blank_node("foo"),
        Term::literal("foo"),
        Term::variable("foo"),
    ];
    for (i, t1) in candidates.iter().enumerate() {
        for (j, t2) in candidates.iter().enumerate() {
            assert_eq!(i == j, t1 == t2, "{t1:?} {t2:?}");
        }
    }
}

#[test]
fn literal_implicit_and_explicit_xsd_string() {
    let l1: Term = Literal::new_simple("foo").into();
    let l2: Term = Literal::new_typed("foo", xsd::string.clone()).into();
    assert_eq!(l1, l2);
    assert_eq!(h(&l1), h(&l2));
    assert_eq!(l1.to_string(), l2.to_string());
}

#[test]
fn literal_lang_differs_from_simple() {
    let l1: Term = Literal::new("c", "en", Some(rdf::langString.clone())).into();
    let l2: Term = Literal::new_simple("c").into();
    assert_ne!(l1, l2);
    assert_ne!(l2, l1);
}

#[test]
fn literal_different_datatypes() {
    let l1: Term = Literal::new_typed("42", xsd::integer.clone()).into();
    let l2: Term = Literal::new_typed("42", xsd::decimal.clone()).into();
    assert_ne!(l1, l2);
}

#[test]
fn literal_different_languages() {
    let l1: Term = Literal::new_lang("chat", "en").into();
    let l2: Term = Literal::new_lang("chat", "fr").into();
    assert_ne!(l1, l2);
    assert_eq!(l1, Term::from(Literal::new("chat", "en", None)));
}

#[test_case(Literal::new_simple("chat") => r#""chat""# ; "simple")]
#[test_case(Literal::new_lang("chat", "fr-FR") => r#""chat"@fr-FR"# ; "language")]
#[test_case(Literal::new_typed("42", xsd::integer.clone()) => r#""42"^^<http://www.w3.org/2001/XMLSchema#integer>"# ; "typed")]
#[test_case(Literal::new_typed("s", xsd::string.clone()) => r#""s""# ; "explicit xsd string")]
#[test_case(Literal::new_simple(" \n \r \t \\ \" hello world") => r#"" \n \r \t \\ \" hello world""# ; "escaped")]
#[test_case(Literal::new_simple("é \u{10000}") => "\"é \u{10000}\"" ; "non ascii")]
fn literal_display(lit: Literal) -> String {
    Term::from(lit).to_string()
}

#[test]
fn try_from_matching_variant() -> Result<()> {
    let lit = Literal::try_from(Term::literal("foo"))?;
    assert_eq!(lit.value(), "foo");
    let t = Term::named_node("tag:x");
    let n: &NamedNode = (&t).try_into()?;
    assert_eq!(n.value(), "tag:x");
    Ok(())
}

#[test]
fn try_from_other_variant() {
    let err = Literal::try_from(Term::named_node("foo")).unwrap_err();
    assert_eq!(
        err,
        TermError::TermTypeMismatch {
            expected: TermType::Literal,
            found: TermType::NamedNode
        }
    );
}

#[test]
fn accessors() {
    let t = Term::from(Literal::new_lang("chat", "fr"));
    assert!(t.as_literal().is_some());
    assert!(t.as_named_node().is_none());
    assert!(t.as_blank_node().is_none());
    assert!(t.as_variable().is_none());
    assert_eq!(t.as_literal().map(Literal::language), Some("fr"));
}

#[test]
fn quad_defaults_graph() {
    let q = Quad::new(
        Term::named_node("http://a"),
        Term::named_node("http://b"),
        Term::literal("c"),
        None,
    );
    assert!(q.graph().is_default_graph());
    assert_eq!(q.to_string(), r#"<http://a> <http://b> "c" ."#);
}

#[test]
fn quad_with_graph() {
    let q = Quad::new(
        Term::blank_node("s"),
        Term::named_node("http://b"),
        Term::variable("o"),
        Some(Term::named_node("http://g")),
    );
    assert_eq!(q.to_string(), "_:s <http://b> ?o <http://g> .");
    let [s, p, o, g] = q.clone().into_terms();
    assert_eq!(Quad::from([s, p, o, g]), q);
}

#[test]
fn quad_equality_is_ordered() {
    let a = Term::named_node("http://a");
    let b = Term::named_node("http://b");
    let q1 = Quad::new(a.clone(), b.clone(), a.clone(), None);
    let q2 = Quad::new(b.clone(), a.clone(), a.clone(), None);
    assert_ne!(q1, q2);
    let q3 = Quad::from(([a.clone(), b, a], None));
    assert_eq!(q1, q3);
    assert_eq!(h(&q1), h(&q3));
}

#[test]
fn terms_are_send_and_sync() {
    fn check<T: Send + Sync>() {}
    check::<Term>();
    check::<Quad>();
}
