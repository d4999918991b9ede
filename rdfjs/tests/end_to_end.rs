#![cfg(all(feature = "json", feature = "rio"))]

use rdfjs::nquads::{NqConfig, NqSerializer};
use rdfjs::prelude::*;
use rdfjs::rio::{from_rio_quad, to_rio_quad};
use test_case::test_case;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const JSON_QUAD: &str = r#"{"subject":{"termType":"NamedNode","value":"http://a"},"predicate":{"termType":"NamedNode","value":"http://b"},"object":{"termType":"Literal","value":"c","language":"","datatype":{"termType":"NamedNode","value":"http://www.w3.org/2001/XMLSchema#string"}},"graph":{"termType":"DefaultGraph"}}"#;

#[test]
fn nquads_line_in_named_graph() {
    let q = parse_quad("<http://a> <http://b> \"c\" <http://g> .\n");
    assert_eq!(
        q,
        Some(Quad::new(
            Term::named_node("http://a"),
            Term::named_node("http://b"),
            Literal::new("c", "", None).into(),
            Some(Term::named_node("http://g")),
        ))
    );
}

#[test]
fn nquads_line_in_default_graph() {
    let q = parse_quad("_:b1 <http://b> \"c\"@en .\n");
    assert_eq!(
        q,
        Some(Quad::new(
            Term::blank_node("b1"),
            Term::named_node("http://b"),
            Literal::new("c", "en", Some(rdf::langString.clone())).into(),
            Some(Term::default_graph()),
        ))
    );
}

#[test]
fn json_quad_matches_nquads() -> TestResult {
    let from_json = decode_quad(JSON_QUAD.as_bytes())?;
    let from_text = parse_quad("<http://a> <http://b> \"c\" .").ok_or("no match")?;
    assert_eq!(from_json, from_text);
    assert_eq!(LazyQuad::from_slice(JSON_QUAD.as_bytes())?.into_quad()?, from_text);
    Ok(())
}

#[test_case("" ; "empty")]
#[test_case("   \n" ; "blank")]
fn no_quad(line: &str) {
    assert!(parse_quad(line).is_none());
}

#[test_case("" ; "empty")]
#[test_case("plain" ; "plain")]
#[test_case("a\\b\"c\nd\re\tf" ; "all escapes")]
#[test_case("\\n is not a newline" ; "escaped n")]
#[test_case("trailing backslash\\" ; "trailing backslash")]
fn escape_round_trip(txt: &str) {
    assert_eq!(rdfjs::nquads::unescape(&rdfjs::nquads::escape(txt)), txt);
}

#[test]
fn literal_decoder_rejects_other_terms() {
    let res = rdfjs::json::decode_literal(br#"{"termType":"NamedNode","value":"x"}"#);
    assert!(matches!(
        res,
        Err(rdfjs::json::JsonError::Term(TermError::TermTypeMismatch { .. }))
    ));
}

fn sample() -> Vec<Quad> {
    vec![
        Quad::new(
            Term::named_node("http://example.org/alice"),
            Term::named_node("http://xmlns.com/foaf/0.1/name"),
            Literal::new_lang("Alice \"Al\"\n", "en-GB").into(),
            None,
        ),
        Quad::new(
            Term::blank_node("b0"),
            Term::named_node("http://example.org/age"),
            Literal::new_typed("42", xsd::integer.clone()).into(),
            Some(Term::named_node("http://example.org/g")),
        ),
        Quad::new(
            Term::variable("s"),
            Term::variable("p"),
            Term::literal("tab\there"),
            Some(Term::blank_node("g1")),
        ),
    ]
}

#[test]
fn nquads_round_trip() -> TestResult {
    let quads = sample();
    for q in &quads {
        assert_eq!(parse_quad(&to_nquads_line(q)).as_ref(), Some(q));
    }
    let mut ser = NqSerializer::new_stringifier();
    ser.serialize_quads(&quads)?;
    let mut config = NqConfig::default();
    config.set_strict(true);
    let back = QuadReader::new_with_config(ser.as_str().as_bytes(), config)
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(back, quads);
    Ok(())
}

#[test]
fn json_round_trip() -> TestResult {
    for q in sample() {
        let json = encode_quad(&q)?;
        assert_eq!(decode_quad(&json)?, q);
        let lazy = LazyQuad::from_slice(&json)?;
        assert_eq!(lazy.graph()?, q.graph());
        assert_eq!(lazy.into_quad()?, q);
    }
    Ok(())
}

#[test]
fn json_terms_round_trip() -> TestResult {
    let terms: Vec<Term> = sample().into_iter().flat_map(Quad::into_terms).collect();
    let json = serde_json::to_vec(&terms)?;
    assert_eq!(rdfjs::json::decode_terms(&json)?, terms);
    Ok(())
}

#[test]
fn nquads_to_json_and_back() -> TestResult {
    let doc = "<http://a> <http://b> \"x\\ny\"@fr <http://g> .\n_:s <http://b> \"1\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n";
    let mut out = NqSerializer::new_stringifier();
    for q in read_quads(doc.as_bytes())? {
        let json = encode_quad(&q)?;
        out.serialize_quad(&decode_quad(&json)?)?;
    }
    assert_eq!(out.as_str(), doc);
    Ok(())
}

#[test]
fn rio_strict_round_trip() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let quads = sample();
    assert_eq!(from_rio_quad(to_rio_quad(&quads[0])?)?, quads[0]);
    assert_eq!(from_rio_quad(to_rio_quad(&quads[1])?)?, quads[1]);
    // variables are not strict RDF
    assert!(to_rio_quad(&quads[2]).is_err());
    Ok(())
}

#[test]
fn rio_quad_display() -> TestResult {
    let quads = sample();
    let rio = to_rio_quad(&quads[1])?;
    // Rio writes no final dot
    assert_eq!(
        rio.to_string(),
        "_:b0 <http://example.org/age> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer> <http://example.org/g>"
    );
    assert_eq!(format!("{rio} .\n"), to_nquads_line(&quads[1]));
    assert!(matches!(rio.subject, rio_api::model::Subject::BlankNode(_)));
    Ok(())
}
