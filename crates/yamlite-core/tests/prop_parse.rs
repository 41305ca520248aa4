/// Property-based tests for the parser.
///
/// Strategies generate well-formed documents (nested mappings of scalars
/// and inline integer arrays) together with the tree they should parse to,
/// render them with a random indentation unit, and check that parsing gives
/// that tree back. Arbitrary text is also thrown at the parser to check that
/// it never panics.
use proptest::prelude::*;
use yamlite_core::{classify, parse, parse_with_options, Mapping, ParseOptions, Value};

// ============================================================================
// Strategies
// ============================================================================

#[derive(Debug, Clone)]
enum Node {
    /// Rendered text and the value it classifies to.
    Scalar(String, Value),
    Map(Vec<(String, Node)>),
}

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,8}").unwrap()
}

fn arb_scalar() -> impl Strategy<Value = (String, Value)> {
    prop_oneof![
        any::<i64>().prop_map(|n| (n.to_string(), Value::Integer(n))),
        any::<bool>().prop_map(|b| (b.to_string(), Value::Boolean(b))),
        (-1000i32..1000, 0u32..1000).prop_map(|(whole, frac)| {
            let text = format!("{whole}.{frac}");
            let value = Value::Float(text.parse().unwrap());
            (text, value)
        }),
        "[a-z]{1,8}"
            .prop_filter("booleans are not text", |s| s != "true" && s != "false")
            .prop_map(|s| (s.clone(), Value::Text(s))),
        prop::collection::vec(any::<i16>(), 0..5).prop_map(|items| {
            let rendered: Vec<String> = items.iter().map(i16::to_string).collect();
            let text = format!("[{}]", rendered.join(", "));
            let value = Value::Sequence(items.into_iter().map(|n| Value::Integer(n.into())).collect());
            (text, value)
        }),
    ]
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = arb_scalar().prop_map(|(text, value)| Node::Scalar(text, value));
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec((arb_key(), inner), 1..4).prop_map(Node::Map)
    })
}

fn arb_document() -> impl Strategy<Value = Vec<(String, Node)>> {
    prop::collection::vec((arb_key(), arb_node()), 0..6)
}

// ============================================================================
// Rendering and expected trees
// ============================================================================

fn render(entries: &[(String, Node)], depth: usize, unit: &str, out: &mut String) {
    for (key, node) in entries {
        let indent = unit.repeat(depth);
        match node {
            Node::Scalar(text, _) => out.push_str(&format!("{indent}{key}: {text}\n")),
            Node::Map(children) => {
                out.push_str(&format!("{indent}{key}:\n"));
                render(children, depth + 1, unit, out);
            }
        }
    }
}

/// Later duplicates replace earlier ones in place, as in the parser.
fn expected(entries: &[(String, Node)]) -> Mapping {
    let mut map = Mapping::new();
    for (key, node) in entries {
        let value = match node {
            Node::Scalar(_, value) => value.clone(),
            Node::Map(children) => Value::Mapping(expected(children)),
        };
        map.insert(key.clone(), value);
    }
    map
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn rendered_documents_parse_back(entries in arb_document(), width in 1usize..=4) {
        let mut text = String::new();
        render(&entries, 0, &" ".repeat(width), &mut text);

        let doc = parse(&text).unwrap();
        prop_assert_eq!(doc.as_mapping(), &expected(&entries));
    }

    #[test]
    fn tab_indented_documents_parse_back(entries in arb_document()) {
        let mut text = String::new();
        render(&entries, 0, "\t", &mut text);

        let doc = parse(&text).unwrap();
        prop_assert_eq!(doc.as_mapping(), &expected(&entries));
    }

    #[test]
    fn strict_mode_accepts_well_formed_documents(entries in arb_document(), width in 1usize..=4) {
        let mut text = String::new();
        render(&entries, 0, &" ".repeat(width), &mut text);

        let strict = parse_with_options(&text, &ParseOptions::strict()).unwrap();
        let lenient = parse(&text).unwrap();
        prop_assert_eq!(strict, lenient);
    }

    #[test]
    fn integers_classify_exactly(n in any::<i64>()) {
        prop_assert_eq!(classify(&n.to_string()), Value::Integer(n));
    }

    #[test]
    fn classification_is_total(text in "\\PC{0,40}") {
        let _ = classify(&text);
    }

    #[test]
    fn bracket_soup_never_panics(text in "[\\[\\],a-z0-9 ]{0,40}") {
        let _ = classify(&text);
    }

    #[test]
    fn arbitrary_input_never_panics(text in "[a-z0-9:#,\\[\\] \t\n.-]{0,200}") {
        let _ = parse(&text).unwrap();
        let _ = parse_with_options(&text, &ParseOptions::strict());
    }

    #[test]
    fn comments_never_leak_into_values(key in arb_key(), (text, value) in arb_scalar(), note in "[a-z :,]{0,20}") {
        let doc = parse(&format!("{key}: {text} # {note}")).unwrap();
        prop_assert_eq!(doc.get(&key).unwrap(), &value);
    }
}
