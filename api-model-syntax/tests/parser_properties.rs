//! Property-based tests for the declaration parser.
//!
//! Properties tested:
//! - Every generated enum member becomes one `EnumMember` node, in order
//! - Every generated property becomes one `PropertySignature`, whatever the separator
//! - Nested array suffixes produce one `ArrayType` per `[]`

use proptest::prelude::*;

use api_model_syntax::{Corpus, Node, SymbolResolver, SyntaxKind};

fn arb_identifier() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,12}".prop_map(|s| s)
}

fn arb_separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(";"), Just(","), Just("\n"), Just(";\n")]
}

fn descendants<'a>(node: Node<'a>, kind: SyntaxKind, out: &mut Vec<Node<'a>>) {
    if node.kind() == kind {
        out.push(node);
    }
    for child in node.children() {
        descendants(child, kind, out);
    }
}

proptest! {
    #[test]
    fn prop_enum_members_preserve_order(
        name in arb_identifier(),
        members in prop::collection::vec(arb_identifier(), 0..12),
    ) {
        let source = format!("export enum {} {{ {} }}", name, members.join(", "));
        let mut corpus = Corpus::new();
        corpus.add_source("gen.ts", source).unwrap();

        let file = &corpus.files()[0];
        let mut found = Vec::new();
        descendants(file.root().unwrap(), SyntaxKind::EnumMember, &mut found);

        let names: Vec<String> = found
            .iter()
            .map(|m| corpus.symbols().symbol_at(m.name().unwrap()).unwrap().name.clone())
            .collect();
        prop_assert_eq!(names, members);
    }

    #[test]
    fn prop_properties_parse_with_any_separator(
        props in prop::collection::vec((arb_identifier(), arb_separator()), 1..10),
    ) {
        let body: String = props
            .iter()
            .map(|(name, sep)| format!("{name}: string{sep}"))
            .collect();
        let source = format!("interface Generated {{\n{body}\n}}");
        let mut corpus = Corpus::new();
        corpus.add_source("gen.ts", source).unwrap();

        let mut found = Vec::new();
        descendants(corpus.files()[0].root().unwrap(), SyntaxKind::PropertySignature, &mut found);
        prop_assert_eq!(found.len(), props.len());
    }

    #[test]
    fn prop_array_depth_matches_suffix_count(depth in 0usize..6) {
        let source = format!("type T = string{}", "[]".repeat(depth));
        let mut corpus = Corpus::new();
        corpus.add_source("gen.ts", source).unwrap();

        let mut found = Vec::new();
        descendants(corpus.files()[0].root().unwrap(), SyntaxKind::ArrayType, &mut found);
        prop_assert_eq!(found.len(), depth);
    }
}
