use json_pointer_find::{decode_component, encode_component, find, JsonPointer};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z~/%]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z~/% ]{0,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn token_encode_decode_roundtrip(token in "\\PC*") {
        prop_assert_eq!(decode_component(&encode_component(&token)).unwrap(), token);
    }

    #[test]
    fn token_with_escape_characters_roundtrip(token in "[~/%01a-c ]{0,12}") {
        prop_assert_eq!(decode_component(&encode_component(&token)).unwrap(), token);
    }

    #[test]
    fn pointer_render_parse_roundtrip(tokens in prop::collection::vec("[~/%01a-c\u{e9}]{0,5}", 0..6)) {
        let pointer = JsonPointer::from_tokens(tokens);
        let reparsed = JsonPointer::parse(&pointer.to_string()).unwrap();
        prop_assert_eq!(reparsed, pointer);
    }

    #[test]
    fn root_pointer_is_identity(doc in arb_json()) {
        let found = JsonPointer::parse("").unwrap().find(&doc).unwrap();
        prop_assert_eq!(found, &doc);
    }

    #[test]
    fn parent_of_child_is_self(tokens in prop::collection::vec("[a-z~/]{0,4}", 0..5), last in "[a-z~/-]{0,4}") {
        let pointer = JsonPointer::from_tokens(tokens);
        prop_assert_eq!(pointer.child(last).parent_pointer().unwrap(), pointer);
    }

    #[test]
    fn object_members_resolve_through_rendered_pointers(doc in arb_json()) {
        if let Value::Object(map) = &doc {
            for (key, value) in map {
                let pointer = JsonPointer::root().child(key.as_str()).to_string();
                let tokens = JsonPointer::parse(&pointer).unwrap().into_tokens();
                prop_assert_eq!(find(&doc, &tokens).unwrap(), value);
            }
        }
    }
}
