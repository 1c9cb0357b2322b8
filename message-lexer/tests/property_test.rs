use message_lexer::{MessageParser, Value};
use proptest::prelude::*;

fn separator() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n')], 1..4)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn words_become_arguments(
        words in prop::collection::vec("[a-zA-Z0-9]{1,8}", 1..12),
        sep in separator(),
    ) {
        let text = words.join(sep.as_str());
        let result = MessageParser::new().parse(&text).unwrap();
        let expected: Vec<Value> = words.iter().map(|w| Value::from(w.as_str())).collect();
        prop_assert_eq!(result.args, expected);
        prop_assert!(result.flags.is_empty());
    }

    #[test]
    fn padding_adds_no_arguments(
        words in prop::collection::vec("[a-z]{1,6}", 1..6),
        left in "[ \t\n]{0,4}",
        right in "[ \t\n]{0,4}",
    ) {
        let text = format!("{left}{}{right}", words.join(" "));
        let result = MessageParser::new().parse(&text).unwrap();
        prop_assert_eq!(result.args.len(), words.len());
    }

    #[test]
    fn presence_flags_keep_order(names in prop::collection::btree_set("[a-z]{1,6}", 1..8)) {
        let names: Vec<String> = names.into_iter().collect();
        let text = names
            .iter()
            .map(|name| format!("--{name}"))
            .collect::<Vec<_>>()
            .join(" ");
        let result = MessageParser::new().parse(&text).unwrap();
        let keys: Vec<&String> = result.flags.keys().collect();
        let expected: Vec<&String> = names.iter().collect();
        prop_assert_eq!(keys, expected);
        prop_assert!(result.flags.values().all(|v| *v == Value::Bool(true)));
    }

    #[test]
    fn lone_backslashes_are_kept(count in 1usize..5) {
        let text = vec!["\\"; count].join(" ");
        let result = MessageParser::new().parse(&text).unwrap();
        prop_assert_eq!(result.args, vec![Value::from("\\"); count]);
    }

    #[test]
    fn reused_parser_matches_fresh_one(first in ".{0,40}", second in ".{0,40}") {
        let shared = MessageParser::new();
        let _ = shared.parse(&first);
        prop_assert_eq!(shared.parse(&second), MessageParser::new().parse(&second));
    }

    #[test]
    fn arbitrary_input_never_panics(text in "\\PC{0,64}") {
        let _ = MessageParser::new().parse(&text);
    }

    #[test]
    fn marker_heavy_input_never_panics(text in "[-—!=:\"'`“” \\\\\ta-c\n]{0,48}") {
        let _ = MessageParser::new().parse(&text);
    }
}
