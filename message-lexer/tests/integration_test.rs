//! End-to-end use of the public API: configuration from JSON, serialized
//! output and a parser shared between threads.

use message_lexer::{MarkerGroup, MessageParser, ParserOptions, Value};
use serde_json::json;

#[test]
fn test_options_from_json() {
    let options = ParserOptions::from_json(
        r#"{"markers":{"contentMarkers":[{"start":"<br />","group":"Newline"}]}}"#,
    )
    .unwrap();
    assert_eq!(options.markers.content_markers.len(), 1);
    assert!(options.markers.segment_markers.is_empty());

    let parser = MessageParser::with_options(&options).unwrap();
    let newlines: Vec<&str> = parser
        .markers()
        .content()
        .group(MarkerGroup::Newline)
        .map(|m| m.start.as_str())
        .collect();
    assert_eq!(newlines, ["\n", "<br />"]);

    let result = parser.parse("a<br />b").unwrap();
    assert_eq!(result.args, vec![Value::from("a"), Value::from("b")]);
}

#[test]
fn test_options_with_delimited_marker_from_json() {
    let options = ParserOptions::from_json(
        r#"{"markers":{"segmentMarkers":[{"start":"->","group":"FlagAssignment"}],
            "contentMarkers":[{"start":"<<","end":">>","group":"String"}]}}"#,
    )
    .unwrap();
    let parser = MessageParser::with_options(&options).unwrap();

    let result = parser.parse("--say-><<hi there>> <<x \\>> y>>").unwrap();
    assert_eq!(result.flag("say"), Some(&Value::from("hi there")));
    assert_eq!(result.args, vec![Value::from("x >> y")]);
}

#[test]
fn test_empty_options_json() {
    assert_eq!(ParserOptions::from_json("{}").unwrap(), ParserOptions::new());
}

#[test]
fn test_options_json_rejects_unknown_group() {
    let err = ParserOptions::from_json(
        r##"{"markers":{"contentMarkers":[{"start":"#","group":"Comment"}]}}"##,
    );
    assert!(err.is_err());
}

#[test]
fn test_result_serializes_to_json() {
    let result = MessageParser::new()
        .parse("deploy \"my app\" --env=prod --!dry-run -v")
        .unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({
            "args": ["deploy", "my app"],
            "flags": {"env": "prod", "dry-run": false, "v": true}
        })
    );
}

#[test]
fn test_serialized_flags_keep_order() {
    let result = MessageParser::new().parse("--b=2 --a=1").unwrap();
    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"{"args":[],"flags":{"b":"2","a":"1"}}"#
    );
}

#[test]
fn test_parser_shared_between_threads() {
    let parser = MessageParser::new();
    let messages: Vec<String> = (0..8).map(|i| format!("job {i} --id={i} -run")).collect();

    std::thread::scope(|scope| {
        let parser = &parser;
        let handles: Vec<_> = messages
            .iter()
            .map(|message| scope.spawn(move || parser.parse(message).unwrap()))
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap();
            let id = i.to_string();
            assert_eq!(result.args, vec![Value::from("job"), Value::from(id.as_str())]);
            assert_eq!(result.flag("id"), Some(&Value::from(id.as_str())));
            assert_eq!(result.flag("run"), Some(&Value::Bool(true)));
        }
    });
}
