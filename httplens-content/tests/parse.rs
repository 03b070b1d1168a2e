//! End-to-end classification corpus: mixed XML/JSON/Base64 nesting under
//! the shared depth and field-count limits.

use httplens_content::{
    parse_content, Content, JsonValue, ParseParams, XmlAttribute, XmlData, XmlElement, XmlName,
};

const PARAMS: ParseParams = ParseParams {
    max_global_level: 6,
    max_local_level: 4,
    max_field_count: 4,
};

fn text(value: &str) -> Content {
    Content::text(value)
}

fn b64(inner: Content) -> Content {
    Content::base64(inner)
}

fn xml_doc(root: XmlElement) -> Content {
    Content::Xml(XmlData {
        root: Some(root),
        ..XmlData::default()
    })
}

fn elem(name: &str, children: Vec<XmlElement>, value: Option<Content>) -> XmlElement {
    XmlElement {
        name: XmlName::local(name),
        attributes: Vec::new(),
        children,
        value: value.map(Box::new),
    }
}

fn leaf(name: &str, value: Content) -> XmlElement {
    elem(name, Vec::new(), Some(value))
}

fn json_doc(value: JsonValue) -> Content {
    Content::Json(httplens_content::JsonData { value })
}

fn obj(entries: Vec<(&str, JsonValue)>) -> JsonValue {
    JsonValue::Object(
        entries
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value))
            .collect(),
    )
}

fn arr(values: Vec<JsonValue>) -> JsonValue {
    JsonValue::Array(values)
}

fn num(value: f64) -> JsonValue {
    JsonValue::Number(value)
}

fn jtext(value: &str) -> JsonValue {
    JsonValue::text(value)
}

fn check(name: &str, source: &str, expected: Content) {
    let actual = parse_content(source, &PARAMS);
    assert_eq!(actual, expected, "case {name:?}");
}

#[test]
fn simple_xml() {
    check(
        "simple xml",
        r#"<?xml version="1.0" encoding="UTF-8"?><root><a><b>IDDQD</b><b>IDKFA</b><c>666</c></a></root>"#,
        xml_doc(elem(
            "root",
            vec![elem(
                "a",
                vec![
                    leaf("b", text("IDDQD")),
                    leaf("b", text("IDKFA")),
                    leaf("c", text("666")),
                ],
                None,
            )],
            None,
        )),
    );
}

#[test]
fn simple_json_array() {
    check(
        "simple json array",
        "[1,2,3]",
        json_doc(arr(vec![num(1.0), num(2.0), num(3.0)])),
    );
}

#[test]
fn simple_json_object() {
    check(
        "simple json object",
        r#"{"key": "IDDQD", "value": "666"}"#,
        json_doc(obj(vec![
            ("key", jtext("IDDQD")),
            ("value", jtext("666")),
        ])),
    );
}

#[test]
fn json_array_in_xml() {
    check(
        "json array in xml",
        "<root><a><b>IDDQD</b><c>[1,2,3]</c></a></root>",
        xml_doc(elem(
            "root",
            vec![elem(
                "a",
                vec![
                    leaf("b", text("IDDQD")),
                    leaf("c", json_doc(arr(vec![num(1.0), num(2.0), num(3.0)]))),
                ],
                None,
            )],
            None,
        )),
    );
}

#[test]
fn json_object_in_xml() {
    check(
        "json object in xml",
        r#"<root><a><b>IDDQD</b><c>{"key": "IDDQD", "value": 666}</c></a></root>"#,
        xml_doc(elem(
            "root",
            vec![elem(
                "a",
                vec![
                    leaf("b", text("IDDQD")),
                    leaf(
                        "c",
                        json_doc(obj(vec![("key", jtext("IDDQD")), ("value", num(666.0))])),
                    ),
                ],
                None,
            )],
            None,
        )),
    );
}

#[test]
fn xml_in_json_array() {
    check(
        "xml in json array",
        r#"[666,"<root><a><b>IDKFA</b></a></root>","IDDQD",null]"#,
        json_doc(arr(vec![
            num(666.0),
            JsonValue::content(xml_doc(elem(
                "root",
                vec![elem("a", vec![leaf("b", text("IDKFA"))], None)],
                None,
            ))),
            jtext("IDDQD"),
            JsonValue::Null,
        ])),
    );
}

#[test]
fn xml_in_json_object() {
    check(
        "xml in json object",
        r#"{"key": "IDDQD", "value": "<root><a><b>IDKFA</b></a></root>"}"#,
        json_doc(obj(vec![
            ("key", jtext("IDDQD")),
            (
                "value",
                JsonValue::content(xml_doc(elem(
                    "root",
                    vec![elem("a", vec![leaf("b", text("IDKFA"))], None)],
                    None,
                ))),
            ),
        ])),
    );
}

#[test]
fn xml_in_json_object_in_xml() {
    check(
        "xml in json object in xml",
        r#"<root><a>{"key": "IDDQD", "value": "&lt;root1&gt;&lt;b&gt;IDKFA&lt;/b&gt;&lt;/root1&gt;"}</a></root>"#,
        xml_doc(elem(
            "root",
            vec![leaf(
                "a",
                json_doc(obj(vec![
                    ("key", jtext("IDDQD")),
                    (
                        "value",
                        JsonValue::content(xml_doc(elem(
                            "root1",
                            vec![leaf("b", text("IDKFA"))],
                            None,
                        ))),
                    ),
                ])),
            )],
            None,
        )),
    );
}

#[test]
fn json_object_in_xml_in_json_object() {
    check(
        "json object in xml in json object",
        r#"{"key": "IDDQD", "value": "<root><a>{\"name\": \"IDKFA\", \"data\": 666}</a></root>"}"#,
        json_doc(obj(vec![
            ("key", jtext("IDDQD")),
            (
                "value",
                JsonValue::content(xml_doc(elem(
                    "root",
                    vec![leaf(
                        "a",
                        json_doc(obj(vec![("name", jtext("IDKFA")), ("data", num(666.0))])),
                    )],
                    None,
                ))),
            ),
        ])),
    );
}

#[test]
fn json_object_in_xml_with_local_level_exceeded() {
    check(
        "json object in xml with local maxLevel exceed",
        r#"<root>{"entry": {"data": {"object": {"record": {"item": 666}}}}}</root>"#,
        xml_doc(leaf(
            "root",
            text(r#"{"entry": {"data": {"object": {"record": {"item": 666}}}}}"#),
        )),
    );
}

#[test]
fn json_object_in_xml_with_global_level_exceeded() {
    check(
        "json object in xml with global maxLevel exceed",
        r#"<root><a><b>{"entry": {"data": {"record": {"item": 666}}}}</b></a></root>"#,
        xml_doc(elem(
            "root",
            vec![elem(
                "a",
                vec![leaf(
                    "b",
                    text(r#"{"entry": {"data": {"record": {"item": 666}}}}"#),
                )],
                None,
            )],
            None,
        )),
    );
}

#[test]
fn json_array_in_xml_with_local_level_exceeded() {
    check(
        "json array in xml with local maxLevel exceed",
        "<root>[1, [2, [3, [4, [5]]]]]</root>",
        xml_doc(leaf("root", text("[1, [2, [3, [4, [5]]]]]"))),
    );
}

#[test]
fn json_array_in_xml_with_global_level_exceeded() {
    check(
        "json array in xml with global maxLevel exceed",
        "<root><a><b>[1, [2, [3, [4]]]]</b></a></root>",
        xml_doc(elem(
            "root",
            vec![elem(
                "a",
                vec![leaf("b", text("[1, [2, [3, [4]]]]"))],
                None,
            )],
            None,
        )),
    );
}

#[test]
fn xml_in_json_object_with_local_level_exceeded() {
    check(
        "xml in json object with local maxLevel exceed",
        r#"{"key": "IDDQD", "value": "<root><a><b><c><d>IDKFA</d></c></b></a></root>"}"#,
        json_doc(obj(vec![
            ("key", jtext("IDDQD")),
            ("value", jtext("<root><a><b><c><d>IDKFA</d></c></b></a></root>")),
        ])),
    );
}

#[test]
fn xml_in_json_object_with_global_level_exceeded() {
    check(
        "xml in json object with global maxLevel exceed",
        r#"{"data": {"record": {"entry": "<root><a><b><c>IDKFA</c></b></a></root>"}}}"#,
        json_doc(obj(vec![(
            "data",
            obj(vec![(
                "record",
                obj(vec![(
                    "entry",
                    jtext("<root><a><b><c>IDKFA</c></b></a></root>"),
                )]),
            )]),
        )])),
    );
}

#[test]
fn xml_in_json_array_with_local_level_exceeded() {
    check(
        "xml in json array with local maxLevel exceed",
        r#"[1, "<root><a><b><c><d>IDKFA</d></c></b></a></root>", "IDDQD", null]"#,
        json_doc(arr(vec![
            num(1.0),
            jtext("<root><a><b><c><d>IDKFA</d></c></b></a></root>"),
            jtext("IDDQD"),
            JsonValue::Null,
        ])),
    );
}

#[test]
fn xml_in_json_array_with_global_level_exceeded() {
    check(
        "xml in json array with global maxLevel exceed",
        r#"[1, [2, [3, "<root><a><b><c>IDKFA</c></b></a></root>"]]]"#,
        json_doc(arr(vec![
            num(1.0),
            arr(vec![
                num(2.0),
                arr(vec![
                    num(3.0),
                    jtext("<root><a><b><c>IDKFA</c></b></a></root>"),
                ]),
            ]),
        ])),
    );
}

#[test]
fn bad_json_object_in_xml() {
    check(
        "bad json object in xml",
        r#"<root><a>{"data": 666</a></root>"#,
        xml_doc(elem(
            "root",
            vec![leaf("a", text(r#"{"data": 666"#))],
            None,
        )),
    );
}

#[test]
fn bad_json_array_in_xml() {
    check(
        "bad json array in xml",
        r#"<root><a>["data", 666</a></root>"#,
        xml_doc(elem(
            "root",
            vec![leaf("a", text(r#"["data", 666"#))],
            None,
        )),
    );
}

#[test]
fn bad_xml_in_json_object() {
    check(
        "bad xml in json object",
        r#"{"key": "IDDQD", "value": "<root><a>IDKFA</a>"}"#,
        json_doc(obj(vec![
            ("key", jtext("IDDQD")),
            ("value", jtext("<root><a>IDKFA</a>")),
        ])),
    );
}

#[test]
fn bad_xml_in_json_array() {
    check(
        "bad xml in json array",
        r#"[1,"<root><a>IDKFA</a>"]"#,
        json_doc(arr(vec![num(1.0), jtext("<root><a>IDKFA</a>")])),
    );
}

#[test]
fn xml_in_bad_json_object_in_xml() {
    check(
        "xml in bad json object in xml",
        r#"<root><a>{"data": "&lt;root1&gt;&lt;b&gt;IDKFA&lt;/b&gt;&lt;/root1&gt;"</a></root>"#,
        xml_doc(elem(
            "root",
            vec![leaf(
                "a",
                text(r#"{"data": "<root1><b>IDKFA</b></root1>""#),
            )],
            None,
        )),
    );
}

#[test]
fn json_object_in_bad_xml_in_json_object() {
    check(
        "json object in bad xml in json object",
        r#"{"key": "IDDQD", "value": "<root><a>{\"data\": 666}</a>"}"#,
        json_doc(obj(vec![
            ("key", jtext("IDDQD")),
            ("value", jtext(r#"<root><a>{"data": 666}</a>"#)),
        ])),
    );
}

#[test]
fn base64_string() {
    // IDDQD+IDKFA+IDCLIP
    check(
        "base64 string",
        "SUREUUQrSURLRkErSURDTElQ",
        b64(text("IDDQD+IDKFA+IDCLIP")),
    );
}

#[test]
fn base64_simple_xml() {
    // <root><a><b>IDDQD</b><b>IDKFA</b><c>666</c></a></root>
    check(
        "base64 simple xml",
        "PHJvb3Q+PGE+PGI+SUREUUQ8L2I+PGI+SURLRkE8L2I+PGM+NjY2PC9jPjwvYT48L3Jvb3Q+",
        b64(xml_doc(elem(
            "root",
            vec![elem(
                "a",
                vec![
                    leaf("b", text("IDDQD")),
                    leaf("b", text("IDKFA")),
                    leaf("c", text("666")),
                ],
                None,
            )],
            None,
        ))),
    );
}

#[test]
fn base64_simple_json_array() {
    // [1,2,3]
    check(
        "base64 simple json array",
        "WzEsMiwzXQ==",
        b64(json_doc(arr(vec![num(1.0), num(2.0), num(3.0)]))),
    );
}

#[test]
fn base64_simple_json_object() {
    // {"key": "IDDQD", "value": "666"}
    check(
        "base64 simple json object",
        "eyJrZXkiOiAiSUREUUQiLCAidmFsdWUiOiAiNjY2In0=",
        b64(json_doc(obj(vec![
            ("key", jtext("IDDQD")),
            ("value", jtext("666")),
        ]))),
    );
}

#[test]
fn base64_bad_xml() {
    // <root><a>IDDQD</a>
    check(
        "base64 bad xml",
        "PHJvb3Q+PGE+SUREUUQ8L2E+",
        b64(text("<root><a>IDDQD</a>")),
    );
}

#[test]
fn base64_bad_json() {
    // {"key": "IDDQD", "value": "666"
    check(
        "base64 bad json",
        "eyJrZXkiOiAiSUREUUQiLCAidmFsdWUiOiAiNjY2Ig==",
        b64(text(r#"{"key": "IDDQD", "value": "666""#)),
    );
}

#[test]
fn base64_string_in_xml() {
    // IDDQD+IDKFA+IDCLIP
    check(
        "base64 string in xml",
        "<root><a>SUREUUQrSURLRkErSURDTElQ</a></root>",
        xml_doc(elem(
            "root",
            vec![leaf("a", b64(text("IDDQD+IDKFA+IDCLIP")))],
            None,
        )),
    );
}

#[test]
fn base64_xml_in_xml() {
    // <root1><b>IDDQD</b></root1>
    check(
        "base64 xml in xml",
        "<root><a>PHJvb3QxPjxiPklERFFEPC9iPjwvcm9vdDE+</a></root>",
        xml_doc(elem(
            "root",
            vec![leaf(
                "a",
                b64(xml_doc(elem("root1", vec![leaf("b", text("IDDQD"))], None))),
            )],
            None,
        )),
    );
}

#[test]
fn base64_json_in_xml() {
    // {"key": "IDDQD", "value": "666"}
    check(
        "base64 json in xml",
        "<root><a>eyJrZXkiOiAiSUREUUQiLCAidmFsdWUiOiAiNjY2In0=</a></root>",
        xml_doc(elem(
            "root",
            vec![leaf(
                "a",
                b64(json_doc(obj(vec![
                    ("key", jtext("IDDQD")),
                    ("value", jtext("666")),
                ]))),
            )],
            None,
        )),
    );
}

#[test]
fn base64_json_in_json() {
    // {"key": "IDDQD", "value": "666"}
    check(
        "base64 json in json",
        r#"{"data": "eyJrZXkiOiAiSUREUUQiLCAidmFsdWUiOiAiNjY2In0="}"#,
        json_doc(obj(vec![(
            "data",
            JsonValue::content(b64(json_doc(obj(vec![
                ("key", jtext("IDDQD")),
                ("value", jtext("666")),
            ])))),
        )])),
    );
}

#[test]
fn base64_xml_in_json() {
    // <root1><b>IDDQD</b></root1>
    check(
        "base64 xml in json",
        r#"{"data": "PHJvb3QxPjxiPklERFFEPC9iPjwvcm9vdDE+"}"#,
        json_doc(obj(vec![(
            "data",
            JsonValue::content(b64(xml_doc(elem(
                "root1",
                vec![leaf("b", text("IDDQD"))],
                None,
            )))),
        )])),
    );
}

#[test]
fn base64_xml_in_json_at_exact_global_budget() {
    // <root><a><b><c>IDDQD</c></b></a></root>
    check(
        "base64 xml in json with total level == globalMaxLevel",
        r#"{"data": {"item": "PHJvb3Q+PGE+PGI+PGM+SUREUUQ8L2M+PC9iPjwvYT48L3Jvb3Q+"}}"#,
        json_doc(obj(vec![(
            "data",
            obj(vec![(
                "item",
                JsonValue::content(b64(xml_doc(elem(
                    "root",
                    vec![elem(
                        "a",
                        vec![elem("b", vec![leaf("c", text("IDDQD"))], None)],
                        None,
                    )],
                    None,
                )))),
            )]),
        )])),
    );
}

#[test]
fn base64_xml_in_json_with_global_level_exceeded() {
    // <root><a><b><c>IDDQD</c></b></a></root>
    check(
        "base64 xml maxLevel in json with global maxLevel exceed",
        r#"{"data": {"item": {"value": "PHJvb3Q+PGE+PGI+PGM+SUREUUQ8L2M+PC9iPjwvYT48L3Jvb3Q+"}}}"#,
        json_doc(obj(vec![(
            "data",
            obj(vec![(
                "item",
                obj(vec![(
                    "value",
                    JsonValue::content(b64(text("<root><a><b><c>IDDQD</c></b></a></root>"))),
                )]),
            )]),
        )])),
    );
}

#[test]
fn base64_json_in_xml_at_exact_global_budget() {
    // {"data": {"record": {"object": {"value": "IDDQD"}}}}
    check(
        "base64 json in xml with total level == globalMaxLevel",
        "<root><a>eyJkYXRhIjogeyJyZWNvcmQiOiB7Im9iamVjdCI6IHsidmFsdWUiOiAiSUREUUQifX19fQ==</a></root>",
        xml_doc(elem(
            "root",
            vec![leaf(
                "a",
                b64(json_doc(obj(vec![(
                    "data",
                    obj(vec![(
                        "record",
                        obj(vec![("object", obj(vec![("value", jtext("IDDQD"))]))]),
                    )]),
                )]))),
            )],
            None,
        )),
    );
}

#[test]
fn base64_json_in_xml_with_global_level_exceeded() {
    // {"data": {"record": {"object": {"value": "IDDQD"}}}}
    check(
        "base64 json in xml with global maxLevel exceed",
        "<root><a><b>eyJkYXRhIjogeyJyZWNvcmQiOiB7Im9iamVjdCI6IHsidmFsdWUiOiAiSUREUUQifX19fQ==</b></a></root>",
        xml_doc(elem(
            "root",
            vec![elem(
                "a",
                vec![leaf(
                    "b",
                    b64(text(r#"{"data": {"record": {"object": {"value": "IDDQD"}}}}"#)),
                )],
                None,
            )],
            None,
        )),
    );
}

#[test]
fn base64_json_object_with_field_count_exceeded() {
    // {"a": 1, "b": 2, "c": 3, "d": 4, "e": 5}
    check(
        "base64 json object in xml with maxFieldCount exceed",
        "<root><a>eyJhIjogMSwgImIiOiAyLCAiYyI6IDMsICJkIjogNCwgImUiOiA1fQ==</a></root>",
        xml_doc(elem(
            "root",
            vec![leaf(
                "a",
                b64(text(r#"{"a": 1, "b": 2, "c": 3, "d": 4, "e": 5}"#)),
            )],
            None,
        )),
    );
}

#[test]
fn base64_json_array_with_field_count_exceeded() {
    // [1,2,3,4,5]
    check(
        "base64 json array in xml with maxFieldCount exceed",
        "<root><a>WzEsMiwzLDQsNV0=</a></root>",
        xml_doc(elem(
            "root",
            vec![leaf("a", b64(text("[1,2,3,4,5]")))],
            None,
        )),
    );
}

#[test]
fn attributes_survive_classification() {
    check(
        "attributes survive",
        r#"<root><a attr1="1" attr2="2" attr1="111">IDDQD</a></root>"#,
        xml_doc(elem(
            "root",
            vec![XmlElement {
                name: XmlName::local("a"),
                attributes: vec![
                    XmlAttribute {
                        name: XmlName::local("attr1"),
                        value: "1".into(),
                    },
                    XmlAttribute {
                        name: XmlName::local("attr2"),
                        value: "2".into(),
                    },
                    XmlAttribute {
                        name: XmlName::local("attr1"),
                        value: "111".into(),
                    },
                ],
                children: Vec::new(),
                value: Some(Box::new(text("IDDQD"))),
            }],
            None,
        )),
    );
}

#[test]
fn surrounding_whitespace_is_trimmed_before_classification() {
    check(
        "whitespace around json",
        "  {\"key\": \"IDDQD\"}\n",
        json_doc(obj(vec![("key", jtext("IDDQD"))])),
    );
}

#[test]
fn unrecognized_input_stays_verbatim() {
    check("plain text", "just words", text("just words"));
    // Pre-trim original is preserved on the unspecified path.
    check("padded plain text", "  just words  ", text("  just words  "));
}
