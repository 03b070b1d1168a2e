//! Indented rendering of a content tree, for logs and diagnostics.

use std::fmt::{self, Write};

use crate::content::Content;
use crate::json::{JsonData, JsonValue};
use crate::xml::{XmlAttribute, XmlData, XmlElement};

const INDENT_STEP: usize = 2;

/// Renders the tree into a multi-line string. Object fields are sorted by
/// name so the output is stable.
pub fn pretty(content: &Content) -> String {
    let mut output = String::new();
    let _ = print_content(&mut output, content, 0);
    output
}

fn pad(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push(' ');
    }
}

fn print_content(output: &mut String, content: &Content, level: usize) -> fmt::Result {
    pad(output, level);
    match content {
        Content::Json(json) => {
            writeln!(output, "JSON:")?;
            print_json_data(output, json, level + INDENT_STEP)
        }
        Content::Xml(xml) => {
            writeln!(output, "XML:")?;
            print_xml_data(output, xml, level + INDENT_STEP)
        }
        Content::Base64(inner) => {
            writeln!(output, "BASE64:")?;
            print_content(output, inner, level + INDENT_STEP)
        }
        Content::Text(text) => writeln!(output, "\"{text}\""),
    }
}

fn print_xml_data(output: &mut String, data: &XmlData, level: usize) -> fmt::Result {
    print_directives(output, &data.entity_directives, "ENTITIES", level)?;
    print_directives(output, &data.doctype_directives, "DOCTYPES", level)?;
    print_directives(output, &data.other_directives, "OTHER", level)?;
    if let Some(root) = &data.root {
        print_xml_element(output, root, level)?;
    }
    Ok(())
}

fn print_directives(
    output: &mut String,
    directives: &[String],
    title: &str,
    level: usize,
) -> fmt::Result {
    pad(output, level);
    if directives.is_empty() {
        return writeln!(output, "{title}: []");
    }
    writeln!(output, "{title}:")?;
    for directive in directives {
        pad(output, level + INDENT_STEP);
        writeln!(output, "{directive}")?;
    }
    Ok(())
}

fn print_xml_element(output: &mut String, element: &XmlElement, level: usize) -> fmt::Result {
    pad(output, level);
    writeln!(output, "Name = \"{}\"", element.name.full_name())?;
    print_attributes(output, &element.attributes, level)?;
    if let Some(value) = &element.value {
        pad(output, level);
        writeln!(output, "Value:")?;
        print_content(output, value, level + INDENT_STEP)?;
    }
    for child in &element.children {
        print_xml_element(output, child, level + INDENT_STEP)?;
    }
    Ok(())
}

fn print_attributes(
    output: &mut String,
    attributes: &[XmlAttribute],
    level: usize,
) -> fmt::Result {
    if attributes.is_empty() {
        return Ok(());
    }
    pad(output, level);
    write!(output, "Attributes: ")?;
    for (index, attribute) in attributes.iter().enumerate() {
        if index > 0 {
            write!(output, ", ")?;
        }
        write!(output, "{} = \"{}\"", attribute.name.full_name(), attribute.value)?;
    }
    writeln!(output)
}

fn print_json_data(output: &mut String, data: &JsonData, level: usize) -> fmt::Result {
    print_json_value(output, &data.value, level)
}

fn print_json_value(output: &mut String, value: &JsonValue, level: usize) -> fmt::Result {
    match value {
        JsonValue::Array(values) => print_json_array(output, values, level),
        JsonValue::Object(fields) => print_json_object(output, fields, level),
        JsonValue::Null => {
            pad(output, level);
            writeln!(output, "null")
        }
        JsonValue::Bool(flag) => {
            pad(output, level);
            writeln!(output, "\"{flag}\"")
        }
        JsonValue::Number(number) => {
            pad(output, level);
            writeln!(output, "\"{number}\"")
        }
        JsonValue::Content(inner) => print_content(output, inner, level),
    }
}

fn print_json_object(
    output: &mut String,
    fields: &std::collections::HashMap<String, JsonValue>,
    level: usize,
) -> fmt::Result {
    pad(output, level);
    if fields.is_empty() {
        return writeln!(output, "OBJECT: {{}}");
    }
    writeln!(output, "OBJECT: {{")?;
    let mut names: Vec<&String> = fields.keys().collect();
    names.sort();
    for name in names {
        pad(output, level + INDENT_STEP);
        writeln!(output, "{name}:")?;
        print_json_value(output, &fields[name], level + 2 * INDENT_STEP)?;
    }
    pad(output, level);
    writeln!(output, "}}")
}

fn print_json_array(output: &mut String, values: &[JsonValue], level: usize) -> fmt::Result {
    pad(output, level);
    if values.is_empty() {
        return writeln!(output, "ARRAY: []");
    }
    writeln!(output, "ARRAY: [")?;
    for value in values {
        print_json_value(output, value, level + INDENT_STEP)?;
    }
    pad(output, level);
    writeln!(output, "]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_content, ParseParams};

    #[test]
    fn renders_nested_layers() {
        let params = ParseParams {
            max_global_level: 6,
            max_local_level: 4,
            max_field_count: 4,
        };
        let content = parse_content(r#"<root><a>{"key": "IDDQD", "num": 666}</a></root>"#, &params);
        let rendered = pretty(&content);
        assert_eq!(
            rendered,
            concat!(
                "XML:\n",
                "  ENTITIES: []\n",
                "  DOCTYPES: []\n",
                "  OTHER: []\n",
                "  Name = \"root\"\n",
                "    Name = \"a\"\n",
                "    Value:\n",
                "      JSON:\n",
                "        OBJECT: {\n",
                "          key:\n",
                "            \"IDDQD\"\n",
                "          num:\n",
                "            \"666\"\n",
                "        }\n",
            )
        );
    }

    #[test]
    fn renders_base64_wrap() {
        let content = Content::base64(Content::text("IDDQD"));
        assert_eq!(pretty(&content), "BASE64:\n  \"IDDQD\"\n");
    }
}
