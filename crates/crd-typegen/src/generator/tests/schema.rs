use serde_json::json;

use crate::generator::schema::{PrimitiveType, SchemaNode};

fn node(value: serde_json::Value) -> SchemaNode {
  serde_json::from_value(value).unwrap()
}

#[test]
fn test_primitive_tags() {
  for (tag, expected) in [
    ("null", PrimitiveType::Null),
    ("boolean", PrimitiveType::Boolean),
    ("number", PrimitiveType::Number),
    ("string", PrimitiveType::String),
    ("integer", PrimitiveType::Integer),
    ("date", PrimitiveType::Date),
  ] {
    let SchemaNode::Primitive(primitive) = node(json!({ "type": tag })) else {
      panic!("'{tag}' should be a primitive");
    };
    assert_eq!(primitive.primitive_type, expected);
    assert_eq!(expected.to_string(), tag);
  }
}

#[test]
fn test_primitive_keeps_raw_constraints() {
  let SchemaNode::Primitive(primitive) = node(json!({
    "type": "string",
    "format": "byte",
    "enum": ["a", "b"],
    "pattern": "^[a-z]+$",
    "default": "a",
    "description": "A letter."
  })) else {
    panic!("expected primitive");
  };

  assert_eq!(primitive.format.as_deref(), Some("byte"));
  assert_eq!(primitive.enum_values, vec![json!("a"), json!("b")]);
  assert_eq!(primitive.pattern.as_deref(), Some("^[a-z]+$"));
  assert_eq!(primitive.default, Some(json!("a")));
  assert_eq!(primitive.description.as_deref(), Some("A letter."));
}

#[test]
fn test_object_preserves_property_order_and_required() {
  let SchemaNode::Object(object) = node(json!({
    "type": "object",
    "required": ["zeta", "missing"],
    "properties": {
      "zeta": { "type": "string" },
      "alpha": { "type": "string" },
      "mid": { "type": "object" }
    }
  })) else {
    panic!("expected object");
  };

  let names: Vec<&str> = object.properties.keys().map(String::as_str).collect();
  assert_eq!(names, vec!["zeta", "alpha", "mid"]);
  assert!(object.required.contains("zeta"));
  assert!(object.required.contains("missing"));
}

#[test]
fn test_untyped_shapes() {
  assert!(matches!(node(json!({ "properties": {} })), SchemaNode::Object(_)));
  assert!(matches!(
    node(json!({ "items": { "type": "string" } })),
    SchemaNode::Array(_)
  ));

  let SchemaNode::Array(array) = node(json!({ "type": "array" })) else {
    panic!("expected array");
  };
  assert_eq!(*array.items, SchemaNode::untyped());

  assert_eq!(node(json!({ "description": "anything" })).innermost().kind_label(), "primitive");
  let SchemaNode::Primitive(primitive) = node(json!({ "type": "uuid-ish" })) else {
    panic!("expected primitive");
  };
  assert_eq!(primitive.primitive_type, PrimitiveType::Untyped);
}

#[test]
fn test_int_or_string_extension() {
  let SchemaNode::Primitive(primitive) = node(json!({
    "x-kubernetes-int-or-string": true,
    "anyOf": [{ "type": "integer" }, { "type": "string" }]
  })) else {
    panic!("expected primitive");
  };
  assert_eq!(primitive.primitive_type, PrimitiveType::IntOrString);
  assert_eq!(primitive.primitive_type.to_string(), "int-or-string");
}

#[test]
fn test_innermost_strips_nested_arrays() {
  let schema = node(json!({
    "type": "array",
    "items": { "type": "array", "items": { "type": "object", "properties": {} } }
  }));
  assert!(matches!(schema.innermost(), SchemaNode::Object(_)));
}
