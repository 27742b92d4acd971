//! Depth-first flattening of nested schema trees into a [`TypeTable`].
//!
//! Every object node becomes its own [`TypeRecord`], named after the path that reached it.
//! Records are registered before their properties are walked, so a field always points at
//! a record that already exists, even if that record ends up with no fields at all.
//!
//! Arrays only contribute an `is_array` flag to the field they describe; an array whose
//! items are arrays collapses into a single level of wrapping.

use indexmap::IndexMap;

use crate::generator::{
  metrics::{GenerationStats, GenerationWarning},
  naming::synthetic_type_name,
  schema::{ObjectSchema, PrimitiveSchema, SchemaNode},
  table::{FieldRecord, TypeRecord, TypeTable},
};

/// Sentinel parent name for top-level schemas.
pub(crate) const ROOT_PARENT: &str = "";

pub(crate) struct Flattener<'a> {
  table: &'a mut TypeTable,
  stats: &'a mut GenerationStats,
}

impl<'a> Flattener<'a> {
  pub(crate) fn new(table: &'a mut TypeTable, stats: &'a mut GenerationStats) -> Self {
    Self { table, stats }
  }

  /// Flattens every top-level schema in declaration order.
  pub(crate) fn flatten_schemas(&mut self, schemas: &IndexMap<String, SchemaNode>) {
    self.stats.record_schemas(schemas.len());

    for (schema_name, schema) in schemas {
      if !matches!(schema.innermost(), SchemaNode::Object(_)) {
        self.stats.record_warning(GenerationWarning::UnparentedSchema {
          schema_name: schema_name.clone(),
        });
      }
      self.flatten(ROOT_PARENT, schema_name, schema, false);
    }
  }

  /// Flattens `node`, reached from `parent_name` through `field_name`, into the table.
  pub(crate) fn flatten(&mut self, parent_name: &str, field_name: &str, node: &SchemaNode, is_array: bool) {
    self.walk(parent_name, field_name, node, is_array, None);
  }

  fn walk(
    &mut self,
    parent_name: &str,
    field_name: &str,
    node: &SchemaNode,
    is_array: bool,
    array_description: Option<&str>,
  ) {
    match node {
      SchemaNode::Array(array) => {
        let description = array.description.as_deref().or(array_description);
        self.walk(parent_name, field_name, &array.items, true, description);
      }
      SchemaNode::Object(object) => {
        self.flatten_object(parent_name, field_name, object, is_array, array_description);
      }
      SchemaNode::Primitive(primitive) => {
        self.flatten_primitive(parent_name, field_name, primitive, is_array, array_description);
      }
    }
  }

  fn flatten_object(
    &mut self,
    parent_name: &str,
    field_name: &str,
    object: &ObjectSchema,
    is_array: bool,
    array_description: Option<&str>,
  ) {
    let type_name = synthetic_type_name(parent_name, field_name);
    let description = object.description.as_deref().or(array_description).map(String::from);

    let record = TypeRecord::new(&type_name, parent_name)
      .with_required(object.required.clone())
      .with_description(object.description.clone());
    if self.table.insert(record).is_some() {
      self
        .stats
        .record_warning(GenerationWarning::TypeNameCollision { name: type_name.clone() });
    } else {
      self.stats.record_flattened_type();
    }

    let field = FieldRecord::builder()
      .name(field_name)
      .maybe_description(description)
      .type_reference(&type_name)
      .is_array(is_array)
      .is_object(true)
      .build();
    self.register_field(parent_name, field);

    for (property_name, property) in &object.properties {
      self.flatten(&type_name, property_name, property, false);
    }
  }

  fn flatten_primitive(
    &mut self,
    parent_name: &str,
    field_name: &str,
    primitive: &PrimitiveSchema,
    is_array: bool,
    array_description: Option<&str>,
  ) {
    let description = primitive.description.as_deref().or(array_description).map(String::from);

    let field = FieldRecord::builder()
      .name(field_name)
      .maybe_description(description)
      .type_reference(primitive.primitive_type.to_string())
      .is_array(is_array)
      .maybe_format(primitive.format.clone())
      .enum_values(primitive.enum_values.clone())
      .maybe_pattern(primitive.pattern.clone())
      .maybe_default_value(primitive.default.clone())
      .build();
    self.register_field(parent_name, field);
  }

  /// Attaches `field` to its owning record; required-ness comes from the owner's schema.
  fn register_field(&mut self, parent_name: &str, field: FieldRecord) {
    if let Some(owner) = self.table.get_mut(parent_name) {
      owner.add_field(field);
    }
  }
}
