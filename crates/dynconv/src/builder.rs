// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for TypeDescriptor.

use crate::descriptor::{
    FieldDescriptor, MapDescriptor, PrimitiveKind, SequenceDescriptor, TypeDescriptor, TypeKind,
};
use std::sync::Arc;

/// Builder for struct type descriptors.
///
/// `tag` and `hidden` apply to the most recently added field.
#[derive(Debug)]
pub struct TypeDescriptorBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptorBuilder {
    /// Create a new builder for a struct type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a scalar field.
    pub fn field(mut self, name: impl Into<String>, kind: PrimitiveKind) -> Self {
        let type_desc = Arc::new(TypeDescriptor::primitive("", kind));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a field with a type descriptor.
    pub fn field_with_type(
        mut self,
        name: impl Into<String>,
        type_desc: Arc<TypeDescriptor>,
    ) -> Self {
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a string field.
    pub fn string_field(self, name: impl Into<String>) -> Self {
        self.field(name, PrimitiveKind::String)
    }

    /// Add an optional-wrapped scalar field.
    pub fn optional_field(self, name: impl Into<String>, kind: PrimitiveKind) -> Self {
        let inner = Arc::new(TypeDescriptor::primitive("", kind));
        self.field_with_type(name, Arc::new(TypeDescriptor::optional(inner)))
    }

    /// Add an optional-wrapped field over an arbitrary type.
    pub fn optional_with_type(
        self,
        name: impl Into<String>,
        inner: Arc<TypeDescriptor>,
    ) -> Self {
        self.field_with_type(name, Arc::new(TypeDescriptor::optional(inner)))
    }

    /// Add an unbounded sequence field of scalar elements.
    pub fn sequence_field(mut self, name: impl Into<String>, element_kind: PrimitiveKind) -> Self {
        let element_type = Arc::new(TypeDescriptor::primitive("", element_kind));
        let seq_desc = SequenceDescriptor::unbounded(element_type);
        let type_desc = Arc::new(TypeDescriptor::new("", TypeKind::Sequence(seq_desc)));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a bounded sequence field.
    pub fn bounded_sequence_field(
        mut self,
        name: impl Into<String>,
        element_kind: PrimitiveKind,
        max_length: usize,
    ) -> Self {
        let element_type = Arc::new(TypeDescriptor::primitive("", element_kind));
        let seq_desc = SequenceDescriptor::bounded(element_type, max_length);
        let type_desc = Arc::new(TypeDescriptor::new("", TypeKind::Sequence(seq_desc)));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a fixed-length array field of scalar elements.
    pub fn array_field(
        mut self,
        name: impl Into<String>,
        element_kind: PrimitiveKind,
        length: usize,
    ) -> Self {
        let element_type = Arc::new(TypeDescriptor::primitive("", element_kind));
        let type_desc = Arc::new(TypeDescriptor::array_of(element_type, length));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a map field with scalar keys and values.
    pub fn map_field(
        mut self,
        name: impl Into<String>,
        key_kind: PrimitiveKind,
        value_kind: PrimitiveKind,
    ) -> Self {
        let key_type = Arc::new(TypeDescriptor::primitive("", key_kind));
        let value_type = Arc::new(TypeDescriptor::primitive("", value_kind));
        let map_desc = MapDescriptor::new(key_type, value_type);
        let type_desc = Arc::new(TypeDescriptor::new("", TypeKind::Map(map_desc)));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a map field with arbitrary key/value types.
    pub fn map_field_with_types(
        mut self,
        name: impl Into<String>,
        key_type: Arc<TypeDescriptor>,
        value_type: Arc<TypeDescriptor>,
    ) -> Self {
        let type_desc = Arc::new(TypeDescriptor::map_of(key_type, value_type));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Add a nested struct field.
    pub fn nested_field(mut self, name: impl Into<String>, nested: Arc<TypeDescriptor>) -> Self {
        let type_desc = Arc::new(TypeDescriptor::new("", TypeKind::Nested(nested)));
        self.fields.push(FieldDescriptor::new(name, type_desc));
        self
    }

    /// Attach a metadata tag to the most recently added field.
    pub fn tag(mut self, tag_name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Some(field) = self.fields.pop() {
            self.fields.push(field.with_tag(tag_name, value));
        }
        self
    }

    /// Mark the most recently added field as hidden.
    pub fn hidden(mut self) -> Self {
        if let Some(field) = self.fields.pop() {
            self.fields.push(field.hidden());
        }
        self
    }

    /// Build the TypeDescriptor.
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor::struct_type(self.name, self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ArrayDescriptor;

    #[test]
    fn test_struct_builder() {
        let desc = TypeDescriptorBuilder::new("Point3D")
            .field("x", PrimitiveKind::F64)
            .field("y", PrimitiveKind::F64)
            .field("z", PrimitiveKind::F64)
            .build();

        assert_eq!(desc.name, "Point3D");
        assert!(desc.is_struct());
        assert_eq!(desc.fields().map(|f| f.len()), Some(3));
    }

    #[test]
    fn test_collection_fields() {
        let desc = TypeDescriptorBuilder::new("Packet")
            .field("id", PrimitiveKind::U32)
            .sequence_field("data", PrimitiveKind::U8)
            .array_field("checksum", PrimitiveKind::U8, 4)
            .map_field("headers", PrimitiveKind::String, PrimitiveKind::String)
            .build();

        assert_eq!(desc.fields().map(|f| f.len()), Some(4));

        let field = desc.field("checksum").expect("field");
        match &field.type_desc.kind {
            TypeKind::Array(ArrayDescriptor { length, .. }) => assert_eq!(*length, 4),
            _ => panic!("Expected array"),
        }
        assert!(matches!(
            desc.field("headers").expect("field").type_desc.kind,
            TypeKind::Map(_)
        ));
    }

    #[test]
    fn test_optional_field() {
        let desc = TypeDescriptorBuilder::new("Config")
            .optional_field("retries", PrimitiveKind::U32)
            .build();

        let field = desc.field("retries").expect("field");
        assert!(matches!(field.type_desc.kind, TypeKind::Optional(_)));
    }

    #[test]
    fn test_tag_and_hidden_modifiers() {
        let desc = TypeDescriptorBuilder::new("Record")
            .field("external_id", PrimitiveKind::U64)
            .tag("json", "id")
            .field("secret", PrimitiveKind::String)
            .hidden()
            .build();

        assert_eq!(desc.field("external_id").and_then(|f| f.tag("json")), Some("id"));
        assert!(desc.field("secret").map(|f| f.hidden).unwrap_or(false));
    }

    #[test]
    fn test_nested_struct() {
        let point = Arc::new(
            TypeDescriptorBuilder::new("Point")
                .field("x", PrimitiveKind::F64)
                .field("y", PrimitiveKind::F64)
                .build(),
        );

        let rect = TypeDescriptorBuilder::new("Rectangle")
            .nested_field("top_left", point.clone())
            .nested_field("bottom_right", point)
            .build();

        assert_eq!(rect.fields().map(|f| f.len()), Some(2));
        assert!(rect.field("top_left").map(|f| f.type_desc.is_struct()).unwrap_or(false));
    }
}
