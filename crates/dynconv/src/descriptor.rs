// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors for runtime type information.

use std::collections::HashMap;
use std::sync::Arc;

/// Scalar type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Char,
    String,
}

impl PrimitiveKind {
    /// Kind name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
            Self::String => "string",
        }
    }

    /// Check if this kind participates in numeric coercion.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::F32
                | Self::F64
        )
    }
}

/// Type kind enumeration.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// Scalar type.
    Primitive(PrimitiveKind),
    /// Record with named fields.
    Struct(StructDescriptor),
    /// Ordered, resizable collection.
    Sequence(SequenceDescriptor),
    /// Ordered collection with fixed length.
    Array(ArrayDescriptor),
    /// Unordered key-value collection.
    Map(MapDescriptor),
    /// Indirection wrapper around a value that may be absent.
    Optional(Arc<TypeDescriptor>),
    /// Nested type reference.
    Nested(Arc<TypeDescriptor>),
}

/// A complete type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    /// Type name.
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
}

impl TypeDescriptor {
    /// Create a new type descriptor.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a scalar type descriptor.
    pub fn primitive(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self::new(name, TypeKind::Primitive(kind))
    }

    /// Create a struct type descriptor.
    pub fn struct_type(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self::new(name, TypeKind::Struct(StructDescriptor::new(fields)))
    }

    /// Create an optional wrapper over an inner type.
    pub fn optional(inner: Arc<TypeDescriptor>) -> Self {
        Self::new("", TypeKind::Optional(inner))
    }

    /// Create an unbounded sequence of an element type.
    pub fn sequence_of(element_type: Arc<TypeDescriptor>) -> Self {
        Self::new(
            "",
            TypeKind::Sequence(SequenceDescriptor::unbounded(element_type)),
        )
    }

    /// Create a fixed-length array of an element type.
    pub fn array_of(element_type: Arc<TypeDescriptor>, length: usize) -> Self {
        Self::new(
            "",
            TypeKind::Array(ArrayDescriptor::new(element_type, length)),
        )
    }

    /// Create a map from a key type to a value type.
    pub fn map_of(key_type: Arc<TypeDescriptor>, value_type: Arc<TypeDescriptor>) -> Self {
        Self::new("", TypeKind::Map(MapDescriptor::new(key_type, value_type)))
    }

    /// Check if this is a struct type (nested references are transparent).
    pub fn is_struct(&self) -> bool {
        matches!(self.resolve().kind, TypeKind::Struct(_))
    }

    /// Strip `Nested` references down to the referenced descriptor.
    pub fn resolve(&self) -> &TypeDescriptor {
        let mut desc = self;
        while let TypeKind::Nested(inner) = &desc.kind {
            desc = inner;
        }
        desc
    }

    /// Get the struct descriptor if this is a struct.
    pub fn as_struct(&self) -> Option<&StructDescriptor> {
        match &self.resolve().kind {
            TypeKind::Struct(sd) => Some(sd),
            _ => None,
        }
    }

    /// Get fields if this is a struct.
    pub fn fields(&self) -> Option<&[FieldDescriptor]> {
        self.as_struct().map(StructDescriptor::fields)
    }

    /// Get field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.as_struct()?.field(name)
    }

    /// Kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            TypeKind::Primitive(p) => p.name(),
            TypeKind::Struct(_) => "struct",
            TypeKind::Sequence(_) => "sequence",
            TypeKind::Array(_) => "array",
            TypeKind::Map(_) => "map",
            TypeKind::Optional(_) => "optional",
            TypeKind::Nested(inner) => inner.kind_name(),
        }
    }
}

/// Struct shape: ordered fields plus a name index built once at
/// construction so per-field lookup is not a linear scan.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDescriptor {
    fields: Vec<FieldDescriptor>,
    by_name: HashMap<String, usize>,
}

impl StructDescriptor {
    /// Create from fields in declaration order.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        let by_name = fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name.clone(), i))
            .collect();
        Self { fields, by_name }
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Get field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.by_name.get(name).map(|&i| &self.fields[i])
    }

    /// Get field index by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }
}

/// Field descriptor for struct members.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Field type.
    pub type_desc: Arc<TypeDescriptor>,
    /// Metadata tags, keyed by tag name (e.g. `"json" -> "renamed_field"`).
    pub tags: HashMap<String, String>,
    /// Not externally visible: skipped as a conversion source, never
    /// matched as a conversion target.
    pub hidden: bool,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(name: impl Into<String>, type_desc: Arc<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            type_desc,
            tags: HashMap::new(),
            hidden: false,
        }
    }

    /// Attach a metadata tag.
    pub fn with_tag(mut self, tag_name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(tag_name.into(), value.into());
        self
    }

    /// Mark as hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Look up a tag value by tag name.
    pub fn tag(&self, tag_name: &str) -> Option<&str> {
        self.tags.get(tag_name).map(String::as_str)
    }
}

/// Sequence type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceDescriptor {
    /// Element type.
    pub element_type: Arc<TypeDescriptor>,
    /// Maximum length (None = unbounded).
    pub max_length: Option<usize>,
}

impl SequenceDescriptor {
    /// Create unbounded sequence.
    pub fn unbounded(element_type: Arc<TypeDescriptor>) -> Self {
        Self {
            element_type,
            max_length: None,
        }
    }

    /// Create bounded sequence.
    pub fn bounded(element_type: Arc<TypeDescriptor>, max_length: usize) -> Self {
        Self {
            element_type,
            max_length: Some(max_length),
        }
    }
}

/// Array type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayDescriptor {
    /// Element type.
    pub element_type: Arc<TypeDescriptor>,
    /// Fixed length.
    pub length: usize,
}

impl ArrayDescriptor {
    /// Create array descriptor.
    pub fn new(element_type: Arc<TypeDescriptor>, length: usize) -> Self {
        Self {
            element_type,
            length,
        }
    }
}

/// Map type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDescriptor {
    /// Key type (must resolve to a scalar kind usable as a map key).
    pub key_type: Arc<TypeDescriptor>,
    /// Value type.
    pub value_type: Arc<TypeDescriptor>,
}

impl MapDescriptor {
    /// Create map descriptor.
    pub fn new(key_type: Arc<TypeDescriptor>, value_type: Arc<TypeDescriptor>) -> Self {
        Self {
            key_type,
            value_type,
        }
    }
}
