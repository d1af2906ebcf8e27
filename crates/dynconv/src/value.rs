// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime value types.

use crate::descriptor::{PrimitiveKind, TypeDescriptor, TypeKind};
use std::collections::{BTreeMap, HashMap};

/// A type-erased runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // Scalars
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Char(char),
    String(String),

    // Composites
    Struct(HashMap<String, Value>),
    Sequence(Vec<Value>),
    Array(Vec<Value>),
    Map(BTreeMap<MapKey, Value>),

    /// Indirection wrapper; `None` is an absent pointee.
    Optional(Option<Box<Value>>),

    /// Absent / uninitialized.
    Null,
}

/// Scalar kinds usable as map keys.
///
/// Ordered and hashable by construction; floats are deliberately absent.
/// `BTreeMap` iteration over these keys is the deterministic order the
/// mapping conversion strategy relies on for last-write-wins collisions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapKey {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Char(char),
    String(String),
}

impl MapKey {
    /// View as a plain value (for recursive key conversion).
    pub fn to_value(&self) -> Value {
        match self {
            Self::Bool(v) => Value::Bool(*v),
            Self::U8(v) => Value::U8(*v),
            Self::U16(v) => Value::U16(*v),
            Self::U32(v) => Value::U32(*v),
            Self::U64(v) => Value::U64(*v),
            Self::I8(v) => Value::I8(*v),
            Self::I16(v) => Value::I16(*v),
            Self::I32(v) => Value::I32(*v),
            Self::I64(v) => Value::I64(*v),
            Self::Char(v) => Value::Char(*v),
            Self::String(v) => Value::String(v.clone()),
        }
    }

    /// Reclaim a converted key. `None` if the value is not a valid key kind.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(Self::Bool(v)),
            Value::U8(v) => Some(Self::U8(v)),
            Value::U16(v) => Some(Self::U16(v)),
            Value::U32(v) => Some(Self::U32(v)),
            Value::U64(v) => Some(Self::U64(v)),
            Value::I8(v) => Some(Self::I8(v)),
            Value::I16(v) => Some(Self::I16(v)),
            Value::I32(v) => Some(Self::I32(v)),
            Value::I64(v) => Some(Self::I64(v)),
            Value::Char(v) => Some(Self::Char(v)),
            Value::String(v) => Some(Self::String(v)),
            _ => None,
        }
    }
}

impl Value {
    /// Check if value denotes "absent".
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Runtime kind name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Char(_) => "char",
            Self::String(_) => "string",
            Self::Struct(_) => "struct",
            Self::Sequence(_) => "sequence",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
            Self::Optional(_) => "optional",
            Self::Null => "null",
        }
    }

    /// Scalar kind of this value, if it is a scalar.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Bool(_) => Some(PrimitiveKind::Bool),
            Self::U8(_) => Some(PrimitiveKind::U8),
            Self::U16(_) => Some(PrimitiveKind::U16),
            Self::U32(_) => Some(PrimitiveKind::U32),
            Self::U64(_) => Some(PrimitiveKind::U64),
            Self::I8(_) => Some(PrimitiveKind::I8),
            Self::I16(_) => Some(PrimitiveKind::I16),
            Self::I32(_) => Some(PrimitiveKind::I32),
            Self::I64(_) => Some(PrimitiveKind::I64),
            Self::F32(_) => Some(PrimitiveKind::F32),
            Self::F64(_) => Some(PrimitiveKind::F64),
            Self::Char(_) => Some(PrimitiveKind::Char),
            Self::String(_) => Some(PrimitiveKind::String),
            _ => None,
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u8.
    pub fn as_u8(&self) -> Option<u8> {
        match self {
            Self::U8(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u16.
    pub fn as_u16(&self) -> Option<u16> {
        match self {
            Self::U16(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u32.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::U32(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i8.
    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Self::I8(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i16.
    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Self::I16(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::I32(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as f32.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::F32(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as char.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as sequence or array elements.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(v) | Self::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as map entries.
    pub fn as_map(&self) -> Option<&BTreeMap<MapKey, Value>> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as the optional pointee (`None` for an absent pointee).
    pub fn as_optional(&self) -> Option<Option<&Value>> {
        match self {
            Self::Optional(v) => Some(v.as_deref()),
            _ => None,
        }
    }

    /// Try to get struct field.
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Struct(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Try to get mutable struct field.
    pub fn get_field_mut(&mut self, name: &str) -> Option<&mut Value> {
        match self {
            Self::Struct(fields) => fields.get_mut(name),
            _ => None,
        }
    }

    /// Set struct field. Returns false if this is not a struct.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) -> bool {
        match self {
            Self::Struct(fields) => {
                fields.insert(name.into(), value);
                true
            }
            _ => false,
        }
    }

    /// Zero/empty value for a type descriptor.
    pub fn default_for(desc: &TypeDescriptor) -> Value {
        match &desc.kind {
            TypeKind::Primitive(p) => Self::default_primitive(*p),
            TypeKind::Struct(sd) => {
                let mut map = HashMap::new();
                for field in sd.fields() {
                    map.insert(field.name.clone(), Self::default_for(&field.type_desc));
                }
                Value::Struct(map)
            }
            TypeKind::Sequence(_) => Value::Sequence(Vec::new()),
            TypeKind::Array(arr) => {
                let elem_default = Self::default_for(&arr.element_type);
                Value::Array(vec![elem_default; arr.length])
            }
            TypeKind::Map(_) => Value::Map(BTreeMap::new()),
            TypeKind::Optional(_) => Value::Optional(None),
            TypeKind::Nested(inner) => Self::default_for(inner),
        }
    }

    /// Zero value for a scalar kind.
    fn default_primitive(kind: PrimitiveKind) -> Value {
        match kind {
            PrimitiveKind::Bool => Value::Bool(false),
            PrimitiveKind::U8 => Value::U8(0),
            PrimitiveKind::U16 => Value::U16(0),
            PrimitiveKind::U32 => Value::U32(0),
            PrimitiveKind::U64 => Value::U64(0),
            PrimitiveKind::I8 => Value::I8(0),
            PrimitiveKind::I16 => Value::I16(0),
            PrimitiveKind::I32 => Value::I32(0),
            PrimitiveKind::I64 => Value::I64(0),
            PrimitiveKind::F32 => Value::F32(0.0),
            PrimitiveKind::F64 => Value::F64(0.0),
            PrimitiveKind::Char => Value::Char('\0'),
            PrimitiveKind::String => Value::String(String::new()),
        }
    }
}

// Conversion traits
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Self::U16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::U32(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Self::I8(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::I16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Self::Optional(v.map(|inner| Box::new(inner.into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldDescriptor;
    use std::sync::Arc;

    #[test]
    fn test_scalar_accessors() {
        let v = Value::from(42u32);
        assert_eq!(v.as_u32(), Some(42));
        assert_eq!(v.as_i32(), None);
        assert_eq!(v.primitive_kind(), Some(PrimitiveKind::U32));

        let v = Value::from("hello");
        assert_eq!(v.as_str(), Some("hello"));
        assert_eq!(v.kind_name(), "string");
    }

    #[test]
    fn test_struct_fields() {
        let mut v = Value::Struct(HashMap::new());
        v.set_field("x", 10i32.into());
        v.set_field("y", 20i32.into());

        assert_eq!(v.get_field("x").and_then(|f| f.as_i32()), Some(10));
        assert_eq!(v.get_field("y").and_then(|f| f.as_i32()), Some(20));
        assert!(v.get_field("z").is_none());
    }

    #[test]
    fn test_optional_wrapping() {
        let v = Value::from(Some(7u8));
        assert_eq!(v.as_optional().flatten().and_then(Value::as_u8), Some(7));

        let v = Value::from(None::<u8>);
        assert_eq!(v.as_optional(), Some(None));
    }

    #[test]
    fn test_map_key_ordering() {
        let mut map = BTreeMap::new();
        map.insert(MapKey::I32(3), Value::from("c"));
        map.insert(MapKey::I32(1), Value::from("a"));
        map.insert(MapKey::I32(2), Value::from("b"));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![MapKey::I32(1), MapKey::I32(2), MapKey::I32(3)]);
    }

    #[test]
    fn test_map_key_round_trip() {
        let key = MapKey::String("k".to_string());
        assert_eq!(MapKey::from_value(key.to_value()), Some(key));
        assert_eq!(MapKey::from_value(Value::F64(1.0)), None);
        assert_eq!(MapKey::from_value(Value::Null), None);
    }

    #[test]
    fn test_default_for_struct() {
        let u32_type = Arc::new(TypeDescriptor::primitive("", PrimitiveKind::U32));
        let opt_type = Arc::new(TypeDescriptor::optional(u32_type.clone()));
        let desc = TypeDescriptor::struct_type(
            "Defaults",
            vec![
                FieldDescriptor::new("n", u32_type.clone()),
                FieldDescriptor::new("maybe", opt_type),
                FieldDescriptor::new(
                    "values",
                    Arc::new(TypeDescriptor::sequence_of(u32_type.clone())),
                ),
                FieldDescriptor::new("fixed", Arc::new(TypeDescriptor::array_of(u32_type, 3))),
            ],
        );

        let v = Value::default_for(&desc);
        assert_eq!(v.get_field("n"), Some(&Value::U32(0)));
        assert_eq!(v.get_field("maybe"), Some(&Value::Optional(None)));
        assert_eq!(v.get_field("values"), Some(&Value::Sequence(Vec::new())));
        assert_eq!(
            v.get_field("fixed"),
            Some(&Value::Array(vec![Value::U32(0); 3]))
        );
    }
}
