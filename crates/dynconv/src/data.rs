// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Typed value container pairing a descriptor with a value.

use crate::descriptor::TypeDescriptor;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Errors for Data operations.
#[derive(Debug)]
pub enum DataError {
    FieldNotFound(String),
    TypeMismatch { expected: String, got: String },
    InvalidOperation(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldNotFound(name) => write!(f, "Field not found: {}", name),
            Self::TypeMismatch { expected, got } => {
                write!(f, "Type mismatch: expected {}, got {}", expected, got)
            }
            Self::InvalidOperation(msg) => write!(f, "Invalid operation for type: {}", msg),
        }
    }
}

impl std::error::Error for DataError {}

/// A value handle: a type descriptor together with a value of that type.
///
/// This is the surface [`convert_structs`](crate::convert_structs) reads
/// from and writes into.
#[derive(Debug, Clone)]
pub struct Data {
    /// Type descriptor.
    descriptor: Arc<TypeDescriptor>,
    /// Actual value.
    value: Value,
}

impl Data {
    /// Create new Data holding the type's zero value.
    pub fn new(descriptor: &Arc<TypeDescriptor>) -> Self {
        let value = Value::default_for(descriptor);
        Self {
            descriptor: descriptor.clone(),
            value,
        }
    }

    /// Create from an existing value.
    pub fn from_value(descriptor: &Arc<TypeDescriptor>, value: Value) -> Self {
        Self {
            descriptor: descriptor.clone(),
            value,
        }
    }

    /// Get the type descriptor.
    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.descriptor
    }

    /// Get the type name.
    pub fn type_name(&self) -> &str {
        &self.descriptor.name
    }

    /// Get the underlying value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Get mutable reference to value.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Into inner value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Get a field value by name, converted to a concrete type.
    pub fn get<T: FromValue>(&self, name: &str) -> Result<T, DataError> {
        let field_value = self.get_field(name)?;
        T::from_value(field_value)
    }

    /// Set a field value by name.
    pub fn set<T: IntoValue>(&mut self, name: &str, value: T) -> Result<(), DataError> {
        if self.descriptor.field(name).is_none() {
            return Err(DataError::FieldNotFound(name.to_string()));
        }

        let value = value.into_value();
        if self.value.set_field(name, value) {
            Ok(())
        } else {
            Err(DataError::InvalidOperation("set requires struct type".into()))
        }
    }

    /// Get field by name.
    pub fn get_field(&self, name: &str) -> Result<&Value, DataError> {
        if self.descriptor.field(name).is_none() {
            return Err(DataError::FieldNotFound(name.to_string()));
        }

        match &self.value {
            Value::Struct(_) => self
                .value
                .get_field(name)
                .ok_or_else(|| DataError::FieldNotFound(name.to_string())),
            _ => Err(DataError::InvalidOperation(
                "get_field requires struct type".into(),
            )),
        }
    }

    /// Get mutable field by name.
    pub fn get_field_mut(&mut self, name: &str) -> Result<&mut Value, DataError> {
        if self.descriptor.field(name).is_none() {
            return Err(DataError::FieldNotFound(name.to_string()));
        }

        match &mut self.value {
            Value::Struct(_) => self
                .value
                .get_field_mut(name)
                .ok_or_else(|| DataError::FieldNotFound(name.to_string())),
            _ => Err(DataError::InvalidOperation(
                "get_field_mut requires struct type".into(),
            )),
        }
    }

    /// Iterate over fields (for structs).
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        match &self.value {
            Value::Struct(fields) => {
                Box::new(fields.iter().map(|(k, v)| (k.as_str(), v))) as Box<dyn Iterator<Item = _>>
            }
            _ => Box::new(std::iter::empty()),
        }
    }
}

impl PartialEq for Data {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.name == other.descriptor.name && self.value == other.value
    }
}

/// Trait for extracting a concrete type from a Value.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, DataError>;
}

/// Trait for converting a concrete type into a Value.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

macro_rules! impl_from_value {
    ($ty:ty, $variant:ident, $name:expr) => {
        impl FromValue for $ty {
            fn from_value(value: &Value) -> Result<Self, DataError> {
                match value {
                    Value::$variant(v) => Ok(*v),
                    other => Err(DataError::TypeMismatch {
                        expected: $name.to_string(),
                        got: format!("{:?}", other),
                    }),
                }
            }
        }
    };
}

impl_from_value!(bool, Bool, "bool");
impl_from_value!(u8, U8, "u8");
impl_from_value!(u16, U16, "u16");
impl_from_value!(u32, U32, "u32");
impl_from_value!(u64, U64, "u64");
impl_from_value!(i8, I8, "i8");
impl_from_value!(i16, I16, "i16");
impl_from_value!(i32, I32, "i32");
impl_from_value!(i64, I64, "i64");
impl_from_value!(f32, F32, "f32");
impl_from_value!(f64, F64, "f64");
impl_from_value!(char, Char, "char");

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, DataError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(DataError::TypeMismatch {
                expected: "string".to_string(),
                got: format!("{:?}", other),
            }),
        }
    }
}

macro_rules! impl_into_value {
    ($ty:ty, $variant:ident) => {
        impl IntoValue for $ty {
            fn into_value(self) -> Value {
                Value::$variant(self)
            }
        }
    };
}

impl_into_value!(bool, Bool);
impl_into_value!(u8, U8);
impl_into_value!(u16, U16);
impl_into_value!(u32, U32);
impl_into_value!(u64, U64);
impl_into_value!(i8, I8);
impl_into_value!(i16, I16);
impl_into_value!(i32, I32);
impl_into_value!(i64, I64);
impl_into_value!(f32, F32);
impl_into_value!(f64, F64);
impl_into_value!(char, Char);

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}
