// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type-directed conversion between independently-defined composite
//! values at runtime, without either side knowing the other's type
//! definition at compile time.
//!
//! # Features
//!
//! - **TypeDescriptor**: Runtime type description (scalars, structs,
//!   sequences, arrays, maps, optionals)
//! - **Value / Data**: Type-erased values with field access
//! - **Builder API**: Fluent interface for building type descriptors
//! - **Conversion engine**: Recursive field-by-field, element-by-element
//!   conversion with optional unwrapping, scalar coercion and
//!   metadata-tag field matching
//!
//! # Example
//!
//! ```rust
//! use dynconv::{convert_structs, Data, PrimitiveKind, TypeDescriptorBuilder};
//! use std::sync::Arc;
//!
//! // Two independently defined record types
//! let source_type = Arc::new(TypeDescriptorBuilder::new("SensorReading")
//!     .field("sensor_id", PrimitiveKind::U32)
//!     .field("temperature", PrimitiveKind::F32)
//!     .string_field("location")
//!     .build());
//!
//! let target_type = Arc::new(TypeDescriptorBuilder::new("StoredReading")
//!     .field("sensor_id", PrimitiveKind::U64)
//!     .field("temperature", PrimitiveKind::F64)
//!     .build());
//!
//! let mut source = Data::new(&source_type);
//! source.set("sensor_id", 42u32).unwrap();
//! source.set("temperature", 23.5f32).unwrap();
//! source.set("location", "Building A").unwrap();
//!
//! // Populate the target field by field: matched fields convert
//! // (widening u32 -> u64, f32 -> f64), the rest is dropped.
//! let mut target = Data::new(&target_type);
//! convert_structs(&source, &mut target, "").unwrap();
//!
//! assert_eq!(target.get::<u64>("sensor_id").unwrap(), 42);
//! assert_eq!(target.get::<f64>("temperature").unwrap(), 23.5);
//! ```

mod builder;
mod coerce;
mod convert;
mod data;
mod descriptor;
mod error;
mod value;

pub use builder::TypeDescriptorBuilder;
pub use convert::{
    convert_map, convert_sequence, convert_struct, convert_structs, convert_value, MAX_DEPTH,
};
pub use data::{Data, DataError, FromValue, IntoValue};
pub use descriptor::{
    ArrayDescriptor, FieldDescriptor, MapDescriptor, PrimitiveKind, SequenceDescriptor,
    StructDescriptor, TypeDescriptor, TypeKind,
};
pub use error::ConvertError;
pub use value::{MapKey, Value};
