// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Recursive, type-directed value conversion.
//!
//! [`convert_value`] inspects a source value's runtime kind and routes to
//! one of three strategies (struct, sequence, map) or to scalar
//! assignment/coercion, normalizing optional indirection on both sides
//! first. [`convert_structs`] is the record-to-record entry point with
//! tag-then-name field matching.
//!
//! Failure policy is fail-fast: the first error inside any recursive call
//! aborts the whole conversion. Unmatched target fields, hidden source
//! fields and absent source values are defined no-ops, not errors.

use crate::coerce;
use crate::data::Data;
use crate::descriptor::{TypeDescriptor, TypeKind};
use crate::error::ConvertError;
use crate::value::{MapKey, Value};
use std::collections::{BTreeMap, HashMap};

/// Recursion depth guard. Descriptor graphs deeper than this (including
/// self-referential ones) fail with [`ConvertError::DepthExceeded`]
/// instead of overflowing the stack.
pub const MAX_DEPTH: usize = 128;

/// Convert a single value to the target type.
///
/// An absent (`Null`) source produces the target's zero value. Optional
/// wrapping is normalized on both sides: an optional target wraps the
/// converted pointee, an optional source is dereferenced and retried.
pub fn convert_value(source: &Value, target: &TypeDescriptor) -> Result<Value, ConvertError> {
    convert_value_at(source, target, 0)
}

/// Convert a struct value to a target struct type, matching fields by
/// identical name. Unmatched and hidden target fields are skipped; the
/// rest of the target starts from its zero value.
pub fn convert_struct(source: &Value, target: &TypeDescriptor) -> Result<Value, ConvertError> {
    convert_struct_at(source, target, 0)
}

/// Convert a sequence or array value to a target sequence type,
/// element by element, preserving order and length.
pub fn convert_sequence(source: &Value, target: &TypeDescriptor) -> Result<Value, ConvertError> {
    convert_sequence_at(source, target, 0)
}

/// Convert a map value to a target map type, converting each key and
/// value. Entries are processed in ascending key order; keys that
/// collide after coercion resolve last-write-wins, so the greatest
/// colliding source key survives.
pub fn convert_map(source: &Value, target: &TypeDescriptor) -> Result<Value, ConvertError> {
    convert_map_at(source, target, 0)
}

fn convert_value_at(
    source: &Value,
    target: &TypeDescriptor,
    depth: usize,
) -> Result<Value, ConvertError> {
    if depth > MAX_DEPTH {
        return Err(ConvertError::DepthExceeded { limit: MAX_DEPTH });
    }
    let target = target.resolve();

    // Absent source terminates recursion with the target's zero value.
    if source.is_null() {
        return Ok(Value::default_for(target));
    }

    // Normalize indirection before strategy dispatch. An optional target
    // wraps the converted pointee; an absent source pointee stays absent.
    if let TypeKind::Optional(inner) = &target.kind {
        return match source {
            Value::Optional(None) => Ok(Value::Optional(None)),
            Value::Optional(Some(pointee)) => {
                let converted = convert_value_at(pointee, inner, depth + 1)?;
                Ok(Value::Optional(Some(Box::new(converted))))
            }
            _ => {
                let converted = convert_value_at(source, inner, depth + 1)?;
                Ok(Value::Optional(Some(Box::new(converted))))
            }
        };
    }

    // Optional source, non-optional target: dereference and retry.
    if let Value::Optional(pointee) = source {
        return match pointee {
            Some(pointee) => convert_value_at(pointee, target, depth + 1),
            None => Ok(Value::default_for(target)),
        };
    }

    match source {
        Value::Struct(_) => convert_struct_at(source, target, depth),
        Value::Sequence(_) | Value::Array(_) => convert_sequence_at(source, target, depth),
        Value::Map(_) => convert_map_at(source, target, depth),
        scalar => convert_scalar(scalar, target),
    }
}

/// Direct assignment for identical scalar kinds, defined coercion
/// otherwise.
fn convert_scalar(source: &Value, target: &TypeDescriptor) -> Result<Value, ConvertError> {
    let TypeKind::Primitive(kind) = &target.kind else {
        return Err(ConvertError::UnsupportedConversion {
            from: source.kind_name().to_string(),
            to: target.kind_name().to_string(),
        });
    };
    if source.primitive_kind() == Some(*kind) {
        return Ok(source.clone());
    }
    coerce::coerce(source, *kind).ok_or_else(|| ConvertError::UnsupportedConversion {
        from: source.kind_name().to_string(),
        to: kind.name().to_string(),
    })
}

fn convert_struct_at(
    source: &Value,
    target: &TypeDescriptor,
    depth: usize,
) -> Result<Value, ConvertError> {
    if depth > MAX_DEPTH {
        return Err(ConvertError::DepthExceeded { limit: MAX_DEPTH });
    }

    // One optional layer on the target is stripped for direct calls; the
    // dispatcher wraps the produced record afterward.
    let mut target = target.resolve();
    if let TypeKind::Optional(inner) = &target.kind {
        target = inner.resolve();
    }
    let source = match source {
        Value::Optional(Some(pointee)) => pointee.as_ref(),
        Value::Optional(None) | Value::Null => return Ok(Value::default_for(target)),
        other => other,
    };

    let TypeKind::Struct(target_struct) = &target.kind else {
        return Err(ConvertError::ShapeMismatch {
            expected: "struct".to_string(),
            got: target.kind_name().to_string(),
        });
    };
    let Value::Struct(source_fields) = source else {
        return Err(ConvertError::ShapeMismatch {
            expected: "struct".to_string(),
            got: source.kind_name().to_string(),
        });
    };

    let mut out = HashMap::new();
    for field in target_struct.fields() {
        out.insert(field.name.clone(), Value::default_for(&field.type_desc));
    }

    // Sorted field order so the first failure is reproducible.
    let mut names: Vec<&String> = source_fields.keys().collect();
    names.sort();
    for name in names {
        let Some(target_field) = target_struct.field(name) else {
            continue;
        };
        if target_field.hidden {
            continue;
        }
        let converted = convert_value_at(&source_fields[name], &target_field.type_desc, depth + 1)?;
        out.insert(target_field.name.clone(), converted);
    }

    Ok(Value::Struct(out))
}

fn convert_sequence_at(
    source: &Value,
    target: &TypeDescriptor,
    depth: usize,
) -> Result<Value, ConvertError> {
    if depth > MAX_DEPTH {
        return Err(ConvertError::DepthExceeded { limit: MAX_DEPTH });
    }
    let target = target.resolve();

    let TypeKind::Sequence(seq_desc) = &target.kind else {
        return Err(ConvertError::ShapeMismatch {
            expected: "sequence".to_string(),
            got: target.kind_name().to_string(),
        });
    };
    let Some(elements) = source.as_sequence() else {
        return Err(ConvertError::ShapeMismatch {
            expected: "sequence or array".to_string(),
            got: source.kind_name().to_string(),
        });
    };
    if let Some(max) = seq_desc.max_length {
        if elements.len() > max {
            return Err(ConvertError::ShapeMismatch {
                expected: format!("sequence of at most {} elements", max),
                got: format!("{} elements", elements.len()),
            });
        }
    }

    let mut out = Vec::with_capacity(elements.len());
    for element in elements {
        out.push(convert_value_at(element, &seq_desc.element_type, depth + 1)?);
    }
    Ok(Value::Sequence(out))
}

fn convert_map_at(
    source: &Value,
    target: &TypeDescriptor,
    depth: usize,
) -> Result<Value, ConvertError> {
    if depth > MAX_DEPTH {
        return Err(ConvertError::DepthExceeded { limit: MAX_DEPTH });
    }
    let target = target.resolve();

    let TypeKind::Map(map_desc) = &target.kind else {
        return Err(ConvertError::ShapeMismatch {
            expected: "map".to_string(),
            got: target.kind_name().to_string(),
        });
    };
    let Some(entries) = source.as_map() else {
        return Err(ConvertError::ShapeMismatch {
            expected: "map".to_string(),
            got: source.kind_name().to_string(),
        });
    };

    let mut out = BTreeMap::new();
    for (key, value) in entries {
        let converted_key = convert_value_at(&key.to_value(), &map_desc.key_type, depth + 1)?;
        let converted_key =
            MapKey::from_value(converted_key).ok_or_else(|| ConvertError::ShapeMismatch {
                expected: "scalar map key".to_string(),
                got: map_desc.key_type.kind_name().to_string(),
            })?;
        let converted_value = convert_value_at(value, &map_desc.value_type, depth + 1)?;
        out.insert(converted_key, converted_value);
    }
    Ok(Value::Map(out))
}

/// Convert a source record into a target record, field by field.
///
/// For every visible source field, the target field is resolved in two
/// tiers: if `tag_name` is non-empty and the source field carries that
/// tag, the target field named by the tag value is tried first; identical
/// field name is the fallback. Fields with no match are skipped without
/// error, so target records may have fewer fields than the source.
///
/// All field conversions are staged and published into `target` only on
/// full success; a failed call returns the first error and leaves the
/// target untouched.
pub fn convert_structs(
    source: &Data,
    target: &mut Data,
    tag_name: &str,
) -> Result<(), ConvertError> {
    let Some(source_struct) = source.descriptor().as_struct() else {
        return Err(ConvertError::InvalidArgument(
            "source is not a struct type".to_string(),
        ));
    };
    let target_desc = target.descriptor().clone();
    let Some(target_struct) = target_desc.as_struct() else {
        return Err(ConvertError::InvalidArgument(
            "target is not a struct type".to_string(),
        ));
    };
    if !matches!(target.value(), Value::Struct(_)) {
        return Err(ConvertError::InvalidArgument(
            "target value is not a struct".to_string(),
        ));
    }

    log::debug!(
        "[convert] {} -> {} (tag: {:?})",
        source.type_name(),
        target.type_name(),
        tag_name
    );

    let null = Value::Null;
    let mut staged: Vec<(String, Value)> = Vec::new();
    for field in source_struct.fields() {
        if field.hidden {
            continue;
        }

        let mut matched = None;
        if !tag_name.is_empty() {
            if let Some(tag_value) = field.tag(tag_name) {
                matched = target_struct.field(tag_value).filter(|f| !f.hidden);
            }
        }
        if matched.is_none() {
            matched = target_struct.field(&field.name).filter(|f| !f.hidden);
        }
        let Some(target_field) = matched else {
            continue;
        };

        let source_value = source.value().get_field(&field.name).unwrap_or(&null);
        let converted = convert_value(source_value, &target_field.type_desc)?;
        log::trace!("[convert] field {} -> {}", field.name, target_field.name);
        staged.push((target_field.name.clone(), converted));
    }

    for (name, value) in staged {
        target.value_mut().set_field(name, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PrimitiveKind;
    use std::sync::Arc;

    fn prim(kind: PrimitiveKind) -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::primitive("", kind))
    }

    #[test]
    fn test_null_source_yields_zero_value() {
        let target = prim(PrimitiveKind::U32);
        assert_eq!(convert_value(&Value::Null, &target).unwrap(), Value::U32(0));

        let target = TypeDescriptor::optional(prim(PrimitiveKind::U32));
        assert_eq!(
            convert_value(&Value::Null, &target).unwrap(),
            Value::Optional(None)
        );
    }

    #[test]
    fn test_scalar_identity_and_coercion() {
        let target = prim(PrimitiveKind::I64);
        assert_eq!(
            convert_value(&Value::I64(7), &target).unwrap(),
            Value::I64(7)
        );
        assert_eq!(
            convert_value(&Value::I32(7), &target).unwrap(),
            Value::I64(7)
        );

        let err = convert_value(&Value::Bool(true), &target).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedConversion { .. }));
    }

    #[test]
    fn test_optional_wrap_and_unwrap() {
        // non-optional source, optional target: wrap a converted copy
        let target = TypeDescriptor::optional(prim(PrimitiveKind::U64));
        assert_eq!(
            convert_value(&Value::U32(9), &target).unwrap(),
            Value::Optional(Some(Box::new(Value::U64(9))))
        );

        // optional source, non-optional target: transparent dereference
        let source = Value::Optional(Some(Box::new(Value::U32(9))));
        let target = prim(PrimitiveKind::U64);
        assert_eq!(convert_value(&source, &target).unwrap(), Value::U64(9));

        // absent pointee dereferences to the zero value
        let source = Value::Optional(None);
        assert_eq!(convert_value(&source, &target).unwrap(), Value::U64(0));
    }

    #[test]
    fn test_sequence_rejects_non_sequence_target() {
        let source = Value::from(vec![1u8, 2, 3]);
        let target = prim(PrimitiveKind::U8);
        let err = convert_value(&source, &target).unwrap_err();
        assert!(matches!(err, ConvertError::ShapeMismatch { .. }));

        // fixed-length array targets are not resizable
        let target = TypeDescriptor::array_of(prim(PrimitiveKind::U8), 3);
        let err = convert_sequence(&source, &target).unwrap_err();
        assert!(matches!(err, ConvertError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_bounded_sequence_overflow() {
        let seq = crate::descriptor::SequenceDescriptor::bounded(prim(PrimitiveKind::U8), 2);
        let target = TypeDescriptor::new("", TypeKind::Sequence(seq));
        let err = convert_sequence(&Value::from(vec![1u8, 2, 3]), &target).unwrap_err();
        assert!(matches!(err, ConvertError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_array_source_into_sequence_target() {
        let source = Value::Array(vec![Value::U8(1), Value::U8(2)]);
        let target = TypeDescriptor::sequence_of(prim(PrimitiveKind::U16));
        assert_eq!(
            convert_value(&source, &target).unwrap(),
            Value::Sequence(vec![Value::U16(1), Value::U16(2)])
        );
    }

    #[test]
    fn test_map_requires_map_target() {
        let source = Value::Map(BTreeMap::new());
        let target = prim(PrimitiveKind::U8);
        let err = convert_value(&source, &target).unwrap_err();
        assert!(matches!(err, ConvertError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_map_key_must_stay_scalar() {
        let mut entries = BTreeMap::new();
        entries.insert(MapKey::U8(1), Value::U8(1));
        let source = Value::Map(entries);

        let struct_key = Arc::new(TypeDescriptor::struct_type("K", vec![]));
        let target = TypeDescriptor::map_of(struct_key, prim(PrimitiveKind::U8));
        let err = convert_map(&source, &target).unwrap_err();
        assert!(matches!(err, ConvertError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_depth_guard() {
        let mut desc = prim(PrimitiveKind::U8);
        let mut value = Value::U8(1);
        for _ in 0..(MAX_DEPTH + 8) {
            desc = Arc::new(TypeDescriptor::optional(desc));
            value = Value::Optional(Some(Box::new(value)));
        }
        let err = convert_value(&value, &desc).unwrap_err();
        assert!(matches!(err, ConvertError::DepthExceeded { .. }));
    }
}
