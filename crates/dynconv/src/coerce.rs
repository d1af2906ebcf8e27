// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Scalar coercion between distinct primitive kinds.
//!
//! Numeric kinds (integers, floats) coerce freely with `as`-cast
//! semantics: integer casts truncate, float-to-integer casts saturate
//! (NaN becomes 0). A char coerces as its code point; an integer coerces
//! to char only when it is a valid code point. Bool and string have no
//! defined coercion.

use crate::descriptor::PrimitiveKind;
use crate::value::Value;

/// Numeric intermediate wide enough for every supported scalar.
enum Num {
    Int(i128),
    Float(f64),
}

/// Coerce a scalar value to a different primitive kind.
///
/// Returns `None` when no coercion is defined for the pair. Identity
/// (same-kind) assignment is the caller's concern, not handled here.
pub(crate) fn coerce(value: &Value, target: PrimitiveKind) -> Option<Value> {
    let num = match value {
        Value::U8(v) => Num::Int(i128::from(*v)),
        Value::U16(v) => Num::Int(i128::from(*v)),
        Value::U32(v) => Num::Int(i128::from(*v)),
        Value::U64(v) => Num::Int(i128::from(*v)),
        Value::I8(v) => Num::Int(i128::from(*v)),
        Value::I16(v) => Num::Int(i128::from(*v)),
        Value::I32(v) => Num::Int(i128::from(*v)),
        Value::I64(v) => Num::Int(i128::from(*v)),
        Value::Char(v) => Num::Int(i128::from(u32::from(*v))),
        Value::F32(v) => Num::Float(f64::from(*v)),
        Value::F64(v) => Num::Float(*v),
        _ => return None,
    };

    macro_rules! cast {
        ($variant:ident, $ty:ty) => {
            Some(Value::$variant(match num {
                Num::Int(i) => i as $ty,
                Num::Float(f) => f as $ty,
            }))
        };
    }

    match target {
        PrimitiveKind::U8 => cast!(U8, u8),
        PrimitiveKind::U16 => cast!(U16, u16),
        PrimitiveKind::U32 => cast!(U32, u32),
        PrimitiveKind::U64 => cast!(U64, u64),
        PrimitiveKind::I8 => cast!(I8, i8),
        PrimitiveKind::I16 => cast!(I16, i16),
        PrimitiveKind::I32 => cast!(I32, i32),
        PrimitiveKind::I64 => cast!(I64, i64),
        PrimitiveKind::F32 => cast!(F32, f32),
        PrimitiveKind::F64 => cast!(F64, f64),
        PrimitiveKind::Char => match num {
            Num::Int(i) => u32::try_from(i)
                .ok()
                .and_then(char::from_u32)
                .map(Value::Char),
            Num::Float(_) => None,
        },
        PrimitiveKind::Bool | PrimitiveKind::String => None,
    }
}
