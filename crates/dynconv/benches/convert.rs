// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Conversion engine benchmarks.
//!
//! Measures record-to-record conversion throughput for a flat record,
//! a nested record with optional indirection, and a wide sequence.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dynconv::{
    convert_structs, convert_value, Data, PrimitiveKind, TypeDescriptor, TypeDescriptorBuilder,
    Value,
};
use std::sync::Arc;

fn flat_record(c: &mut Criterion) {
    let source_type = Arc::new(
        TypeDescriptorBuilder::new("SensorReading")
            .field("sensor_id", PrimitiveKind::U32)
            .field("temperature", PrimitiveKind::F32)
            .field("humidity", PrimitiveKind::F32)
            .field("timestamp", PrimitiveKind::U64)
            .string_field("location")
            .build(),
    );
    let target_type = Arc::new(
        TypeDescriptorBuilder::new("StoredReading")
            .field("sensor_id", PrimitiveKind::U64)
            .field("temperature", PrimitiveKind::F64)
            .field("humidity", PrimitiveKind::F64)
            .field("timestamp", PrimitiveKind::U64)
            .string_field("location")
            .build(),
    );

    let mut source = Data::new(&source_type);
    source.set("sensor_id", 42u32).unwrap();
    source.set("temperature", 23.5f32).unwrap();
    source.set("humidity", 61.0f32).unwrap();
    source.set("timestamp", 1702900000u64).unwrap();
    source.set("location", "Building A").unwrap();

    c.bench_function("convert_flat_record", |b| {
        b.iter(|| {
            let mut target = Data::new(&target_type);
            convert_structs(black_box(&source), &mut target, "").unwrap();
            target
        });
    });
}

fn nested_record(c: &mut Criterion) {
    let point = Arc::new(
        TypeDescriptorBuilder::new("Point")
            .field("x", PrimitiveKind::F32)
            .field("y", PrimitiveKind::F32)
            .build(),
    );
    let source_type = Arc::new(
        TypeDescriptorBuilder::new("Shape")
            .nested_field("center", point.clone())
            .sequence_field("edges", PrimitiveKind::U16)
            .build(),
    );
    let wide_point = Arc::new(
        TypeDescriptorBuilder::new("WidePoint")
            .field("x", PrimitiveKind::F64)
            .field("y", PrimitiveKind::F64)
            .build(),
    );
    let target_type = Arc::new(
        TypeDescriptorBuilder::new("WideShape")
            .optional_with_type("center", wide_point)
            .sequence_field("edges", PrimitiveKind::U32)
            .build(),
    );

    let mut center = std::collections::HashMap::new();
    center.insert("x".to_string(), Value::F32(1.5));
    center.insert("y".to_string(), Value::F32(-2.5));
    let mut source = Data::new(&source_type);
    source.set("center", Value::Struct(center)).unwrap();
    source
        .set("edges", Value::from((0..32u16).collect::<Vec<_>>()))
        .unwrap();

    c.bench_function("convert_nested_record", |b| {
        b.iter(|| {
            let mut target = Data::new(&target_type);
            convert_structs(black_box(&source), &mut target, "").unwrap();
            target
        });
    });
}

fn wide_sequence(c: &mut Criterion) {
    let source = Value::from((0..4096u16).collect::<Vec<_>>());
    let element_type = Arc::new(TypeDescriptor::primitive("", PrimitiveKind::U64));
    let target = TypeDescriptor::sequence_of(element_type);

    c.bench_function("convert_sequence_4096", |b| {
        b.iter(|| convert_value(black_box(&source), black_box(&target)).unwrap());
    });
}

criterion_group!(benches, flat_record, nested_record, wide_sequence);
criterion_main!(benches);
