//! Unit tests for encoding native values.

use numwire::{
    Argument, CallError, NativeValue, Orientation, Primitive, Shape, TypeTag, build_request,
    encode, encode_boolean, encode_matrix, encode_request, encode_scalar, encode_text,
    encode_vector,
};

fn numbers(data: &[Primitive]) -> Vec<f64> {
    data.iter().map(|p| p.as_f64().unwrap()).collect()
}

#[test]
fn test_encode_matrix_scenario() {
    let wire = encode_matrix(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]], TypeTag::Double).unwrap();

    assert_eq!(numbers(&wire.data), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    assert_eq!(wire.shape, Shape(2, 3));
    assert_eq!(wire.type_tag, TypeTag::Double);
}

#[test]
fn test_encode_matrix_index_law() {
    for rows in 1..5 {
        for cols in 1..5 {
            let matrix: Vec<Vec<f64>> = (0..rows)
                .map(|i| (0..cols).map(|j| (i * 10 + j) as f64).collect())
                .collect();
            let wire = encode_matrix(&matrix, TypeTag::Double).unwrap();
            let data = numbers(&wire.data);

            assert_eq!(wire.shape, Shape(rows, cols));
            for i in 0..rows {
                for j in 0..cols {
                    assert_eq!(data[i + j * rows], matrix[i][j]);
                }
            }
        }
    }
}

#[test]
fn test_encode_text_scenario() {
    let wire = encode_text("Sine");

    assert_eq!(wire.data, vec![Primitive::Text("Sine".to_string())]);
    assert_eq!(wire.shape, Shape(1, 4));
    assert_eq!(wire.type_tag, TypeTag::Char);
}

#[test]
fn test_encode_empty_text_keeps_single_token() {
    let wire = encode_text("");
    assert_eq!(wire.data.len(), 1);
    assert_eq!(wire.shape, Shape(1, 0));
}

#[test]
fn test_encode_scalar_and_boolean() {
    let scalar = encode_scalar(2.5, TypeTag::Double);
    assert_eq!(scalar.shape, Shape::SCALAR);
    assert_eq!(scalar.data, vec![Primitive::Number(2.5)]);

    let flag = encode_boolean(true);
    assert_eq!(flag.type_tag, TypeTag::Logical);
    assert_eq!(flag.shape, Shape::SCALAR);
    assert_eq!(flag.data, vec![Primitive::Bool(true)]);
}

#[test]
fn test_encode_vector_orientation_only_changes_shape() {
    let values = [1.0, 2.0, 3.0];
    let row = encode_vector(&values, TypeTag::Double, Orientation::Row);
    let col = encode_vector(&values, TypeTag::Double, Orientation::Column);

    assert_eq!(row.shape, Shape(1, 3));
    assert_eq!(col.shape, Shape(3, 1));
    assert_eq!(row.data, col.data);
    assert_eq!(numbers(&row.data), values.to_vec());
}

#[test]
fn test_encode_honors_numeric_hint() {
    let arg = Argument::new(NativeValue::row_vector(vec![1.0, 2.0])).with_type(TypeTag::Int32);
    let wire = encode(&arg).unwrap();
    assert_eq!(wire.type_tag, TypeTag::Int32);
}

#[test]
fn test_encode_rejects_incompatible_hint() {
    let arg = Argument::new(NativeValue::Matrix(vec![vec![1.0]])).with_type(TypeTag::Char);
    assert!(matches!(encode(&arg), Err(CallError::InvalidType { .. })));
}

#[test]
fn test_shape_hint_reshapes_column_major_data() {
    let arg = Argument::new(NativeValue::row_vector(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]))
        .with_shape(2, 3);
    let wire = encode(&arg).unwrap();

    assert_eq!(wire.shape, Shape(2, 3));
    assert_eq!(numbers(&wire.data), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_shape_hint_mismatch() {
    let arg = Argument::new(NativeValue::row_vector(vec![1.0, 2.0, 3.0])).with_shape(2, 2);
    match encode(&arg) {
        Err(CallError::ShapeMismatch { shape, expected, actual }) => {
            assert_eq!(shape, Shape(2, 2));
            assert_eq!(expected, 4);
            assert_eq!(actual, 3);
        }
        other => panic!("expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_text_shape_hint_counts_characters() {
    let ok = Argument::new(NativeValue::Text("abc".into())).with_shape(1, 3);
    assert_eq!(encode(&ok).unwrap().data.len(), 1);

    let bad = Argument::new(NativeValue::Text("abc".into())).with_shape(1, 1);
    assert!(matches!(encode(&bad), Err(CallError::ShapeMismatch { .. })));
}

#[test]
fn test_build_request_arity() {
    assert!(matches!(
        build_request(0, vec![]),
        Err(CallError::InvalidArity { requested: 0 })
    ));

    let request = build_request(2, vec![encode_scalar(1.0, TypeTag::Double)]).unwrap();
    assert_eq!(request.output_count, 2);
    assert_eq!(request.arguments.len(), 1);
}

#[test]
fn test_encode_request_checks_arity_first() {
    let bad_arg = Argument::new(NativeValue::Boolean(true)).with_type(TypeTag::Double);
    assert!(matches!(
        encode_request(0, &[bad_arg]),
        Err(CallError::InvalidArity { .. })
    ));
}

#[test]
fn test_overflowing_shape_hint_rejected() {
    let arg = Argument::new(NativeValue::row_vector(vec![1.0, 2.0])).with_shape(usize::MAX, 2);
    match encode(&arg) {
        Err(CallError::ShapeMismatch { shape, expected, actual }) => {
            assert_eq!(shape, Shape(usize::MAX, 2));
            assert_eq!(expected, usize::MAX);
            assert_eq!(actual, 2);
        }
        other => panic!("expected ShapeMismatch, got {:?}", other),
    }
}
