use std::fmt::Debug;

use crate::Span;

pub fn check_spans<T, S>(actual: S, expected: impl AsRef<[Span<T>]>)
where
    T: Clone + Debug + PartialEq,
    S: IntoIterator<Item = Span<T>>,
{
    let mut actual = actual.into_iter();
    let mut expected = expected.as_ref().iter().cloned().enumerate();

    loop {
        match (actual.next(), expected.next()) {
            (None, None) => break,

            (Some(unexpected_span), None) => {
                panic!("Unexpected trailing span: {:?}", unexpected_span)
            }
            (None, Some((index, expected_span))) => {
                panic!("Expected span {} missing: {:?}", index, expected_span)
            }
            (Some(actual_span), Some((index, expected_span))) => {
                assert_eq!(expected_span, actual_span, "Mismatch span {}", index)
            }
        }
    }
}

/// Compares only the values, for cases where the ranges are not the point of the test.
pub fn check_values<T, U, S>(actual: S, expected: impl AsRef<[U]>)
where
    T: Debug + PartialEq<U>,
    U: Debug,
    S: IntoIterator<Item = Span<T>>,
{
    let actual: Vec<T> = actual.into_iter().map(Span::into_value).collect();
    let expected = expected.as_ref();

    assert_eq!(
        actual.len(),
        expected.len(),
        "Length mismatch: {:?} vs {:?}",
        actual,
        expected
    );

    for (index, (actual, expected)) in actual.iter().zip(expected).enumerate() {
        assert!(
            actual == expected,
            "Mismatch value {}: {:?} != {:?}",
            index,
            actual,
            expected
        );
    }
}
