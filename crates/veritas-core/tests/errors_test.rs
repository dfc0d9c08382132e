//! Error taxonomy: display strings and family classification.

use veritas_core::errors::VeritasError;

#[test]
fn input_errors_are_classified() {
    assert!(VeritasError::EmptyQuery.is_input_error());
    assert!(VeritasError::EmptyCollection.is_input_error());
    assert!(VeritasError::EmptyDataset.is_input_error());

    assert!(!VeritasError::UnreachableModel {
        reason: "connection refused".into()
    }
    .is_input_error());
    assert!(!VeritasError::Storage {
        reason: "disk full".into()
    }
    .is_input_error());
}

#[test]
fn display_carries_the_underlying_reason() {
    let err = VeritasError::UnreachableModel {
        reason: "timeout after 30s".into(),
    };
    assert_eq!(err.to_string(), "model unreachable: timeout after 30s");

    let err = VeritasError::ModelNotFound {
        model: "llama3".into(),
    };
    assert_eq!(err.to_string(), "model not found: llama3");

    let err = VeritasError::CollectionNotFound {
        collection: "handbook".into(),
    };
    assert_eq!(err.to_string(), "collection not found: handbook");
}
