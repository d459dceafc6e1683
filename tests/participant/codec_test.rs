// Codec Tests
// Tests for the JSON encoding of participant records

use pointledger::participant::{CodecError, Participant, ParticipantCodec};

#[test]
fn test_encode_decode_preserves_fields() {
    let party = Participant::new("Alice", "Normal", 500);

    let bytes = ParticipantCodec::encode(&party).unwrap();
    let decoded = ParticipantCodec::decode(&bytes).unwrap();

    assert_eq!(decoded, party);
    assert_eq!(decoded.category(), "normal");
}

#[test]
fn test_encoding_is_json_object_with_doc_type() {
    let bytes = ParticipantCodec::encode(&Participant::new("Bob", "TaxExempt", 7)).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["docType"], "participant");
    assert_eq!(value["name"], "Bob");
    assert_eq!(value["category"], "taxexempt");
    assert_eq!(value["balance"], 7);
}

#[test]
fn test_decode_keeps_stored_category_as_is() {
    let raw = br#"{"docType":"participant","name":"TaxAuth","category":"TaxAuth","balance":0}"#;
    let party = ParticipantCodec::decode(raw).unwrap();

    assert_eq!(party.category(), "TaxAuth");
}

#[test]
fn test_decode_without_doc_type() {
    let raw = br#"{"name":"Dave","category":"normal","balance":0}"#;
    let party = ParticipantCodec::decode(raw).unwrap();

    assert_eq!(party.doc_type(), "");
    assert_eq!(party.name(), "Dave");
    assert_eq!(party.balance(), 0);
}

#[test]
fn test_decode_missing_fields_zero_filled() {
    let raw = br#"{"docType":"participant","name":"Alice","balance":1}"#;
    let party = ParticipantCodec::decode(raw).unwrap();

    assert_eq!(party.category(), "");
    assert_eq!(party.balance(), 1);

    let empty = ParticipantCodec::decode(b"{}").unwrap();
    assert_eq!(empty, Participant::default());
}

#[test]
fn test_decode_wrong_balance_type_fails() {
    let raw = br#"{"docType":"participant","name":"Alice","category":"normal","balance":"500"}"#;
    assert!(matches!(
        ParticipantCodec::decode(raw),
        Err(CodecError::DecodeError(_))
    ));
}
