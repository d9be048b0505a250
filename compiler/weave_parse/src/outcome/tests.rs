use super::*;
use crate::ParseErrorKind;

fn failure() -> ParseError {
    ParseError::new(ParseErrorKind::InvalidType, 3)
}

#[test]
fn into_result_maps_decline_to_none() {
    assert_eq!(ParseOutcome::Matched(1).into_result(), Ok(Some(1)));
    assert_eq!(ParseOutcome::<i32>::Declined.into_result(), Ok(None));
    assert_eq!(ParseOutcome::<i32>::Failed(failure()).into_result(), Err(failure()));
}

#[test]
fn map_preserves_variant() {
    assert_eq!(ParseOutcome::Matched(2).map(|n| n * 2), ParseOutcome::Matched(4));
    assert_eq!(ParseOutcome::<i32>::Declined.map(|n| n * 2), ParseOutcome::Declined);
    assert!(ParseOutcome::<i32>::Failed(failure()).map(|n| n * 2).is_failed());
}

#[test]
fn from_result() {
    let ok: ParseOutcome<u8> = Ok(7).into();
    assert!(ok.is_matched());
    let err: ParseOutcome<u8> = Err(failure()).into();
    assert_eq!(err, ParseOutcome::Failed(failure()));
}
