use super::*;
use futures::executor::block_on;

#[test]
fn resolve_delivers_answer_to_armed_receiver() {
    let slot = ResponseSlot::default();
    let rx = slot.arm();
    assert!(slot.is_pending());
    assert!(slot.resolve(true));
    assert_eq!(block_on(rx), Ok(true));
    assert!(!slot.is_pending());
}

#[test]
fn resolve_without_pending_question_is_noop() {
    let slot = ResponseSlot::default();
    assert!(!slot.resolve(true));
}

#[test]
fn rearming_declines_the_previous_question() {
    let slot = ResponseSlot::default();
    let first = slot.arm();
    let second = slot.arm();
    assert_eq!(block_on(first), Ok(false));
    assert!(slot.resolve(true));
    assert_eq!(block_on(second), Ok(true));
}

#[test]
fn clones_share_the_pending_question() {
    let slot = ResponseSlot::default();
    let handle = slot.clone();
    let rx = slot.arm();
    assert!(handle.resolve(false));
    assert_eq!(block_on(rx), Ok(false));
}
