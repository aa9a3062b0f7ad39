use crate::InternalFault;
use crate::numbering::Numbering;

#[test]
fn starts_at_zero() {
    let numbering = Numbering::new();
    assert_eq!(numbering.depth(), 1);
    insta::assert_snapshot!(numbering.current(), @"0");
}

#[test]
fn increment_push_pop() {
    let mut numbering = Numbering::new();
    numbering.increment().unwrap();
    numbering.increment().unwrap();
    numbering.push();
    numbering.increment().unwrap();
    numbering.push();
    numbering.increment().unwrap();
    numbering.increment().unwrap();
    numbering.increment().unwrap();
    numbering.increment().unwrap();

    insta::assert_snapshot!(numbering.current(), @"2.1.4");
    assert_eq!(numbering.depth(), 3);

    numbering.pop().unwrap();
    insta::assert_snapshot!(numbering.current(), @"2.1");
    numbering.pop().unwrap();
    insta::assert_snapshot!(numbering.current(), @"2");
}

#[test]
fn push_starts_a_fresh_level() {
    let mut numbering = Numbering::new();
    numbering.increment().unwrap();
    numbering.push();
    insta::assert_snapshot!(numbering.current(), @"1.0");
    numbering.increment().unwrap();
    insta::assert_snapshot!(numbering.current(), @"1.1");
}

#[test]
fn pop_last_component_is_fault() {
    let mut numbering = Numbering::new();
    assert_eq!(numbering.pop(), Err(InternalFault::NumberingUnderflow));
    assert_eq!(numbering.depth(), 1);
}

#[test]
fn pop_after_balanced_pushes_is_fault() {
    let mut numbering = Numbering::new();
    numbering.push();
    numbering.push();
    numbering.pop().unwrap();
    numbering.pop().unwrap();
    assert_eq!(numbering.pop(), Err(InternalFault::NumberingUnderflow));
}
