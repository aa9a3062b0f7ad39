use crate::ContentNumber;

fn num(components: &[u64]) -> ContentNumber {
    ContentNumber::new(components.to_vec()).unwrap()
}

#[test]
fn empty_is_refused() {
    assert!(ContentNumber::new(Vec::new()).is_none());
}

#[test]
fn display_is_dotted() {
    insta::assert_snapshot!(num(&[2, 1, 4]), @"2.1.4");
    insta::assert_snapshot!(num(&[0]), @"0");
}

#[test]
fn parent_drops_last_component() {
    assert_eq!(num(&[2, 1, 4]).parent(), Some(num(&[2, 1])));
    assert_eq!(num(&[3]).parent(), None);
}

#[test]
fn ordering_follows_document_order() {
    let mut numbers = vec![num(&[2]), num(&[1, 2]), num(&[1]), num(&[1, 10]), num(&[1, 2, 1])];
    numbers.sort();
    let rendered: Vec<String> = numbers.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["1", "1.2", "1.2.1", "1.10", "2"]);
}

#[test]
fn prefix_relation() {
    assert!(num(&[1, 2, 3]).starts_with(&num(&[1, 2])));
    assert!(!num(&[1, 3]).starts_with(&num(&[1, 2])));
    assert_eq!(num(&[1, 2, 3]).last(), 3);
    assert_eq!(num(&[1, 2, 3]).depth(), 3);
}
