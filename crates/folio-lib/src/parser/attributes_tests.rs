use indoc::indoc;

use crate::test_support::{dump_parsed, parse, parse_err};

fn in_section(body: &str) -> String {
    format!(r#"<document title="T"><section title="S">{body}</section></document>"#)
}

#[test]
fn missing_title() {
    let err = parse_err(r#"<document title="T"><section></section></document>"#);
    insta::assert_snapshot!(err, @"1:21: `section` requires attribute `title`");
}

#[test]
fn missing_document_title() {
    let err = parse_err("<document></document>");
    insta::assert_snapshot!(err, @"1:1: `document` requires attribute `title`");
}

#[test]
fn footnote_requires_id() {
    let err = parse_err(&in_section("<footnote>x</footnote>"));
    insta::assert_snapshot!(err, @"1:40: `footnote` requires attribute `id`");
}

#[test]
fn invalid_block_id() {
    let err = parse_err(r#"<document title="T"><section title="A" id="a b"/></document>"#);
    insta::assert_snapshot!(err, @r#"1:21: invalid value "a b" for attribute `id` of `section`: contains ' ' at offset 1"#);
}

#[test]
fn invalid_type_name() {
    let err = parse_err(&in_section(r#"<paragraph type="">x</paragraph>"#));
    insta::assert_snapshot!(err, @r#"1:40: invalid value "" for attribute `type` of `paragraph`: must not be empty"#);
}

#[test]
fn link_target_must_be_block_id() {
    let err = parse_err(&in_section(
        r#"<paragraph><link target="http://x">x</link></paragraph>"#,
    ));
    insta::assert_snapshot!(err, @r#"1:51: invalid value "http://x" for attribute `target` of `link`: contains ':' at offset 4"#);
}

#[test]
fn toc_values() {
    let doc = parse(indoc! {r#"
        <document title="T">
          <section title="A" toc="true"/>
          <section title="B" toc="false"/>
          <section title="C"/>
        </document>
    "#});
    let flags: Vec<bool> = doc.sections.iter().map(|s| s.table_of_contents).collect();
    assert_eq!(flags, [true, false, true]);

    let err = parse_err(r#"<document title="T"><section title="A" toc="no"/></document>"#);
    insta::assert_snapshot!(err, @r#"1:21: invalid value "no" for attribute `toc` of `section`: expected `true` or `false`"#);
}

#[test]
fn image_size() {
    let input = in_section(r#"<paragraph><image source="a.png" width="640" height="480">alt</image></paragraph>"#);
    insta::assert_snapshot!(dump_parsed(&input), @r#"
    document "T"
      section "S"
        paragraph
          image <a.png> 640x480
            text "alt"
    "#);
}

#[test]
fn image_width_without_height() {
    let err = parse_err(&in_section(
        r#"<paragraph><image source="a.png" width="640"/></paragraph>"#,
    ));
    insta::assert_snapshot!(err, @"1:51: `image` requires attribute `height`");
}

#[test]
fn image_size_not_numeric() {
    let err = parse_err(&in_section(
        r#"<paragraph><image source="a.png" width="wide" height="1"/></paragraph>"#,
    ));
    insta::assert_snapshot!(err, @r#"1:51: invalid value "wide" for attribute `width` of `image`: invalid digit found in string"#);
}

#[test]
fn image_requires_source() {
    let err = parse_err(&in_section("<paragraph><image/></paragraph>"));
    insta::assert_snapshot!(err, @"1:51: `image` requires attribute `source`");
}

#[test]
fn unknown_attribute() {
    let err = parse_err(&in_section(r#"<paragraph title="x">y</paragraph>"#));
    insta::assert_snapshot!(err, @"1:40: `paragraph` does not take attribute `title`");
}
