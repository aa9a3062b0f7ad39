use indoc::indoc;

use folio_core::Colors;

use crate::DumpPrinter;
use crate::test_support::{compile_src, parse};

const SMALL: &str = indoc! {r#"
    <document title="T">
      <section title="S" id="s"><paragraph>Hi <image source="a.png">alt</image></paragraph></section>
    </document>
"#};

#[test]
fn compiled_with_positions() {
    let compiled = compile_src(SMALL);
    insta::assert_snapshot!(DumpPrinter::new(compiled.document()).positions(true).render(), @r#"
    document "T" [0] @1:1
      section #s "S" [1] @2:3
        paragraph [1.1] @2:29
          text "Hi " [1.1.1] @2:40
          image <a.png> [1.1.2] @2:43
            text "alt" [1.1.2.1] @2:65
    "#);
}

#[test]
fn numbers_can_be_hidden() {
    let compiled = compile_src(SMALL);
    insta::assert_snapshot!(DumpPrinter::new(compiled.document()).numbers(false).render(), @r#"
    document "T"
      section #s "S"
        paragraph
          text "Hi "
          image <a.png>
            text "alt"
    "#);
}

#[test]
fn parsed_trees_have_no_numbers() {
    let parsed = parse(SMALL);
    let out = DumpPrinter::new(&parsed).render();
    assert!(!out.contains('['), "{out}");
}

#[test]
fn colors_wrap_names_and_numbers() {
    let parsed = parse(r#"<document title="T"></document>"#);
    let out = DumpPrinter::new(&parsed).colors(Colors::ON).render();
    assert_eq!(out, "\x1b[34mdocument\x1b[0m \x1b[32m\"T\"\x1b[0m\n");

    let compiled = compile_src(r#"<document title="T"></document>"#);
    let out = DumpPrinter::new(compiled.document())
        .colors(Colors::ON)
        .render();
    assert!(out.contains("\x1b[33m[0]\x1b[0m"), "{out:?}");
}
