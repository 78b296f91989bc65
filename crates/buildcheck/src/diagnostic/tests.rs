use super::*;
use pretty_assertions::assert_eq;

#[test]
fn mismatch_format_is_stable() {
    let site = CheckSite::new("test.cpp", 10);
    assert_eq!(
        mismatch_message(site, &3, &4),
        "check failure (test.cpp, 10): 3 != 4"
    );
}

#[test]
fn mismatch_renders_mixed_types() {
    let site = CheckSite::new("main.rs", 14);
    let lhs = String::from("aaaa");
    assert_eq!(
        mismatch_message(site, &lhs, "aaab"),
        "check failure (main.rs, 14): aaaa != aaab"
    );
}

#[test]
fn predicate_format_keeps_text_verbatim() {
    let site = CheckSite::new("main.rs", 3);
    assert_eq!(
        predicate_message(site, "res.len() == 4 && !res[0].is_empty()"),
        "check failure (main.rs, 3): res.len() == 4 && !res[0].is_empty()"
    );
}

#[test]
fn field_order_is_file_line_then_detail() {
    let msg = mismatch_message(CheckSite::new("f.rs", 7), &1.5, &2.5);
    let file = msg.find("f.rs");
    let line = msg.find('7');
    let detail = msg.find("1.5 != 2.5");
    assert!(file < line);
    assert!(line < detail);
}
