//! Token dumps.

use cruckc::commands::dump_tokens;
use pretty_assertions::assert_eq;

#[test]
fn dump_lists_tokens_with_positions() {
    let mut out = Vec::new();
    dump_tokens("var i = 0;\n  print \"i=\" + i;", &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let rows: Vec<&str> = text.lines().map(str::trim_end).collect();
    assert_eq!(
        rows,
        vec![
            "1:1      var        var",
            "1:5      identifier i",
            "1:7      =          =",
            "1:9      integer    0",
            "1:10     ;          ;",
            "2:3      print      print",
            "2:9      string     \"i=\"",
            "2:14     +          +",
            "2:16     identifier i",
            "2:17     ;          ;",
        ]
    );
}
