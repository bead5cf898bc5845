use stylesheet::{format, parse, FormatConfig};

struct Case {
    name: &'static str,
    input: &'static str,
    expected: &'static str,
}

#[test]
fn golden_format_corpus() {
    let cases = [
        Case {
            name: "minified_rule",
            input: "a{color:#FFF;background:rgb(0,0,0)}",
            expected: "a {\n  color: #FFF;\n  background: rgb(0, 0, 0);\n}\n",
        },
        Case {
            name: "selector_list_and_whitespace",
            input: "h1 ,\n  h2   >  span{ margin :  0   auto ; }",
            expected: "h1, h2 > span {\n  margin: 0 auto;\n}\n",
        },
        Case {
            name: "nested_media",
            input: "@media screen and (max-width:600px){body{padding:0}}",
            expected: "@media screen and (max-width:600px) {\n  body {\n    padding: 0;\n  }\n}\n",
        },
        Case {
            name: "font_face_without_params",
            input: "@font-face{font-family:\"My  Font\";src:url(a.woff2)}",
            expected: "@font-face {\n  font-family: \"My  Font\";\n  src: url(a.woff2);\n}\n",
        },
        Case {
            name: "comments_move_out_of_values",
            input: "/* top */a{color:#fff /* brand */;margin:0/**/auto}",
            expected: "/* top */\na {\n  color: #fff;\n  margin: 0 auto;\n}\n",
        },
        Case {
            name: "quotes_are_normalized",
            input: "a{content:'it\\'s'}",
            expected: "a {\n  content: \"it's\";\n}\n",
        },
        Case {
            name: "empty_document",
            input: "  \n\t ",
            expected: "",
        },
    ];

    let cfg = FormatConfig::default();
    for case in cases {
        let out = format(case.input, &cfg)
            .unwrap_or_else(|e| panic!("case {} failed: {e}", case.name));
        assert_eq!(out, case.expected, "output mismatch for {}", case.name);

        // Formatting must be a fixed point.
        let again = format(&out, &cfg).expect("reformat");
        assert_eq!(again, out, "not idempotent for {}", case.name);
    }
}

#[test]
fn declaration_count_matches_walk() {
    let sheet = parse(
        "a { top: 0; left: 0; } @supports (display: grid) { b { display: grid; } } @import url(x.css);",
    )
    .expect("parse");
    assert_eq!(sheet.declaration_count(), 3);
}
