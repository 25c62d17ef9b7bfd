use minimark::{markdown_to_html, Converter, InlineStyleSheet};
use rstest::rstest;

#[rstest]
#[case("# text", "<h1>text</h1>\n")]
#[case("###### text", "<h6>text</h6>\n")]
#[case("# *text*1MIDASHI1", "<h1><em>text</em>1MIDASHI1</h1>\n")]
#[case("## - text *-*", "<h2>- text <em>-</em></h2>\n")]
#[case("*x*", "<p><em>x</em></p>\n")]
#[case("**x**", "<p><strong>x</strong></p>\n")]
#[case("***x***", "<p><strong><em>x</em></strong></p>\n")]
#[case("`x`", "<p><code>x</code></p>\n")]
#[case("`a``b`c", "<p><code>a</code><code>b</code>c</p>\n")]
#[case("~~x~~", "<p><s>x</s></p>\n")]
#[case("---\n", "<hr/>\n")]
#[case(
    "- a\n- b\n- c\n",
    "<p>\n<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>\n</p>\n"
)]
#[case("a < b & c", "<p>a < b & c</p>\n")]
fn converts_fragment(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(markdown_to_html(input), expected);
}

#[rstest]
#[case("*open")]
#[case("~~open")]
#[case("`open")]
#[case("```\nopen\n")]
fn strict_rejects_unterminated(#[case] input: &str) {
    let converter = Converter::new(InlineStyleSheet::default()).strict(true);
    assert!(converter.convert_str(input).is_err(), "input={:?}", input);
}

#[test]
fn code_fence_keeps_double_backquotes() {
    let input = "```go\nfunc main() {\n    fmt.Printf(\"``Hello, world!``\")\n}\n```\n";
    let expected = "<pre class=\"language-go\">\n<code>\nfunc main() {\n    fmt.Printf(\"``Hello, world!``\")\n}\n</code>\n</pre>\n";
    assert_eq!(markdown_to_html(input), expected);
}

#[test]
fn full_page_inlines_stylesheet() {
    let converter = Converter::new(InlineStyleSheet::new("p { margin: 0; }\n"));
    let html = converter.convert_str("hello").unwrap();
    assert_eq!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n<style>\np { margin: 0; }\n</style>\n</head>\n<body for=\"html-export\" class=\"body\">\n<p>hello</p>\n</body>\n</html>\n"
    );
}

#[test]
fn document_with_every_block() {
    let input = "# Title\n\nSome *text* and `code`.\n\n- one\n- ~~two~~\n\n---\n\n```sh\necho hi\n```\n";
    let expected = "<h1>Title</h1>\n<p>Some <em>text</em> and <code>code</code>.</p>\n<p>\n<ul>\n<li>one</li>\n<li><s>two</s></li>\n</ul>\n</p>\n<hr/>\n<pre class=\"language-sh\">\n<code>\necho hi\n</code>\n</pre>\n";
    assert_eq!(markdown_to_html(input), expected);
}
