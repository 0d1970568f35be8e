use garnet::{parse, Session};
use insta::assert_snapshot;

fn sexp(source: &str) -> String {
    parse(source).unwrap().to_string()
}

#[test]
fn smoke_empty() {
    assert_snapshot!(sexp(""), @"s(:block)");
    assert_snapshot!(sexp("# nothing here\n\n"), @"s(:block)");
}

#[test]
fn smoke_puts() {
    assert_snapshot!(
        sexp(r#"puts "hello world""#),
        @r#"s(:block, s(:call, nil, :puts, s(:str, "hello world")))"#
    );
}

#[test]
fn fib() {
    let source = r#"
def fib(n)
  n < 2 ? n : fib(n - 1) + fib(n - 2)
end

puts fib(10)
"#;
    assert_snapshot!(
        sexp(source),
        @"s(:block, s(:defn, :fib, s(:args, :n), s(:if, s(:call, s(:lvar, :n), :<, s(:lit, 2)), s(:lvar, :n), s(:call, s(:call, nil, :fib, s(:call, s(:lvar, :n), :-, s(:lit, 1))), :+, s(:call, nil, :fib, s(:call, s(:lvar, :n), :-, s(:lit, 2)))))), s(:call, nil, :puts, s(:call, nil, :fib, s(:lit, 10))))"
    );
}

#[test]
fn locals_and_sends() {
    let source = "
list = nil
list.push 1, :two
size = list.size
size == 2 ? 'ok' : list.inspect
";
    assert_snapshot!(
        sexp(source),
        @r#"s(:block, s(:lasgn, :list, s(:nil)), s(:call, s(:lvar, :list), :push, s(:lit, 1), s(:sym, :two)), s(:lasgn, :size, s(:call, s(:lvar, :list), :size)), s(:if, s(:call, s(:lvar, :size), :==, s(:lit, 2)), s(:str, "ok"), s(:call, s(:lvar, :list), :inspect)))"#
    );
}

#[test]
fn mixed_precedence() {
    assert_snapshot!(
        sexp("x = 1 + 2 * 3 - 4 / 2 <= 5"),
        @"s(:block, s(:lasgn, :x, s(:call, s(:call, s(:call, s(:lit, 1), :+, s(:call, s(:lit, 2), :*, s(:lit, 3))), :-, s(:call, s(:lit, 4), :/, s(:lit, 2))), :<=, s(:lit, 5))))"
    );
}

#[test]
fn syntax_errors() {
    for source in &["1 +", "foo(1,", "def", "x = ", "a ? b", "(1; 2", "1 ) 2", "@"] {
        let error = parse(source).unwrap_err();
        assert!(error.is_syntax(), "{:?} gave {}", source, error);
    }
}

#[test]
fn repl_session() {
    let mut session = Session::new();
    let lines = ["a = 2", "b = a * 3", "c(a, b)", "b = b +", "a; b; d"];
    let results: Vec<String> = lines
        .iter()
        .map(|line| match session.parse_to_sexp(line) {
            Ok(sexp) => sexp.to_string(),
            Err(err) => format!("error: {}", err),
        })
        .collect();
    assert_snapshot!(results.join("\n"), @r###"
    s(:block, s(:lasgn, :a, s(:lit, 2)))
    s(:block, s(:lasgn, :b, s(:call, s(:lvar, :a), :*, s(:lit, 3))))
    s(:block, s(:call, nil, :c, s(:lvar, :a), s(:lvar, :b)))
    error: unexpected end-of-input; expected expression at line 1, column 8
    s(:block, s(:lvar, :a), s(:lvar, :b), s(:call, nil, :d))
    "###);
    assert_eq!(session.locals().len(), 2);
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let mut session = Session::new();
    let source = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
    assert!(session.parse(&source).unwrap_err().is_syntax());
    // the session is still usable afterwards
    assert_snapshot!(session.parse_to_sexp("x = (1)").unwrap().to_string(), @"s(:block, s(:lasgn, :x, s(:lit, 1)))");
}
