use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use garnet_parser::parse_source;
use garnet_source::Source;
use garnet_value::Env;

fn parse(source: &str) {
    let mut env = Env::new();
    let source = Source::new(source);
    let ast = parse_source(&source, &mut env).unwrap();
    ast.to_sexp(&mut env).unwrap();
}

fn bench_source(c: &mut Criterion, name: &str, source: &str) {
    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function(name, |b| b.iter(|| parse(source)));
    group.finish();
}

/// `a ? 0 : a ? 1 : ...`, each false branch one level deeper.
fn nested_ternary(c: &mut Criterion) {
    let mut source = String::new();
    for i in 0..200 {
        source.push_str(&format!("a ? {} : ", i));
    }
    source.push_str("nil");
    bench_source(c, "nested-ternary", &source);
}

/// `obj.m0(1).m1(1)...`, a left deep chain of sends.
fn send_chain(c: &mut Criterion) {
    let mut source = "obj".to_string();
    for i in 0..500 {
        source.push_str(&format!(".m{}(1)", i));
    }
    bench_source(c, "send-chain", &source);
}

/// Signed literals between locals and receiverless calls.
fn signed_arithmetic(c: &mut Criterion) {
    let mut source = "x = 1\n".to_string();
    for _i in 0..300 {
        source.push_str("x = x -1 * y +2 / z == w ? x : -3\n");
    }
    bench_source(c, "signed-arithmetic", &source);
}

fn many_definitions(c: &mut Criterion) {
    let mut source = String::new();
    for i in 0..200 {
        source.push_str(&format!(
            "def m{}(a, b)\n  x = a.foo(b) ? b : a -1\n  puts x, :done\nend\n",
            i
        ));
    }
    bench_source(c, "many-definitions", &source);
}

criterion_group!(
    benches,
    nested_ternary,
    send_chain,
    signed_arithmetic,
    many_definitions
);
criterion_main!(benches);
