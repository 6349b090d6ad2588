use criterion::{criterion_group, criterion_main, Criterion};

use thales_construct::build_problem;
use thales_engine::{run_loop, Matcher};
use thales_lang::{Problem, Rule, DEFAULT_RULES};

const ORTHOCENTER_AUX: &str = "a b c = triangle a b c; \
     d = on_tline d b a c, on_tline d c a b; \
     e = on_line e a c, on_line e b d \
     ? perp a d b c";

fn bench_saturation(c: &mut Criterion) {
    let problem = Problem::from_text(ORTHOCENTER_AUX).unwrap();
    let rules = Rule::parse_text(DEFAULT_RULES).unwrap();
    c.bench_function("orthocenter_aux_saturation", |b| {
        b.iter(|| {
            let mut proof = build_problem(&problem, 998_244_353, 100).unwrap();
            let infos = run_loop(&mut proof, &mut Matcher::new(None), &rules, None).unwrap();
            assert!(infos.success);
        })
    });
}

criterion_group!(benches, bench_saturation);
criterion_main!(benches);
