use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use inputhints_config::parse_config;

fn bench_parse_config(c: &mut Criterion) {
    // Use the sample hints file from the repository root
    let yaml: &str = include_str!("../../../hints.yaml");

    c.bench_function("config_parse_hints", |b| {
        b.iter(|| {
            let input = black_box(yaml);
            let config = parse_config(input).expect("config should parse");
            black_box(config);
        })
    });
}

criterion_group!(benches, bench_parse_config);
criterion_main!(benches);
