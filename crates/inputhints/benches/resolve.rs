use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use inputhints::config::parse_config;
use inputhints::{DeviceState, HintResolver};

const ACTIONS: [&str; 6] = ["Move", "Look", "Fire", "Jump", "Interact", "Pause Menu"];

fn bench_resolve(c: &mut Criterion) {
    // Use the sample hints file from the repository root
    let yaml: &str = include_str!("../../../hints.yaml");
    let config = parse_config(yaml).expect("config should parse");

    let mut devices = DeviceState::new();
    devices.set_used_device(Some("/XInputControllerWindows"));
    let mut resolver = HintResolver::new(config, &mut devices);

    c.bench_function("resolve_cached", |b| {
        b.iter(|| {
            for key in ACTIONS {
                black_box(resolver.resolve_action(black_box(key)));
            }
        })
    });

    let devices_cycle = ["/XInputControllerWindows", "/Keyboard", "/DualSenseGamepadHID"];
    let mut turn = 0usize;
    c.bench_function("resolve_after_device_change", |b| {
        b.iter(|| {
            turn = (turn + 1) % devices_cycle.len();
            devices.set_used_device(Some(devices_cycle[turn]));
            for key in ACTIONS {
                black_box(resolver.resolve_action(black_box(key)));
            }
        })
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
