use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chip8::prelude::*;

/// Draws a random maze pattern forever.
#[rustfmt::skip]
const MAZE: &[u8] = &[
    0xA2, 0x1E, // LD I, 21E
    0xC2, 0x01, // RND v2, 01
    0x32, 0x01, // SE v2, 01
    0xA2, 0x1A, // LD I, 21A
    0xD0, 0x14, // DRW v0, v1, 4
    0x70, 0x04, // ADD v0, 4
    0x30, 0x40, // SE v0, 40
    0x12, 0x00, // JP 200
    0x60, 0x00, // LD v0, 0
    0x71, 0x04, // ADD v1, 4
    0x31, 0x20, // SE v1, 20
    0x12, 0x00, // JP 200
    0x12, 0x18, // JP 218
    0x80, 0x40, 0x20, 0x10, // sprite \
    0x20, 0x40, 0x80, 0x10, // sprite /
];

fn criterion_benchmark(c: &mut Criterion) {
    {
        let mut vm = Chip8Vm::new(Chip8Conf {
            rng_seed: Some(1),
            ..Chip8Conf::default()
        });
        vm.load_bytecode(MAZE).unwrap();

        c.bench_function("maze bytecode", |b| {
            b.iter(|| {
                let step_count = black_box(1000_usize);
                black_box(vm.run_steps(step_count))
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
