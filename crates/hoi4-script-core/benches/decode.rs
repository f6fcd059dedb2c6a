use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use hoi4_script_core::decode;
use std::hint::black_box;

/// Build a unit file with `n` sub-units shaped like the game's own.
fn unit_file(n: usize) -> String {
    let mut src = String::from("sub_units = {\n");
    for i in 0..n {
        src.push_str(&format!(
            "\tunit_{i} = {{\n\t\tsprite = infantry\n\t\tmap_icon_category = infantry # icon\n\t\tpriority = {i}\n\t\tweight = 0.5\n\t\tcategories = {{ category_front_line category_army }}\n\t\tneed = {{ infantry_equipment = 100 }}\n\t}}\n"
        ));
    }
    src.push_str("}\n");
    src
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for n in [10, 1_000] {
        let src = unit_file(n);
        group.throughput(Throughput::Bytes(src.len() as u64));
        group.bench_function(format!("sub_units_{n}"), |b| {
            b.iter(|| decode(black_box(&src)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
