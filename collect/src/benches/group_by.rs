use super::utils::records;
use criterion::{black_box, criterion_group, Criterion};
use declarative_collect::{
    key::KeySource,
    map::{new_immutable_map, new_map},
    reducer::group_by,
    Fold,
};

fn bench_group_by(c: &mut Criterion) {
    for items in [1_000, 10_000, 100_000] {
        let records = records(items);
        for immutable in [false, true] {
            let label = format!(
                "{}/items={} immutable={}",
                module_path!(),
                items,
                immutable
            );
            c.bench_function(&label, |b| {
                b.iter(|| {
                    let seed = if immutable {
                        new_immutable_map()
                    } else {
                        new_map()
                    };
                    let groups = records
                        .fold_with(seed, group_by(KeySource::property("group")))
                        .unwrap();
                    black_box(groups);
                });
            });
        }
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_group_by
}
