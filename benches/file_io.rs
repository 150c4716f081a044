//! Benchmarks for loading and saving files through the app

use addon_installer::{AddonEntry, AddonsManifest, App, MemoryFileSystem};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn manifest_with(count: usize) -> AddonsManifest {
    let mut manifest = AddonsManifest::default();
    for i in 0..count {
        manifest.addons.insert(
            format!("addon_{i}"),
            AddonEntry::new(format!("https://example.com/addon_{i}.git")),
        );
    }
    manifest
}

fn memory_app(files: Vec<(&str, String)>) -> App {
    App::with_file_system(".", Arc::new(MemoryFileSystem::with_files(files)))
}

fn bench_load_manifest(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_file");

    for count in [1, 50] {
        let json = manifest_with(count).to_json().unwrap();
        let app = memory_app(vec![("addons.json", json)]);
        group.bench_function(format!("manifest_{count}_addons"), |b| {
            b.iter(|| {
                let manifest: AddonsManifest = app.load_file(black_box("addons.json")).unwrap();
                black_box(manifest);
            });
        });
    }

    group.bench_function("missing_file", |b| {
        let app = memory_app(Vec::new());
        b.iter(|| {
            let result = app.load_file::<AddonsManifest>(black_box("addons.json"));
            black_box(result.is_err());
        });
    });

    group.finish();
}

fn bench_save_manifest(c: &mut Criterion) {
    let json = manifest_with(10).to_json().unwrap();

    c.bench_function("save_file", |b| {
        let app = memory_app(Vec::new());
        b.iter(|| app.save_file(black_box("addons.json"), black_box(&json)).unwrap());
    });
}

criterion_group!(benches, bench_load_manifest, bench_save_manifest);
criterion_main!(benches);
