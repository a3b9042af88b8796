// Criterion benchmarks for Shoe Fit

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use shoe_fit::core::{
    geometry::{estimate_foot_perimeter, estimate_shoe_perimeter},
    resolve_shoe_dimensions, score_fit, Recommender,
};
use shoe_fit::models::{FootMeasurement, ShoeMeasurement, ShoeRecord, ShoeType};

fn create_shoe(id: usize) -> ShoeRecord {
    ShoeRecord {
        id: id as u64,
        company: "Brand".to_string(),
        model: format!("Model {}", id),
        gender: Some("U".to_string()),
        us_size: 7.0 + (id % 13) as f64 * 0.5,
        width_category: Some(["N", "D", "W"][id % 3].to_string()),
        function: Some(["casual", "running", "hiking", "work"][id % 4].to_string()),
        price_usd: 60.0 + (id % 50) as f64 * 3.0,
        product_url: None,
        is_active: true,
        shoe_image_url: None,
        insole_length: if id % 2 == 0 { Some(9.8 + (id % 20) as f64 * 0.1) } else { None },
        insole_width: if id % 2 == 0 { Some(3.5 + (id % 6) as f64 * 0.1) } else { None },
        insole_area: None,
        insole_perimeter: None,
    }
}

fn bench_estimators(c: &mut Criterion) {
    c.bench_function("estimate_perimeter", |b| {
        b.iter(|| {
            estimate_foot_perimeter(black_box(10.5), black_box(4.0))
                + estimate_shoe_perimeter(black_box(10.7), black_box(4.1))
        });
    });
}

fn bench_single_score(c: &mut Criterion) {
    let foot = FootMeasurement::new(10.5, 3.8).with_area(26.25).with_perimeter(25.5);
    let shoe = ShoeMeasurement::new(10.5, 3.8).with_area(28.125).with_perimeter(27.0);

    c.bench_function("score_fit", |b| {
        b.iter(|| score_fit(black_box(&foot), black_box(&shoe), black_box(ShoeType::Running)));
    });

    let partial = create_shoe(1);
    c.bench_function("resolve_shoe_dimensions", |b| {
        b.iter(|| resolve_shoe_dimensions(black_box(&partial)));
    });
}

fn bench_catalog_pass(c: &mut Criterion) {
    let recommender = Recommender::with_defaults();
    let foot = FootMeasurement::new(10.5, 4.0);

    let mut group = c.benchmark_group("recommend");

    for catalog_size in [10, 50, 100, 500].iter() {
        let catalog: Vec<ShoeRecord> = (0..*catalog_size).map(create_shoe).collect();

        group.bench_with_input(
            BenchmarkId::new("recommend", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| {
                    recommender.recommend(
                        black_box(&foot),
                        black_box(catalog.clone()),
                        black_box(Some(20)),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_estimators,
    bench_single_score,
    bench_catalog_pass
);

criterion_main!(benches);
