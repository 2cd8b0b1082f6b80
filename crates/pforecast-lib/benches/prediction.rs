use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use pforecast_lib::{get_optimum_warp, Point, Scenario, ShipList, ShipPredictor};
use std::hint::black_box;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

static SHIP_LIST: Lazy<ShipList> =
    Lazy::new(|| ShipList::from_dir(&fixtures_dir().join("shiplist")).expect("fixture loads"));
static SCENARIO: Lazy<Scenario> = Lazy::new(|| {
    Scenario::from_path(&fixtures_dir().join("scenario.json")).expect("fixture loads")
});

fn benchmark_prediction(c: &mut Criterion) {
    let ctx = SCENARIO.context(&SHIP_LIST);

    c.bench_function("movement_emerald_to_vega", |b| {
        b.iter(|| {
            let mut predictor = ShipPredictor::new(ctx, 1);
            predictor.compute_movement();
            black_box((predictor.num_turns(), predictor.movement_fuel_used()))
        });
    });

    c.bench_function("movement_long_haul", |b| {
        b.iter(|| {
            let mut predictor = ShipPredictor::new(ctx, 1);
            predictor.set_waypoint(Point::new(2900, 2900));
            predictor.compute_movement();
            black_box(predictor.position())
        });
    });

    c.bench_function("optimum_warp_emerald", |b| {
        b.iter(|| {
            black_box(get_optimum_warp(
                &ctx,
                1,
                Point::new(2000, 2000),
                Point::new(2500, 2000),
            ))
        });
    });

    c.bench_function("alchemy_turn_merlin", |b| {
        b.iter(|| {
            let mut predictor = ShipPredictor::new(ctx, 3);
            predictor.compute_turn();
            black_box(predictor.cargo().tritanium)
        });
    });
}

criterion_group!(benches, benchmark_prediction);
criterion_main!(benches);
