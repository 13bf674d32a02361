use crate::uniform::build::{build_kdindex, build_rstar, dataset};
use crate::uniform::{DIMENSION as D, HALF_WIDTH, NUM_POINTS, NUM_QUERIES};
use criterion::Criterion;
use kdindex::KdTree;
use rstar::{RTree, AABB};

pub fn benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("query_orthotope");

    // Centering each box on a stored point guarantees a non-empty result
    let points = dataset(NUM_POINTS, 0);
    let boxes = points
        .iter()
        .take(NUM_QUERIES)
        .map(|center| {
            let lower = center.map(|x| x - HALF_WIDTH);
            let upper = center.map(|x| x + HALF_WIDTH);
            (lower, upper)
        })
        .collect::<Vec<_>>();

    let kdindex = build_kdindex(&points);
    group.bench_function("kdindex", |b| {
        b.iter(|| {
            query_orthotope_kdindex(&kdindex, &boxes);
        });
    });

    let rstar = build_rstar(&points);
    group.bench_function("rstar", |b| {
        b.iter(|| {
            query_orthotope_rstar(&rstar, &boxes);
        });
    });

    group.bench_function("list", |b| {
        b.iter(|| {
            query_orthotope_list(&points, &boxes);
        });
    });
}

fn query_orthotope_kdindex(kdindex: &KdTree, boxes: &[([f64; D], [f64; D])]) {
    for (lower, upper) in boxes {
        let result = kdindex.points_in_orthotope(lower, upper).unwrap();
        assert!(!result.is_empty());
    }
}

fn query_orthotope_rstar(rstar: &RTree<[f64; D]>, boxes: &[([f64; D], [f64; D])]) {
    for (lower, upper) in boxes {
        let envelope = AABB::from_corners(*lower, *upper);
        let result = rstar.locate_in_envelope(&envelope).collect::<Vec<_>>();
        assert!(!result.is_empty());
    }
}

fn query_orthotope_list(points: &[[f64; D]], boxes: &[([f64; D], [f64; D])]) {
    for (lower, upper) in boxes {
        let result = points
            .iter()
            .filter(|point| (0..D).all(|i| lower[i] <= point[i] && point[i] <= upper[i]))
            .collect::<Vec<_>>();
        assert!(!result.is_empty());
    }
}
