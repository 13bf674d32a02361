use crate::uniform::build::{build_kdindex, build_rstar, dataset, queries};
use crate::uniform::{DIMENSION as D, NUM_POINTS};
use criterion::Criterion;
use kdindex::KdTree;
use ordered_float::OrderedFloat;
use rstar::RTree;

pub fn benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("query");

    let points = dataset(NUM_POINTS, 0);
    let queries = queries();

    let kdindex = build_kdindex(&points);
    group.bench_function("kdindex", |b| {
        b.iter(|| {
            query_kdindex(&kdindex, &queries);
        });
    });

    let rstar = build_rstar(&points);
    group.bench_function("rstar", |b| {
        b.iter(|| {
            query_rstar(&rstar, &queries);
        });
    });

    group.bench_function("list", |b| {
        b.iter(|| {
            query_list(&points, &queries);
        });
    });
}

fn query_kdindex(kdindex: &KdTree, queries: &[[f64; D]]) {
    for query in queries {
        let nearest = kdindex.nearest_neighbor(query).unwrap();
        assert_eq!(nearest.len(), D);
    }
}

fn query_rstar(rstar: &RTree<[f64; D]>, queries: &[[f64; D]]) {
    for query in queries {
        let nearest = rstar.nearest_neighbor(query);
        assert!(nearest.is_some());
    }
}

fn query_list(points: &[[f64; D]], queries: &[[f64; D]]) {
    for query in queries {
        let nearest = points.iter().min_by_key(|point| {
            let dist = query
                .iter()
                .zip(point.iter())
                .map(|(a, b)| (a - b).powi(2))
                .sum::<f64>();
            OrderedFloat(dist)
        });
        assert!(nearest.is_some());
    }
}
