use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tabletop_math::{Matrix, Transform};

fn test_matrix(size: usize) -> Matrix {
    let rows = (0..size)
        .map(|i| {
            (0..size)
                .map(|j| if i == j { 4.0 } else { (i + 2 * j) as f64 * 0.1 })
                .collect()
        })
        .collect();
    Matrix::from_rows(rows).unwrap()
}

fn determinant(c: &mut Criterion) {
    let m = test_matrix(6);
    c.bench_function("determinant_6x6", |b| {
        b.iter(|| black_box(&m).determinant().unwrap());
    });
}

fn inverse(c: &mut Criterion) {
    let m = test_matrix(4);
    c.bench_function("inverse_4x4", |b| b.iter(|| black_box(&m).inverse().unwrap()));
}

fn transform_css(c: &mut Criterion) {
    let mut transform = Transform::new();
    transform.rotate(0.4, 2.1, -1.3);
    transform.translate(0.0, 0.0, 12.0);
    c.bench_function("transform_css", |b| b.iter(|| black_box(&transform).css()));
}

criterion_group!(benches, determinant, inverse, transform_css);
criterion_main!(benches);
