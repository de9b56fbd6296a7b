use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use num_complex::Complex;
use rustinlet::{BoundaryCondition, FourierParabolic, FourierSeries, PatchField, PatchGeometry};
use rustinlet::{integrate, DiscPatch, PulsatileInlet};

const SIZES: [usize; 4] = [128, 1024, 8192, 65536];

fn pulse(n_harmonics: usize) -> FourierParabolic {
    let q = (0..n_harmonics)
        .map(|n| Complex::new(1. / (n + 1) as f64, 0.5 / (n + 1) as f64))
        .collect();
    FourierParabolic::new(FourierSeries::new(q, 2. * std::f64::consts::PI).unwrap())
}

pub fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("FourierParabolic");
    group.significance_level(0.1).sample_size(10);
    let bc = pulse(10);
    for n in SIZES.iter() {
        let centres = Array2::<f64>::random((*n, 3), Uniform::new(-1., 1.));
        let mut normals = Array2::<f64>::zeros((*n, 3));
        normals.column_mut(2).fill(-1.);
        let patch = PatchGeometry::new(centres, normals).unwrap();

        let name = format!("Size: {}", *n);
        group.bench_function(&name, |b| b.iter(|| bc.evaluate(&patch, 0.3).unwrap()));
    }
    group.finish();
}

pub fn bench_inlet(c: &mut Criterion) {
    let mut group = c.benchmark_group("PulsatileInlet");
    group.significance_level(0.1).sample_size(10);
    for n in [8, 32, 128].iter() {
        let disc = DiscPatch::new(0.5, *n, 2 * *n, [0.; 3], [0., 0., -1.]);
        let bc: BoundaryCondition = pulse(10).into();
        let mut inlet = PulsatileInlet::new(disc, bc, 0.01);

        let name = format!("Rings: {}", *n);
        group.bench_function(&name, |b| {
            b.iter(|| {
                inlet.time = 0.;
                integrate(&mut inlet, 0.1, None).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_inlet);
criterion_main!(benches);
