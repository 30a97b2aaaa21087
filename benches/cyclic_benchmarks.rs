use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cyclix::{
    cyclic::{ExhaustiveSearch, FactorizationSearch},
    gf2::{self, Gf2Polynomial},
    CodeParameters, CyclicEncoder, GeneratorSearch, Message,
};

fn polynomial_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("gf2");

    for n in [15usize, 63, 255, 1023] {
        let target = Gf2Polynomial::x_pow_n_minus_one(n);
        let divisor = Gf2Polynomial::from_u64(0b1000011);

        group.bench_with_input(BenchmarkId::new("div_rem", n), &n, |b, _| {
            b.iter(|| gf2::div_rem(&target, &divisor))
        });

        group.bench_with_input(BenchmarkId::new("mul", n), &n, |b, _| {
            b.iter(|| target.mul(&divisor))
        });
    }

    group.finish();
}

fn search_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator_search");
    let factoring = FactorizationSearch::default();

    for (n, k) in [(7usize, 4usize), (15, 7), (23, 12), (31, 21)] {
        let params = CodeParameters::new(n, k).unwrap();
        let label = params.to_string();

        group.bench_with_input(BenchmarkId::new("exhaustive", &label), &params, |b, &params| {
            b.iter(|| ExhaustiveSearch::default().find(params))
        });

        group.bench_with_input(BenchmarkId::new("factorization", &label), &params, |b, &params| {
            b.iter(|| factoring.find(params))
        });
    }

    group.finish();
}

fn encoding_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    for (n, k) in [(7usize, 4usize), (23, 12), (31, 26)] {
        let params = CodeParameters::new(n, k).unwrap();
        let encoder = CyclicEncoder::new(ExhaustiveSearch::default().find(params).unwrap());
        let bits: String = (0..k).map(|i| if i % 3 == 0 { '1' } else { '0' }).collect();
        let message = Message::new(&bits, k).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", params.to_string()), &message, |b, message| {
            b.iter(|| encoder.encode(message))
        });
    }

    group.finish();
}

criterion_group!(benches, polynomial_benchmarks, search_benchmarks, encoding_benchmarks);
criterion_main!(benches);
