//! Signal kernel performance benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lib_dsp::fourier::FourierSynthesizer;
use lib_dsp::generator::WaveformGenerator;
use lib_dsp::spectral::SpectralAnalyzer;
use lib_dsp::time_ops::time_scale;
use lib_types::series::HarmonicSeriesSpec;
use lib_types::units::{Hertz, Seconds};

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");

    // Buffer lengths on both sides of the parallel threshold
    for sample_rate in [1_000.0, 16_000.0, 44_100.0, 192_000.0].iter() {
        let gen = WaveformGenerator::new(Hertz(5.0), Seconds(1.0), Hertz(*sample_rate)).unwrap();
        let len = gen.sample_count();

        group.bench_with_input(BenchmarkId::new("square", len), &gen, |b, g| {
            b.iter(|| black_box(g).square());
        });

        let square = gen.square();
        let mut analyzer = SpectralAnalyzer::new();
        group.bench_with_input(BenchmarkId::new("spectrum", len), &square, |b, s| {
            b.iter(|| analyzer.analyze(black_box(s)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("scale_x2", len), &square, |b, s| {
            b.iter(|| time_scale(black_box(s), 2.0).unwrap());
        });

        // Only benchmark long series on small buffers
        if len <= 16_000 {
            let synth = FourierSynthesizer::new(HarmonicSeriesSpec::for_frequency(Hertz(5.0), 15, 1.0)).unwrap();
            let axis = gen.time_axis();
            group.bench_with_input(BenchmarkId::new("series_15", len), &axis, |b, t| {
                b.iter(|| synth.synthesize(black_box(t)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_kernel);
criterion_main!(benches);
