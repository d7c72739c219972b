use core::hint::black_box;

use bitwise::{BitOp, bench};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

mod util;

fn bench_binary_kernels(c: &mut Criterion) {
  util::print_platform_info();
  let kernel_names = bench::available_kernels();

  for op in [BitOp::Xor, BitOp::AndNot, BitOp::Nor] {
    let mut group = c.benchmark_group(format!("kernels/{}", op.name()));
    for &(label, size) in util::CASES {
      let b = util::make_data(size, 0x5A);
      group.throughput(Throughput::Bytes(size as u64));

      for alignment in util::Alignment::ALL {
        let a = util::BenchData::aligned_copy(&util::make_data(size, 0x11), alignment);
        let mut dst = util::BenchData::aligned_copy(&vec![0u8; size], alignment);
        let param = util::bench_param_label(label, a.alignment());

        for &name in &kernel_names {
          let Some(kernel) = bench::get_kernel(name) else {
            panic!("kernel set should exist for name={name}");
          };
          group.bench_function(BenchmarkId::new(kernel.name(), &param), |bencher| {
            bencher.iter(|| black_box(kernel.apply(op, dst.as_mut_slice(), black_box(a.as_slice()), black_box(&b))));
          });
        }
      }
    }
    group.finish();
  }
}

fn bench_not_kernels(c: &mut Criterion) {
  util::print_platform_info();
  let kernel_names = bench::available_kernels();

  let mut group = c.benchmark_group("kernels/not");
  for &(label, size) in util::CASES {
    group.throughput(Throughput::Bytes(size as u64));

    for alignment in util::Alignment::ALL {
      let mut buf = util::BenchData::aligned_copy(&util::make_data(size, 0x22), alignment);
      let param = util::bench_param_label(label, buf.alignment());

      for &name in &kernel_names {
        let Some(kernel) = bench::get_kernel(name) else {
          panic!("kernel set should exist for name={name}");
        };
        group.bench_function(BenchmarkId::new(kernel.name(), &param), |bencher| {
          bencher.iter(|| black_box(kernel.not_assign(buf.as_mut_slice())));
        });
      }
    }
  }
  group.finish();
}

fn bench_dispatched(c: &mut Criterion) {
  util::print_platform_info();

  let mut group = c.benchmark_group("dispatch/xor");
  for &(label, size) in util::CASES {
    let a = util::make_data(size, 0x33);
    let b = util::make_data(size, 0x44);
    let mut dst = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function(BenchmarkId::new(bitwise::backend_name(), label), |bencher| {
      bencher.iter(|| black_box(bitwise::xor(&mut dst, black_box(&a), black_box(&b))));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_binary_kernels, bench_not_kernels, bench_dispatched);
criterion_main!(benches);
