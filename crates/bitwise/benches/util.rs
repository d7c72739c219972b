use std::sync::Once;

pub const CASES: &[(&str, usize)] = &[
  ("xs", 64),
  ("s", 256),
  ("m", 4usize.strict_mul(1024)),
  ("l", 64usize.strict_mul(1024)),
  ("xl", 1024usize.strict_mul(1024)),
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Alignment {
  /// A regular `Vec<u8>` buffer (baseline).
  Vec,
  /// A slice starting at a 16B-aligned address.
  A16,
  /// A slice starting one byte past a 16B-aligned address.
  Off1,
}

impl Alignment {
  pub const ALL: [Self; 3] = [Self::Vec, Self::A16, Self::Off1];

  #[inline]
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::Vec => "vec",
      Self::A16 => "a16",
      Self::Off1 => "a16+1",
    }
  }

  /// Offset from a 16B-aligned address, or `None` for the allocator's choice.
  #[inline]
  #[must_use]
  pub const fn skew(self) -> Option<usize> {
    match self {
      Self::Vec => None,
      Self::A16 => Some(0),
      Self::Off1 => Some(1),
    }
  }
}

/// One operand buffer placed at a chosen alignment.
pub struct BenchData {
  alignment: Alignment,
  backing: Vec<u8>,
  offset: usize,
  len: usize,
}

impl BenchData {
  #[inline]
  #[must_use]
  pub fn from_vec(data: Vec<u8>) -> Self {
    let len = data.len();
    Self {
      alignment: Alignment::Vec,
      backing: data,
      offset: 0,
      len,
    }
  }

  #[must_use]
  pub fn aligned_copy(src: &[u8], alignment: Alignment) -> Self {
    let Some(skew) = alignment.skew() else {
      return Self::from_vec(src.to_vec());
    };

    let len = src.len();
    let mut backing = vec![0u8; len.strict_add(32)];

    let base = backing.as_ptr() as usize;
    let offset = (16 - base % 16) % 16 + skew;
    backing[offset..offset.strict_add(len)].copy_from_slice(src);

    Self {
      alignment,
      backing,
      offset,
      len,
    }
  }

  #[inline]
  #[must_use]
  pub fn alignment(&self) -> Alignment {
    self.alignment
  }

  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[u8] {
    &self.backing[self.offset..self.offset.strict_add(self.len)]
  }

  #[inline]
  #[must_use]
  pub fn as_mut_slice(&mut self) -> &mut [u8] {
    let end = self.offset.strict_add(self.len);
    &mut self.backing[self.offset..end]
  }
}

#[must_use]
pub fn make_data(len: usize, seed: u8) -> Vec<u8> {
  (0..len)
    .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed) ^ i.strict_shr(8) as u8)
    .collect()
}

#[inline]
#[must_use]
pub fn bench_param_label(size_label: &str, alignment: Alignment) -> String {
  format!("{size_label}@{}", alignment.label())
}

/// Print platform detection info once at benchmark start.
pub fn print_platform_info() {
  static ONCE: Once = Once::new();
  ONCE.call_once(|| {
    eprintln!("╔══════════════════════════════════════════════════════════════╗");
    eprintln!("║                   PLATFORM DETECTION INFO                    ║");
    eprintln!("╠══════════════════════════════════════════════════════════════╣");
    eprintln!("║ {}", bitwise::DispatchInfo::current());
    eprintln!("║ Available kernels: {}", bitwise::bench::available_kernels().join(", "));
    eprintln!("║ Bench alignments: vec, a16, a16+1");
    eprintln!("╚══════════════════════════════════════════════════════════════╝");
  });
}
