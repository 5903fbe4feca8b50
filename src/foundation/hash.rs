use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5ea7_3a9c_0ffe_e11d;

/// 128-bit digest of everything that feeds one repaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct InputFingerprint {
    pub(crate) hi: u64,
    pub(crate) lo: u64,
}

/// Order-sensitive hasher with a fixed seed, stable across runs.
pub(crate) struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    pub(crate) fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    pub(crate) fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_usize(&mut self, v: usize) {
        self.write_u64(v as u64);
    }

    pub(crate) fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    pub(crate) fn finish(self) -> InputFingerprint {
        let v = self.inner.digest128();
        InputFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}
