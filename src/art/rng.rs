//! Mulberry32, a tiny seeded PRNG.
//!
//! The arithmetic is reproduced literally with wrapping 32-bit operations.
//! Any "simplification" changes the draw sequence and therefore every image
//! ever generated from an existing title.

/// Seeded generator. One instance per generation; never shared.
#[derive(Clone, Debug)]
pub struct Mulberry32 {
    state: u32,
}

const INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform draw in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// `floor(next_f64() * n)`, an index in `0..n`. `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        ((self.next_f64() * n as f64).floor() as usize).min(n - 1)
    }

    /// One draw; true with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_sequence() {
        let mut rng = Mulberry32::new(0x2a3b_4c5d);
        let draws: Vec<u32> = (0..5).map(|_| rng.next_u32()).collect();
        assert_eq!(
            draws,
            vec![0xada8_191c, 0x68f1_f586, 0x55ee_59d8, 0x5e1b_029a, 0xbe67_90d6]
        );
    }

    #[test]
    fn floats_are_the_scaled_integers() {
        let mut rng = Mulberry32::new(0x2a3b_4c5d);
        let first = rng.next_f64();
        assert_eq!(first, f64::from(0xada8_191c_u32) / 4_294_967_296.0);
        assert!((0.0..1.0).contains(&first));
    }

    #[test]
    fn zero_seed_is_valid() {
        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_u32(), 0x4434_b462);
        assert_eq!(rng.next_u32(), 0x0015_9c37);
        assert_eq!(rng.next_u32(), 0x3928_5b08);
    }

    #[test]
    fn independent_instances_do_not_interfere() {
        let mut a = Mulberry32::new(99);
        let mut b = Mulberry32::new(99);
        a.next_u32();
        let from_a = a.next_u32();
        b.next_u32();
        assert_eq!(b.next_u32(), from_a);
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = Mulberry32::new(7);
        for _ in 0..1000 {
            assert!(rng.below(12) < 12);
        }
        assert_eq!(rng.below(1), 0);
    }
}
