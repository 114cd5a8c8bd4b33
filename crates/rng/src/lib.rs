//! Deterministic SHAKE256-driven random source.
//!
//! `ONDRng` implements [`rand::RngCore`] and [`rand::SeedableRng`], so it can
//! be injected anywhere a `rand::Rng` is expected. Two generators built from
//! the same seed produce the same stream on every platform.

use rand::{Error, RngCore, SeedableRng};
use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

#[derive(Clone, Debug)]
pub struct ONDRng {
    state: [u8; 32],
    step: u64,
}

impl ONDRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"OND_INIT"], &mut state);
        Self { state, step: 0 }
    }

    /// Number of blocks drawn so far.
    pub fn step(&self) -> u64 {
        self.step
    }

    fn next_block(&mut self, ctx: &[u8]) -> [u8; 8] {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        let mut next_state = self.state;
        shake(&[&state, &step_bytes, b"QSIM"], &mut next_state);
        self.state = next_state;

        let mut out = [0u8; 8];
        shake(&[&self.state, ctx], &mut out);

        if self.state[0] < 16 {
            let state = self.state;
            let mut next_state = self.state;
            shake(&[&state, b"SKIP"], &mut next_state);
            self.state = next_state;
        }

        out
    }
}

impl RngCore for ONDRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        u64::from_be_bytes(self.next_block(b"QSIM_U64"))
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let block = self.next_block(b"QSIM_BYTES");
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for ONDRng {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(&seed)
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}
