//! Index arithmetic between packed "other qudit" counters and full register
//! indices.
//!
//! A register index is read as an `n`-digit numeral in base `d`, digit `q`
//! holding the value of qudit `q`. Iterating a packed counter over
//! `0..d^(n-1)` and inserting a digit at the target position visits every
//! basis state with that qudit fixed, exactly once.

/// Place values and digit insertion for a fixed base and qudit count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indexer {
    base: usize,
    // places[q] = base^q, one extra entry so places[size] = dim
    places: Vec<usize>,
}

impl Indexer {
    /// The caller guarantees `base^size` does not overflow.
    pub fn new(base: usize, size: usize) -> Self {
        let mut places = Vec::with_capacity(size + 1);
        let mut p = 1usize;
        for _ in 0..size {
            places.push(p);
            p *= base;
        }
        places.push(p);
        Self { base, places }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    pub fn size(&self) -> usize {
        self.places.len() - 1
    }

    /// `base^size`.
    pub fn dim(&self) -> usize {
        self.places[self.size()]
    }

    /// `base^position`.
    #[inline]
    pub fn place(&self, position: usize) -> usize {
        self.places[position]
    }

    /// Number of packed combinations when `fixed` qudits are held.
    pub fn combinations(&self, fixed: usize) -> usize {
        self.places[self.size() - fixed]
    }

    /// Insert `digit` at `position`, shifting digits at `position..` one place
    /// up.
    #[inline]
    pub fn insert(&self, packed: usize, position: usize, digit: usize) -> usize {
        let place = self.places[position];
        let back = packed % place;
        (packed - back) * self.base + digit * place + back
    }

    /// Index with both `a` and `b` set to 0; insertion runs lowest position
    /// first.
    #[inline]
    pub fn pair_template(&self, packed: usize, a: usize, b: usize) -> usize {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        self.insert(self.insert(packed, lo, 0), hi, 0)
    }

    #[inline]
    pub fn pair_index(
        &self,
        template: usize,
        a: usize,
        b: usize,
        digit_a: usize,
        digit_b: usize,
    ) -> usize {
        template + digit_a * self.places[a] + digit_b * self.places[b]
    }

    /// Value of qudit `position` in basis state `index`.
    #[inline]
    pub fn digit(&self, index: usize, position: usize) -> usize {
        (index / self.places[position]) % self.base
    }

    /// Digits of `index`, most significant (qudit `size-1`) first.
    pub fn label(&self, index: usize) -> String {
        (0..self.size())
            .rev()
            .map(|q| {
                std::char::from_digit(self.digit(index, q) as u32, 36).unwrap_or('?')
            })
            .collect()
    }
}
