// Bitset de ancho fijo sobre palabras u64, indexado por el índice denso de
// cada vértice. Se usa para visitados, dominados y vecindarios cerrados.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSet {
    words: Vec<u64>,
    len: usize,
}

impl BitSet {
    pub fn new(len: usize) -> Self {
        BitSet { words: vec![0u64; len.div_ceil(64)], len }
    }

    /// Bitset con todos los índices `0..len` encendidos.
    pub fn full(len: usize) -> Self {
        let mut bs = BitSet::new(len);
        for (w, word) in bs.words.iter_mut().enumerate() {
            let remaining = len - w * 64;
            *word = if remaining >= 64 { u64::MAX } else { (1u64 << remaining) - 1 };
        }
        bs
    }

    #[inline]
    pub fn capacity(&self) -> usize { self.len }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        (self.words[idx / 64] >> (idx % 64)) & 1 == 1
    }

    #[inline]
    pub fn insert(&mut self, idx: usize) {
        self.words[idx / 64] |= 1u64 << (idx % 64);
    }

    #[inline]
    pub fn remove(&mut self, idx: usize) {
        self.words[idx / 64] &= !(1u64 << (idx % 64));
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool { self.words.iter().all(|w| *w == 0) }

    pub fn clear(&mut self) {
        for w in self.words.iter_mut() { *w = 0; }
    }

    pub fn union_with(&mut self, other: &BitSet) {
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) { *a |= *b; }
    }

    /// Cantidad de índices de `other` que todavía no están en `self`.
    pub fn count_missing_from(&self, other: &BitSet) -> usize {
        self.words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| (b & !a).count_ones() as usize)
            .sum()
    }

    /// Primer índice apagado, o `None` si el conjunto está lleno.
    pub fn first_unset(&self) -> Option<usize> {
        for (w, word) in self.words.iter().enumerate() {
            if *word != u64::MAX {
                let idx = w * 64 + (!*word).trailing_zeros() as usize;
                return if idx < self.len { Some(idx) } else { None };
            }
        }
        None
    }

    // Itera sobre los índices con bit 1. Llama f(idx) y si retorna false corta.
    pub fn for_each_bit<F: FnMut(usize) -> bool>(&self, mut f: F) {
        for (word_idx, &word) in self.words.iter().enumerate() {
            let mut w = word;
            while w != 0 {
                let tz = w.trailing_zeros() as usize;
                if !f(word_idx * 64 + tz) { return; }
                w &= w - 1;
            }
        }
    }

    pub fn to_vec(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.count());
        self.for_each_bit(|i| { out.push(i); true });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_respects_len_across_words() {
        let bs = BitSet::full(70);
        assert_eq!(bs.count(), 70);
        assert!(bs.contains(69));
        assert_eq!(bs.first_unset(), None);
    }

    #[test]
    fn first_unset_and_missing_count() {
        let mut a = BitSet::new(130);
        for i in 0..65 { a.insert(i); }
        assert_eq!(a.first_unset(), Some(65));

        let mut b = BitSet::new(130);
        b.insert(3);
        b.insert(100);
        b.insert(129);
        assert_eq!(a.count_missing_from(&b), 2);

        a.union_with(&b);
        assert_eq!(a.count(), 67);
        a.remove(3);
        assert!(!a.contains(3));
        assert_eq!(a.first_unset(), Some(3));
    }

    #[test]
    fn for_each_bit_visits_in_order_and_can_stop() {
        let mut bs = BitSet::new(200);
        for i in [5, 64, 150, 199] { bs.insert(i); }
        assert_eq!(bs.to_vec(), vec![5, 64, 150, 199]);

        let mut seen = Vec::new();
        bs.for_each_bit(|i| { seen.push(i); i < 64 });
        assert_eq!(seen, vec![5, 64]);
    }
}
