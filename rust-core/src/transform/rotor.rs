//! Precomputed twiddle factors
//!
//! Entry k holds the base rotor exp(-i*2*pi*k/N). A sample index is folded in
//! by the consumer through [`RotorTable::rotor_for`].

use num_complex::Complex64;
use std::f64::consts::PI;
use std::ops::Index;

/// Read-only table of N unit rotors
#[derive(Debug, Clone, PartialEq)]
pub struct RotorTable {
    rotors: Box<[Complex64]>,
}

impl RotorTable {
    /// Build the table for working length `size`
    pub fn new(size: usize) -> Self {
        let base_freq = 2.0 * PI / size as f64;
        let rotors = (0..size)
            .map(|k| {
                let (sin, cos) = (base_freq * k as f64).sin_cos();
                Complex64::new(cos, -sin)
            })
            .collect();

        Self { rotors }
    }

    /// Rotor for harmonic `k` at sample index `n`, i.e. exp(-i*2*pi*k*n/N)
    pub fn rotor_for(&self, k: usize, n: usize) -> Complex64 {
        let size = self.rotors.len();
        self.rotors[(k % size) * (n % size) % size]
    }

    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.rotors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Complex64> {
        self.rotors.iter()
    }

    pub fn to_vec(&self) -> Vec<Complex64> {
        self.rotors.to_vec()
    }
}

impl Index<usize> for RotorTable {
    type Output = Complex64;

    fn index(&self, k: usize) -> &Complex64 {
        &self.rotors[k]
    }
}
