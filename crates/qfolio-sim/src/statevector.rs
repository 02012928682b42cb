//! Dense statevector simulation.
//!
//! Holds the 2^n complex amplitudes of an n-qubit register and applies the
//! gate set the QAOA ansatz needs (H, Rx, Rz, CNOT) in place. Qubit i is
//! the i-th bit of the basis-state index, least significant first; the same
//! convention drives measurement decoding.
//!
//! Single-qubit gates walk the register in blocks of 2^{q+1} states: within
//! each block, index pairs a stride of 2^q apart differ only in bit q, and
//! the gate's 2×2 matrix mixes each pair independently.

use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::FRAC_1_SQRT_2;

/// The full quantum state of an n-qubit register.
pub struct Statevector {
    /// 2^n basis-state amplitudes.
    amplitudes: Vec<Complex64>,
    /// Register width n.
    num_qubits: usize,
}

impl Statevector {
    /// Start in the computational ground state |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Create the uniform superposition |+⟩^n: |0...0⟩ followed by a
    /// Hadamard on every qubit. Every amplitude ends at 2^{-n/2}.
    pub fn uniform(num_qubits: usize) -> Self {
        let mut sv = Self::new(num_qubits);
        for q in 0..num_qubits {
            sv.h(q);
        }
        sv
    }

    /// Number of qubits in the register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitude of basis state `index`.
    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes[index]
    }

    /// Measurement probability of basis state `index`.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    /// Mix every (bit q = 0, bit q = 1) amplitude pair through a 2×2 map.
    fn map_pairs<F>(&mut self, qubit: usize, mut gate: F)
    where
        F: FnMut(Complex64, Complex64) -> (Complex64, Complex64),
    {
        let stride = 1 << qubit;
        let mut base = 0;
        while base < self.amplitudes.len() {
            for lo in base..base + stride {
                let hi = lo + stride;
                let (a, b) = gate(self.amplitudes[lo], self.amplitudes[hi]);
                self.amplitudes[lo] = a;
                self.amplitudes[hi] = b;
            }
            base += stride << 1;
        }
    }

    /// Apply a Hadamard gate to `qubit`.
    pub fn h(&mut self, qubit: usize) {
        self.map_pairs(qubit, |a, b| {
            (FRAC_1_SQRT_2 * (a + b), FRAC_1_SQRT_2 * (a - b))
        });
    }

    /// Apply an X rotation `Rx(theta)` to `qubit`.
    ///
    /// Matrix: `[[cos θ/2, -i sin θ/2], [-i sin θ/2, cos θ/2]]`.
    pub fn rx(&mut self, qubit: usize, theta: f64) {
        let (sin, cos) = (theta / 2.0).sin_cos();
        let off_diag = Complex64::new(0.0, -sin);
        self.map_pairs(qubit, |a, b| {
            (cos * a + off_diag * b, off_diag * a + cos * b)
        });
    }

    /// Apply a Z rotation `Rz(theta)` to `qubit`: phase e^{∓iθ/2} by bit
    /// value.
    pub fn rz(&mut self, qubit: usize, theta: f64) {
        let up = Complex64::from_polar(1.0, theta / 2.0);
        let down = up.conj();
        let mask = 1 << qubit;
        for (index, amp) in self.amplitudes.iter_mut().enumerate() {
            *amp *= if index & mask == 0 { down } else { up };
        }
    }

    /// Apply a CNOT gate with the given control and target qubits.
    pub fn cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        // Visit each affected pair once, from its (target = 1) side.
        for index in 0..self.amplitudes.len() {
            if index & ctrl_mask != 0 && index & tgt_mask != 0 {
                self.amplitudes.swap(index ^ tgt_mask, index);
            }
        }
    }

    /// Sample a measurement outcome from the |ψ|² distribution.
    ///
    /// Seeding `rng` makes the shot sequence reproducible.
    pub fn sample_with_rng<R: Rng>(&self, rng: &mut R) -> usize {
        let mut remaining: f64 = rng.gen();
        for (index, amp) in self.amplitudes.iter().enumerate() {
            remaining -= amp.norm_sqr();
            if remaining < 0.0 {
                return index;
            }
        }
        // Rounding can leave a sliver of the unit interval uncovered.
        self.amplitudes.len() - 1
    }

    /// Sample a measurement outcome using the thread-local RNG.
    pub fn sample(&self) -> usize {
        self.sample_with_rng(&mut rand::thread_rng())
    }

    /// Decode a measurement outcome into a selection mask, bit i of the
    /// index becoming entry i.
    pub fn outcome_to_bits(&self, outcome: usize) -> Vec<bool> {
        (0..self.num_qubits)
            .map(|i| (outcome >> i) & 1 == 1)
            .collect()
    }
}
