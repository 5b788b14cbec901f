//! Fixed-width unsigned integers built out of bit variables, and the
//! circuits that compose them: XOR, ripple-carry addition, cyclic bit
//! rotation, two's-complement negation, zero-equality, and unsigned
//! comparison.
//!
//! `Integer`'s bits are never mutated once allocated — every circuit below
//! either allocates a fresh `Integer` and emits clauses relating its bits to
//! its inputs' bits (`xor_of`, `sum_of`, `bit_inverse`), or — for
//! `rotate` — produces an `Integer` that shares bit-variable identities with
//! its input and emits no clauses at all.

use crate::builder::Builder;
use crate::cnf::VarId;
use crate::dpll::PartialAssignment;
use crate::gates::{and_gate, full_adder, not_gate, or_gate, xor_gate};

/// A fixed-width unsigned integer: an ordered, little-endian (bit 0 is the
/// least significant) sequence of bit variables.
#[derive(Clone, Debug)]
pub struct Integer {
    pub bits: Vec<VarId>,
}

impl Integer {
    /// Allocates `width` fresh bit variables.
    pub fn new(builder: &mut Builder, width: usize) -> Integer {
        let bits = (0..width).map(|i| builder.new_var(format!("i{}", i))).collect();
        Integer { bits }
    }

    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Decodes this integer's value under a (necessarily total, over these
    /// bits) assignment: `sum_i assignment[bits[i]] << i`.
    pub fn decode(&self, assignment: &PartialAssignment) -> u64 {
        self.bits
            .iter()
            .enumerate()
            .map(|(i, &bit)| {
                let value = assignment
                    .get(&bit)
                    .copied()
                    .unwrap_or_else(|| panic!("bit {} missing from assignment", bit));
                (value as u64) << i
            })
            .sum()
    }
}

/// The result of [`sum_of`]: the width-preserving sum plus the carry out of
/// the most significant full adder (the indicator that the true sum exceeds
/// the modulus `2^width`).
pub struct Sum {
    pub value: Integer,
    pub overflow_bit: VarId,
}

/// Bitwise XOR of two equal-width integers.
///
/// # Panics
/// Panics if `x` and `y` have different widths — a precondition violation,
/// not a recoverable error.
pub fn xor_of(builder: &mut Builder, x: &Integer, y: &Integer) -> Integer {
    assert_eq!(x.width(), y.width(), "xor_of requires equal-width operands");
    let result = Integer::new(builder, x.width());
    for i in 0..x.width() {
        xor_gate(builder, x.bits[i], y.bits[i], result.bits[i]);
    }
    result
}

/// Ripple-carry addition of two equal-width integers modulo `2^width`.
///
/// # Panics
/// Panics if `x` and `y` have different widths.
pub fn sum_of(builder: &mut Builder, x: &Integer, y: &Integer) -> Sum {
    assert_eq!(x.width(), y.width(), "sum_of requires equal-width operands");
    let width = x.width();
    let result = Integer::new(builder, width);
    let carries = Integer::new(builder, width);

    let mut previous_carry = builder.false_var;
    for i in 0..width {
        let current_carry = carries.bits[i];
        full_adder(builder, x.bits[i], y.bits[i], previous_carry, result.bits[i], current_carry);
        previous_carry = current_carry;
    }

    Sum {
        value: result,
        overflow_bit: previous_carry,
    }
}

/// Left cyclic rotation of `x` by `amount` bits (mod `x.width()`).
///
/// Pure rewiring: output bit `i` is input bit `(i - amount) mod width`, and
/// the output `Integer` shares bit-variable identities with `x` — no fresh
/// variables, no clauses.
pub fn rotate(x: &Integer, amount: usize) -> Integer {
    let width = x.width();
    if width == 0 {
        return Integer { bits: Vec::new() };
    }
    let amount = amount % width;
    let bits = (0..width)
        .map(|i| x.bits[(i + width - amount) % width])
        .collect();
    Integer { bits }
}

/// Per-bit NOT, as a fresh `Integer`.
pub fn bit_inverse(builder: &mut Builder, x: &Integer) -> Integer {
    let result = Integer::new(builder, x.width());
    for i in 0..x.width() {
        not_gate(builder, x.bits[i], result.bits[i]);
    }
    result
}

/// Two's-complement negation: `bit_inverse(x) + 1`.
pub fn integer_negate(builder: &mut Builder, x: &Integer) -> Sum {
    let inverted = bit_inverse(builder, x);
    let one = Integer::new(builder, x.width());
    integer_constant_constraint(builder, &one, 1);
    sum_of(builder, &inverted, &one)
}

/// Introduces a fresh output variable `r`, constrained so `r` holds iff
/// every bit of `x` is zero: `(x[0] ∨ … ∨ x[n-1] ∨ r)` and, for each `i`,
/// `(¬x[i] ∨ ¬r)`.
pub fn integer_equals_zero(builder: &mut Builder, x: &Integer) -> VarId {
    let result = builder.new_var("allz");
    let mut positive = x.bits.clone();
    positive.push(result);
    builder.add_clause(positive, vec![]);
    for &bit in &x.bits {
        builder.add_clause(vec![], vec![bit, result]);
    }
    result
}

/// Constrains every bit of `x` to the corresponding bit of the constant `k`.
pub fn integer_constant_constraint(builder: &mut Builder, x: &Integer, k: u64) {
    for (i, &bit) in x.bits.iter().enumerate() {
        let constant_bit = ((k >> i) & 1) as u8;
        let constant_var = builder.bools[&constant_bit];
        builder.equate(bit, constant_var);
    }
}

/// Unsigned comparison of two equal-width integers, computed via
/// two's-complement subtraction.
pub struct Comparison {
    /// `x - y` as a bit-blasted `Sum` (its `overflow_bit` is the carry out
    /// of the subtraction).
    pub subtraction: Sum,
    /// `-y`, kept around because its own overflow bit feeds into
    /// `greater_than_or_equal`.
    pub negative_y: Sum,
    /// `x ≥ y`. Equal to `subtraction.overflow_bit ∨ negative_y.overflow_bit`
    /// — both addends overflowing, or their sum overflowing, is exactly the
    /// two's-complement unsigned-subtraction indicator that `x ≥ y`. At the
    /// `y = 0` boundary `negative_y.overflow_bit` is always true (negating
    /// zero overflows), which correctly makes `x ≥ 0` always hold.
    pub greater_than_or_equal: VarId,
    pub equal: VarId,
    pub greater_than: VarId,
    pub less_than: VarId,
}

/// Builds the four comparison outputs for `x` and `y`.
///
/// # Panics
/// Panics if `x` and `y` have different widths.
pub fn compare(builder: &mut Builder, x: &Integer, y: &Integer) -> Comparison {
    assert_eq!(x.width(), y.width(), "compare requires equal-width operands");

    let negative_y = integer_negate(builder, y);
    let subtraction = sum_of(builder, x, &negative_y.value);

    let greater_than_or_equal = builder.new_var("cmp.ge");
    or_gate(builder, subtraction.overflow_bit, negative_y.overflow_bit, greater_than_or_equal);

    let equal = integer_equals_zero(builder, &subtraction.value);

    let greater_than = builder.new_var("cmp.gt");
    xor_gate(builder, greater_than_or_equal, equal, greater_than);

    let less_than = builder.new_var("cmp.lt");
    not_gate(builder, greater_than_or_equal, less_than);

    Comparison {
        subtraction,
        negative_y,
        greater_than_or_equal,
        equal,
        greater_than,
        less_than,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dpll::solve;

    fn fix_constant(builder: &mut Builder, width: usize, value: u64) -> Integer {
        let v = Integer::new(builder, width);
        integer_constant_constraint(builder, &v, value);
        v
    }

    #[test]
    fn xor_soundness_small_widths() {
        for width in 1..=4usize {
            let modulus = 1u64 << width;
            for x_val in 0..modulus {
                for y_val in 0..modulus {
                    let mut builder = Builder::new();
                    let x = fix_constant(&mut builder, width, x_val);
                    let y = fix_constant(&mut builder, width, y_val);
                    let z = xor_of(&mut builder, &x, &y);
                    let instance = builder.make_instance();
                    let model = solve(&instance).next().expect("constants always satisfiable");
                    let total = crate::enumerate::iterate_totality(&builder, &model).next().unwrap();
                    assert_eq!(z.decode(&total), x_val ^ y_val);
                }
            }
        }
    }

    #[test]
    fn addition_soundness_small_widths() {
        for width in 1..=4usize {
            let modulus = 1u64 << width;
            for x_val in 0..modulus {
                for y_val in 0..modulus {
                    let mut builder = Builder::new();
                    let x = fix_constant(&mut builder, width, x_val);
                    let y = fix_constant(&mut builder, width, y_val);
                    let sum = sum_of(&mut builder, &x, &y);
                    let instance = builder.make_instance();
                    let model = solve(&instance).next().unwrap();
                    let total = crate::enumerate::iterate_totality(&builder, &model).next().unwrap();
                    assert_eq!(sum.value.decode(&total), (x_val + y_val) % modulus);
                    let expected_overflow = x_val + y_val >= modulus;
                    assert_eq!(total[&sum.overflow_bit], expected_overflow);
                }
            }
        }
    }

    #[test]
    fn bit_rotation_soundness() {
        let width = 8usize;
        for x_val in 0..(1u64 << width) {
            for k in 0..width {
                let mut builder = Builder::new();
                let x = fix_constant(&mut builder, width, x_val);
                let rotated = rotate(&x, k);
                let instance = builder.make_instance();
                let model = solve(&instance).next().unwrap();
                let total = crate::enumerate::iterate_totality(&builder, &model).next().unwrap();
                let modulus = 1u64 << width;
                let k_mod = k % width;
                let expected = if k_mod == 0 {
                    x_val
                } else {
                    ((x_val << k_mod) | (x_val >> (width - k_mod))) % modulus
                };
                assert_eq!(rotated.decode(&total), expected, "x={} k={}", x_val, k);
            }
        }
    }

    #[test]
    fn comparison_soundness_small_widths() {
        for width in 1..=5usize {
            let modulus = 1u64 << width;
            for x_val in 0..modulus {
                for y_val in 0..modulus {
                    let mut builder = Builder::new();
                    let x = fix_constant(&mut builder, width, x_val);
                    let y = fix_constant(&mut builder, width, y_val);
                    let cmp = compare(&mut builder, &x, &y);
                    let instance = builder.make_instance();
                    let model = solve(&instance).next().unwrap();
                    let total = crate::enumerate::iterate_totality(&builder, &model).next().unwrap();

                    let lt = total[&cmp.less_than];
                    let eq = total[&cmp.equal];
                    let gt = total[&cmp.greater_than];

                    // Exactly one of {lt, eq, gt} holds.
                    assert_eq!([lt, eq, gt].iter().filter(|b| **b).count(), 1, "x={} y={}", x_val, y_val);
                    assert_eq!(lt, x_val < y_val, "x={} y={}", x_val, y_val);
                    assert_eq!(eq, x_val == y_val, "x={} y={}", x_val, y_val);
                    assert_eq!(gt, x_val > y_val, "x={} y={}", x_val, y_val);
                }
            }
        }
    }

    #[test]
    fn constant_constraint_round_trip_is_unique() {
        let width = 4;
        let mut builder = Builder::new();
        let x = fix_constant(&mut builder, width, 9);
        let instance = builder.make_instance();
        let models: Vec<_> = solve(&instance).collect();
        assert_eq!(models.len(), 1);
        let total = crate::enumerate::iterate_totality(&builder, &models[0]).next().unwrap();
        assert_eq!(x.decode(&total), 9);
    }

    #[test]
    fn equals_zero_soundness() {
        let width = 4;
        let mut builder = Builder::new();
        let x = Integer::new(&mut builder, width);
        let r = integer_equals_zero(&mut builder, &x);
        let instance = builder.make_instance();
        for model in solve(&instance) {
            for total in crate::enumerate::iterate_totality(&builder, &model) {
                let decoded = x.decode(&total);
                assert_eq!(total[&r], decoded == 0);
            }
        }
    }
}
