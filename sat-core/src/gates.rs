//! Boolean gate clauses: each function constrains `out` to equal a boolean
//! function of its inputs. The clauses are tight — every assignment to
//! inputs and output that contradicts the intended function falsifies
//! exactly one clause emitted here.

use crate::builder::Builder;
use crate::cnf::VarId;

/// `out = ¬a`.
pub fn not_gate(builder: &mut Builder, a: VarId, out: VarId) {
    builder.add_clause(vec![a, out], vec![]);
    builder.add_clause(vec![], vec![a, out]);
}

/// `out = a ∧ b`.
pub fn and_gate(builder: &mut Builder, a: VarId, b: VarId, out: VarId) {
    builder.add_clause(vec![a], vec![out]);
    builder.add_clause(vec![b], vec![out]);
    builder.add_clause(vec![out], vec![a, b]);
}

/// `out = a ∨ b`.
pub fn or_gate(builder: &mut Builder, a: VarId, b: VarId, out: VarId) {
    builder.add_clause(vec![out], vec![a]);
    builder.add_clause(vec![out], vec![b]);
    builder.add_clause(vec![a, b], vec![out]);
}

/// `out = a ⊕ b`.
pub fn xor_gate(builder: &mut Builder, a: VarId, b: VarId, out: VarId) {
    // (0, 0) can't produce out = 1.
    builder.add_clause(vec![a, b], vec![out]);
    // (0, 1) can't produce out = 0.
    builder.add_clause(vec![a, out], vec![b]);
    // (1, 0) can't produce out = 0.
    builder.add_clause(vec![b, out], vec![a]);
    // all three can't be true at once.
    builder.add_clause(vec![], vec![a, b, out]);
}

/// A one-bit full adder: `sum = a ⊕ b ⊕ c`, `carry_out = majority(a, b, c)`.
/// Introduces three helper variables and is composed entirely of the gates
/// above.
pub fn full_adder(builder: &mut Builder, a: VarId, b: VarId, c: VarId, sum: VarId, carry_out: VarId) {
    let fa0 = builder.new_var("fa.0");
    xor_gate(builder, a, b, fa0);
    xor_gate(builder, c, fa0, sum);

    let fa1 = builder.new_var("fa.1");
    let fa2 = builder.new_var("fa.2");
    and_gate(builder, a, b, fa1);
    and_gate(builder, c, fa0, fa2);
    or_gate(builder, fa1, fa2, carry_out);
}
