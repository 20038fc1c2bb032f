//! Parametric solver for a single linear Diophantine equation
//!
//! Solves `a0·x0 + ... + a(n-1)·x(n-1) = b0·y0 + ... + b(m-1)·y(m-1)` where
//! the `x_i` are integer unknowns and the `y_j` are formal basis symbols.
//! The result is a most general solution: every constrained unknown is an
//! integer combination of `k` fresh parameters and the `y_j`.
//!
//! ## Algorithm
//!
//! Euclidean elimination. Pick the unknown with the smallest nonzero
//! |coefficient| as pivot and rewrite it as a fresh combination of the
//! others, which reduces every other coefficient modulo the pivot. Each
//! round strictly shrinks the coefficients, so eventually a single nonzero
//! coefficient `g = ±gcd(a)` remains. The equation is solvable iff `g`
//! divides every right-hand coefficient; the surviving unknowns become the
//! fresh parameters of the solution family.
//!
//! An expression matrix tracks every original unknown as a combination of
//! the current unknowns and is updated column-wise at each step, so no
//! separate back-substitution pass is needed.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use thiserror::Error;

/// Why a Diophantine equation has no integer solution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The gcd of the unknown coefficients does not divide a right-hand
    /// coefficient. A gcd of zero means the left-hand side vanishes while
    /// the right-hand side does not.
    #[error("gcd {gcd} does not divide right-hand coefficient {coeff}")]
    Indivisible {
        /// Gcd of the unknown coefficients (non-negative).
        gcd: BigInt,
        /// The offending right-hand coefficient.
        coeff: BigInt,
    },
}

/// The value of one bound unknown: an integer combination of the fresh
/// parameters and the right-hand symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearBinding {
    /// Position of the unknown in the input coefficient slice.
    pub index: usize,
    /// Coefficients over the fresh parameters `p0..p(k-1)`.
    pub factors: Vec<BigInt>,
    /// Coefficients over the right-hand symbols `y0..y(m-1)`.
    pub constants: Vec<BigInt>,
}

/// A most general parametric solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSolution {
    /// Number of fresh parameters; every binding's `factors` has this length.
    pub params: usize,
    /// Bindings in ascending `index` order. Unknown positions absent from
    /// the list are unconstrained; the caller gives each its own fresh
    /// parameter.
    pub bindings: Vec<LinearBinding>,
}

/// Euclidean division: `a = q·b + r` with `0 <= r < |b|`.
fn div_rem_euclidean(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let (mut q, mut r) = a.div_rem(b);
    if r.is_negative() {
        if b.is_positive() {
            r += b;
            q -= BigInt::one();
        } else {
            r -= b;
            q += BigInt::one();
        }
    }
    (q, r)
}

/// Solve `Σ lhs[i]·x_i = Σ rhs[j]·y_j` over the integers.
///
/// Deterministic: identical inputs give identical solutions, including the
/// parameter count and the order of bindings.
///
/// # Errors
///
/// Returns [`SolveError::Indivisible`] when the gcd of `lhs` fails to
/// divide some coefficient of `rhs`.
pub fn solve(lhs: &[BigInt], rhs: &[BigInt]) -> Result<LinearSolution, SolveError> {
    let n = lhs.len();
    let debug = std::env::var("AGUM_DEBUG_SOLVE").is_ok();

    let mut coeffs: Vec<BigInt> = lhs.to_vec();
    // expr[i][j] is the coefficient of current unknown j in the expression
    // of original unknown i; starts as the identity matrix.
    let mut expr: Vec<Vec<BigInt>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i == j { BigInt::one() } else { BigInt::zero() })
                .collect()
        })
        .collect();

    loop {
        let nonzero: Vec<usize> = (0..n).filter(|&j| !coeffs[j].is_zero()).collect();

        match nonzero.len() {
            0 => {
                // 0 = rhs is solvable only when the right side vanishes too.
                if let Some(coeff) = rhs.iter().find(|coeff| !coeff.is_zero()) {
                    return Err(SolveError::Indivisible {
                        gcd: BigInt::zero(),
                        coeff: coeff.clone(),
                    });
                }
                return Ok(LinearSolution {
                    params: 0,
                    bindings: Vec::new(),
                });
            }
            1 => return finish(lhs, rhs, &coeffs, &expr, nonzero[0]),
            _ => {}
        }

        // Pivot: smallest |coefficient|, ties to the smallest index.
        let pivot = nonzero
            .iter()
            .copied()
            .min_by_key(|&j| (coeffs[j].abs(), j))
            .expect("nonzero coefficient positions are non-empty");
        let pivot_coeff = coeffs[pivot].clone();

        if debug {
            eprintln!("[SOLVE] pivot {pivot} with coefficient {pivot_coeff}, coefficients {coeffs:?}");
        }

        // Replace the pivot unknown u_p by t = u_p + Σ q_j·u_j, i.e.
        // u_p = t - Σ q_j·u_j, which reduces every other coefficient to its
        // remainder modulo the pivot coefficient.
        for &j in &nonzero {
            if j == pivot {
                continue;
            }
            let (q, r) = div_rem_euclidean(&coeffs[j], &pivot_coeff);
            if !q.is_zero() {
                for row in expr.iter_mut() {
                    let delta = &row[pivot] * &q;
                    row[j] -= delta;
                }
            }
            coeffs[j] = r;
        }
    }
}

/// A single nonzero coefficient `g` is left at `pivot`: divide it into the
/// right-hand side and read the solution family out of the expression
/// matrix.
fn finish(
    lhs: &[BigInt],
    rhs: &[BigInt],
    coeffs: &[BigInt],
    expr: &[Vec<BigInt>],
    pivot: usize,
) -> Result<LinearSolution, SolveError> {
    let g = &coeffs[pivot];
    for coeff in rhs {
        if !(coeff % g).is_zero() {
            return Err(SolveError::Indivisible {
                gcd: g.abs(),
                coeff: coeff.clone(),
            });
        }
    }

    // Every surviving column other than the pivot is a fresh parameter.
    // Columns of unknowns whose input coefficient was zero are untouched
    // identity columns; those unknowns stay unconstrained and are omitted.
    let params: Vec<usize> = (0..lhs.len())
        .filter(|&j| j != pivot && !lhs[j].is_zero())
        .collect();

    let mut bindings = Vec::new();
    for (i, input_coeff) in lhs.iter().enumerate() {
        if input_coeff.is_zero() {
            continue;
        }
        let factors: Vec<BigInt> = params.iter().map(|&j| expr[i][j].clone()).collect();
        let constants: Vec<BigInt> = rhs.iter().map(|coeff| &expr[i][pivot] * (coeff / g)).collect();
        bindings.push(LinearBinding {
            index: i,
            factors,
            constants,
        });
    }

    Ok(LinearSolution {
        params: params.len(),
        bindings,
    })
}
