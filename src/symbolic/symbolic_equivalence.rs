//! # Symbolic Equivalence Module
//!
//! Decides whether two expressions denote the same function. Verification of an
//! antiderivative reduces to this: differentiate the result and compare against
//! the integrand.
//!
//! Two layers. First a structural pass: both sides are expanded into flat sums,
//! every term is reduced to a numeric coefficient and a canonical factor key,
//! and coefficients are balanced per key. When the structural pass cannot decide
//! (trig identities, alternate function forms) a numeric pass samples both
//! expressions on a grid of points and compares values within tolerance.

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_simplify::{flatten_add, flatten_mul};
use itertools::Itertools;
use std::collections::HashMap;

const STRUCTURAL_TOLERANCE: f64 = 1e-9;
const NUMERIC_TOLERANCE: f64 = 1e-8;

/// base points for the numeric pass, chosen to dodge the usual singularities
/// at 0 and ±1 while staying inside the arcsin/arccos domain for some of them
const SAMPLE_POINTS: [f64; 8] = [0.31, 0.67, -0.43, 0.89, -0.76, 1.37, 2.21, -1.58];

/// minimum number of points where both sides evaluate to finite values
const MIN_VALID_SAMPLES: usize = 4;

impl Expr {
    /// True when `self` and `other` denote the same function of their variables.
    pub fn equivalent(&self, other: &Expr) -> bool {
        let lhs = self.simplify();
        let rhs = other.simplify();
        if lhs == rhs {
            return true;
        }
        if structurally_equivalent(&lhs, &rhs) {
            return true;
        }
        numerically_equivalent(&lhs, &rhs)
    }

    /// Distribute products over sums and push constant divisors into
    /// coefficients, repeated to a fixpoint.
    pub fn expand(&self) -> Expr {
        let mut current = self.clone();
        // each pass strictly reduces the number of Mul-over-Add nestings,
        // the cap is a safety net for degenerate inputs
        for _ in 0..64 {
            let next = expand_once(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    /// Evaluate at the given variable values without panicking. `None` when a
    /// variable is unbound, a subexpression is an unevaluated integral, or the
    /// value is not finite.
    pub(crate) fn eval_safe(&self, values: &HashMap<String, f64>) -> Option<f64> {
        let result = match self {
            Expr::Var(name) => *values.get(name)?,
            Expr::Const(c) => *c,
            Expr::Add(l, r) => l.eval_safe(values)? + r.eval_safe(values)?,
            Expr::Sub(l, r) => l.eval_safe(values)? - r.eval_safe(values)?,
            Expr::Mul(l, r) => l.eval_safe(values)? * r.eval_safe(values)?,
            Expr::Div(l, r) => l.eval_safe(values)? / r.eval_safe(values)?,
            Expr::Pow(l, r) => l.eval_safe(values)?.powf(r.eval_safe(values)?),
            Expr::Exp(e) => e.eval_safe(values)?.exp(),
            Expr::Ln(e) => e.eval_safe(values)?.ln(),
            Expr::Sqrt(e) => e.eval_safe(values)?.sqrt(),
            Expr::sin(e) => e.eval_safe(values)?.sin(),
            Expr::cos(e) => e.eval_safe(values)?.cos(),
            Expr::tg(e) => e.eval_safe(values)?.tan(),
            Expr::arcsin(e) => e.eval_safe(values)?.asin(),
            Expr::arccos(e) => e.eval_safe(values)?.acos(),
            Expr::arctg(e) => e.eval_safe(values)?.atan(),
            Expr::sh(e) => e.eval_safe(values)?.sinh(),
            Expr::ch(e) => e.eval_safe(values)?.cosh(),
            Expr::th(e) => e.eval_safe(values)?.tanh(),
            Expr::IntegralOf(_, _) => return None,
        };
        if result.is_finite() { Some(result) } else { None }
    }
}

fn expand_once(expr: &Expr) -> Expr {
    match expr {
        Expr::Add(l, r) => Expr::Add(Box::new(expand_once(l)), Box::new(expand_once(r))),
        Expr::Sub(l, r) => Expr::Sub(Box::new(expand_once(l)), Box::new(expand_once(r))),
        Expr::Mul(l, r) => {
            let l = expand_once(l);
            let r = expand_once(r);
            match (l, r) {
                // (a + b) * c = a*c + b*c
                (Expr::Add(a, b), c) => {
                    Expr::Add(Box::new(*a * c.clone()), Box::new(*b * c))
                }
                (Expr::Sub(a, b), c) => {
                    Expr::Sub(Box::new(*a * c.clone()), Box::new(*b * c))
                }
                (c, Expr::Add(a, b)) => {
                    Expr::Add(Box::new(c.clone() * *a), Box::new(c * *b))
                }
                (c, Expr::Sub(a, b)) => {
                    Expr::Sub(Box::new(c.clone() * *a), Box::new(c * *b))
                }
                (l, r) => Expr::Mul(Box::new(l), Box::new(r)),
            }
        }
        Expr::Div(l, r) => {
            let l = expand_once(l);
            let r = expand_once(r);
            match (l, r) {
                // (a + b)/c = a/c + b/c
                (Expr::Add(a, b), c) => {
                    Expr::Add(Box::new(*a / c.clone()), Box::new(*b / c))
                }
                (Expr::Sub(a, b), c) => {
                    Expr::Sub(Box::new(*a / c.clone()), Box::new(*b / c))
                }
                // f/c = (1/c) * f for numeric c
                (l, Expr::Const(c)) if c != 0.0 => {
                    Expr::Mul(Box::new(Expr::Const(1.0 / c)), Box::new(l))
                }
                (l, r) => Expr::Div(Box::new(l), Box::new(r)),
            }
        }
        _ => expr.clone(),
    }
}

/// Reduce a product term to a numeric coefficient and a canonical key built
/// from the sorted display forms of the non-constant factors.
fn term_signature(term: &Expr) -> (f64, String) {
    let mut factors = Vec::new();
    flatten_mul(term, &mut factors);
    let mut coeff = 1.0;
    let mut keys: Vec<String> = Vec::new();
    for factor in factors {
        match factor {
            Expr::Const(c) => coeff *= c,
            Expr::Div(num, den) => {
                let (num_coeff, num_key) = term_signature(&num);
                coeff *= num_coeff;
                if !num_key.is_empty() {
                    keys.push(num_key);
                }
                match den.as_ref() {
                    Expr::Const(c) if *c != 0.0 => coeff /= c,
                    _ => keys.push(format!("1/({})", den.simplify())),
                }
            }
            other => keys.push(format!("{}", other.simplify())),
        }
    }
    let key = keys.into_iter().sorted().join("*");
    (coeff, key)
}

fn structurally_equivalent(lhs: &Expr, rhs: &Expr) -> bool {
    let mut balance: HashMap<String, f64> = HashMap::new();
    let mut terms = Vec::new();
    flatten_add(&lhs.expand(), &mut terms);
    for term in &terms {
        let (coeff, key) = term_signature(term);
        *balance.entry(key).or_insert(0.0) += coeff;
    }
    terms.clear();
    flatten_add(&rhs.expand(), &mut terms);
    for term in &terms {
        let (coeff, key) = term_signature(term);
        *balance.entry(key).or_insert(0.0) -= coeff;
    }
    balance.values().all(|v| v.abs() < STRUCTURAL_TOLERANCE)
}

fn numerically_equivalent(lhs: &Expr, rhs: &Expr) -> bool {
    if lhs.contains_unevaluated_integral() || rhs.contains_unevaluated_integral() {
        return false;
    }
    let mut variables = lhs.all_arguments_are_variables();
    for v in rhs.all_arguments_are_variables() {
        if !variables.contains(&v) {
            variables.push(v);
        }
    }
    variables.sort();

    let mut valid = 0;
    for (i, base) in SAMPLE_POINTS.iter().enumerate() {
        let mut values = HashMap::new();
        for (j, var) in variables.iter().enumerate() {
            // shift per variable so multivariate expressions are not sampled
            // on the diagonal only
            values.insert(var.clone(), base + 0.17 * (i + j) as f64 * 0.1);
        }
        let (a, b) = match (lhs.eval_safe(&values), rhs.eval_safe(&values)) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };
        if (a - b).abs() > NUMERIC_TOLERANCE * (1.0 + a.abs() + b.abs()) {
            return false;
        }
        valid += 1;
    }
    valid >= MIN_VALID_SAMPLES
}
