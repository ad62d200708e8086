//! # Symbolic Integration Module
//!
//! Rule based indefinite integration. The rule set covers linearity, the power rule,
//! the standard transcendental antiderivatives with linear inner expressions,
//! logarithmic integration (f'/f), simple inverse trig forms and recursive
//! integration by parts for x^n against exponentials, trig and the logarithm.
//!
//! A miss is not a failure: when no rule applies the integrand is wrapped into
//! `Expr::IntegralOf` and returned as a valid, unevaluated result. `Err` is reserved
//! for runaway recursion.

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_simplify::{flatten_add, flatten_mul};
use std::f64::consts::E;

/// hard ceiling on rule recursion, so a pathological integrand terminates
/// instead of recursing without bound
const MAX_INTEGRATION_DEPTH: usize = 64;

/// highest x^n degree attacked with repeated integration by parts
const MAX_BY_PARTS_DEGREE: f64 = 32.0;

impl Expr {
    /// SYMBOLIC INTEGRATION

    /// Main integration method - integrates with respect to a variable.
    /// Returns the indefinite integral (without constant of integration).
    ///
    /// An integrand outside the rule set comes back as `Expr::IntegralOf`;
    /// `Err` only signals that the recursion depth limit was hit.
    pub fn integrate(&self, var: &str) -> Result<Expr, String> {
        self.integrate_depth(var, 0)
    }

    fn integrate_depth(&self, var: &str, depth: usize) -> Result<Expr, String> {
        if depth > MAX_INTEGRATION_DEPTH {
            return Err(format!(
                "integration recursion depth {} exceeded on: {}",
                MAX_INTEGRATION_DEPTH, self
            ));
        }
        match self {
            // ∫ c dx = c*x
            Expr::Const(c) => Ok(Expr::Const(*c) * Expr::Var(var.to_string())),

            // ∫ x dx = x²/2, ∫ y dx = y*x (if y ≠ x)
            Expr::Var(name) => {
                if name == var {
                    Ok(Expr::Pow(
                        Box::new(Expr::Var(var.to_string())),
                        Box::new(Expr::Const(2.0)),
                    ) / Expr::Const(2.0))
                } else {
                    Ok(Expr::Var(name.clone()) * Expr::Var(var.to_string()))
                }
            }

            // ∫ (f + g) dx = ∫ f dx + ∫ g dx
            Expr::Add(lhs, rhs) => {
                let lhs_int = lhs.integrate_depth(var, depth + 1)?;
                let rhs_int = rhs.integrate_depth(var, depth + 1)?;
                Ok(lhs_int + rhs_int)
            }

            // ∫ (f - g) dx = ∫ f dx - ∫ g dx
            Expr::Sub(lhs, rhs) => {
                let lhs_int = lhs.integrate_depth(var, depth + 1)?;
                let rhs_int = rhs.integrate_depth(var, depth + 1)?;
                Ok(lhs_int - rhs_int)
            }

            Expr::Mul(lhs, rhs) => self.integrate_multiplication(lhs, rhs, var, depth),

            Expr::Div(lhs, rhs) => self.integrate_division(lhs, rhs, var, depth),

            // ∫ x^n dx = x^(n+1)/(n+1) for n ≠ -1, plus c^x and (ax+b)^n forms
            Expr::Pow(base, exp) => self.integrate_power(base, exp, var),

            // ∫ e^u dx for linear u
            Expr::Exp(expr) => self.integrate_exponential(expr, var),

            // ∫ ln(u) dx - integration by parts
            Expr::Ln(expr) => self.integrate_logarithm(expr, var),

            // ∫ sqrt(u) dx for linear u
            Expr::Sqrt(expr) => self.integrate_sqrt(expr, var),

            Expr::sin(expr) => self.integrate_sin(expr, var),
            Expr::cos(expr) => self.integrate_cos(expr, var),
            Expr::tg(expr) => self.integrate_tan(expr, var),

            Expr::arcsin(expr) => self.integrate_arcsin(expr, var),
            Expr::arccos(expr) => self.integrate_arccos(expr, var),
            Expr::arctg(expr) => self.integrate_arctan(expr, var),

            Expr::sh(expr) => self.integrate_sinh(expr, var),
            Expr::ch(expr) => self.integrate_cosh(expr, var),
            Expr::th(expr) => self.integrate_tanh(expr, var),

            // a nested unresolved integral stays unresolved
            Expr::IntegralOf(_, _) => Ok(self.unevaluated(var)),
        }
    }

    /// the rule-miss answer: the integrand wrapped as an unevaluated integral
    fn unevaluated(&self, var: &str) -> Expr {
        Expr::IntegralOf(Box::new(self.clone()), var.to_string())
    }

    /// Enhanced multiplication integration that tries different strategies
    fn integrate_multiplication(
        &self,
        lhs: &Expr,
        rhs: &Expr,
        var: &str,
        depth: usize,
    ) -> Result<Expr, String> {
        // Check if one factor is constant
        if !lhs.contains_variable(var) {
            let rhs_int = rhs.integrate_depth(var, depth + 1)?;
            return Ok(lhs.clone() * rhs_int);
        }

        if !rhs.contains_variable(var) {
            let lhs_int = lhs.integrate_depth(var, depth + 1)?;
            return Ok(rhs.clone() * lhs_int);
        }

        // Pull all constant factors out of a flattened product: 2*x*e^x = 2 * (x*e^x)
        let mut factors = Vec::new();
        flatten_mul(self, &mut factors);
        let (const_factors, var_factors): (Vec<Expr>, Vec<Expr>) = factors
            .into_iter()
            .partition(|f| !f.contains_variable(var));
        if !const_factors.is_empty() && var_factors.len() >= 2 {
            let constant = rebuild_product(const_factors);
            let rest = rebuild_product(var_factors);
            let rest_int = rest.integrate_depth(var, depth + 1)?;
            return Ok(constant * rest_int);
        }

        // A sum factor distributes: (2x + 1)*e^x integrates term by term
        if matches!(lhs, Expr::Add(_, _) | Expr::Sub(_, _))
            || matches!(rhs, Expr::Add(_, _) | Expr::Sub(_, _))
        {
            let expanded = self.expand();
            if &expanded != self {
                return expanded.integrate_depth(var, depth + 1);
            }
        }

        // Integration by parts patterns: x^n against exp, trig or ln
        if let Some(result) = integrate_by_parts_pair(lhs, rhs, var) {
            return Ok(result);
        }
        if let Some(result) = integrate_by_parts_pair(rhs, lhs, var) {
            return Ok(result);
        }

        Ok(self.unevaluated(var))
    }

    /// Handle division in integration
    fn integrate_division(
        &self,
        lhs: &Expr,
        rhs: &Expr,
        var: &str,
        depth: usize,
    ) -> Result<Expr, String> {
        // If denominator is constant: ∫ f(x)/c dx = (1/c) * ∫ f(x) dx
        if !rhs.contains_variable(var) {
            let lhs_int = lhs.integrate_depth(var, depth + 1)?;
            return Ok(lhs_int / rhs.clone());
        }

        if !lhs.contains_variable(var) {
            if let Some(c) = lhs.as_constant() {
                // ∫ c/(ax + b) dx = (c/a) * ln(ax + b)
                if let Some((a, _)) = linear_in(rhs, var) {
                    if a != 0.0 {
                        return Ok(Expr::Const(c / a) * rhs.clone().ln());
                    }
                }
                // ∫ c/(b + a*x²) dx = c/sqrt(a*b) * arctg(sqrt(a/b)*x)
                if let Some((a, b)) = quadratic_in(rhs, var) {
                    if a > 0.0 && b > 0.0 {
                        return Ok(Expr::Const(c / (a * b).sqrt())
                            * Expr::arctg(Box::new(
                                Expr::Const((a / b).sqrt()) * Expr::Var(var.to_string()),
                            )));
                    }
                }
                // ∫ c/sqrt(b - a*x²) dx = c/sqrt(a) * arcsin(sqrt(a/b)*x)
                if let Expr::Sqrt(inner) = rhs {
                    if let Some((a, b)) = quadratic_in(inner, var) {
                        if a < 0.0 && b > 0.0 {
                            let a = -a;
                            return Ok(Expr::Const(c / a.sqrt())
                                * Expr::arcsin(Box::new(
                                    Expr::Const((a / b).sqrt()) * Expr::Var(var.to_string()),
                                )));
                        }
                    }
                }
            }
        }

        // ∫ f'(x)/f(x) dx = ln(f(x))
        let derivative = rhs.diff(var).simplify();
        if !derivative.is_zero() && lhs.simplify().equivalent(&derivative) {
            return Ok(rhs.clone().ln());
        }

        Ok(self.unevaluated(var))
    }

    /// Handle power integration
    fn integrate_power(&self, base: &Expr, exp: &Expr, var: &str) -> Result<Expr, String> {
        // ∫ c dx when neither side holds the variable
        if !base.contains_variable(var) && !exp.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }

        // Case 1: ∫ u^n dx where n is constant and u = a*x + b
        if let Expr::Const(n) = exp {
            if let Some((a, _)) = linear_in(base, var) {
                if a != 0.0 {
                    if (*n - (-1.0)).abs() < f64::EPSILON {
                        // ∫ u^(-1) dx = ln(u)/a
                        return Ok(base.clone().ln() / Expr::Const(a));
                    } else {
                        // ∫ u^n dx = u^(n+1)/(a*(n+1))
                        let new_exp = Expr::Const(n + 1.0);
                        let integrated = Expr::Pow(Box::new(base.clone()), Box::new(new_exp))
                            / Expr::Const(a * (n + 1.0));
                        return Ok(integrated);
                    }
                }
            }
        }

        // Case 2: ∫ c^u dx where c is constant and u = a*x + b
        if let Expr::Const(c) = base {
            if let Some((a, _)) = linear_in(exp, var) {
                if a != 0.0 && *c > 0.0 && (*c - 1.0).abs() > f64::EPSILON {
                    if (*c - E).abs() < f64::EPSILON {
                        // e^u written as a power: ∫ e^u dx = e^u / a
                        return Ok(self.clone() / Expr::Const(a));
                    }
                    // ∫ c^u dx = c^u / (a * ln(c))
                    return Ok(self.clone() / (Expr::Const(a) * Expr::Const(*c).ln()));
                }
            }
        }

        Ok(self.unevaluated(var))
    }

    /// Handle exponential integration: ∫ e^u dx for linear u
    fn integrate_exponential(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }
        if let Some((a, _)) = linear_in(expr, var) {
            if a != 0.0 {
                // ∫ e^(ax + b) dx = (1/a) * e^(ax + b)
                return Ok(expr.clone().exp() / Expr::Const(a));
            }
        }
        Ok(self.unevaluated(var))
    }

    /// Handle logarithm integration using integration by parts
    fn integrate_logarithm(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }
        // ∫ ln(u) dx = (u/a)*ln(u) - x for u = a*x + b
        if let Some((a, _)) = linear_in(expr, var) {
            if a != 0.0 {
                let u = expr.clone();
                return Ok(
                    (u.clone() / Expr::Const(a)) * u.ln() - Expr::Var(var.to_string()),
                );
            }
        }
        Ok(self.unevaluated(var))
    }

    /// ∫ sqrt(u) dx = 2/(3a) * u^(3/2) for u = a*x + b
    fn integrate_sqrt(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }
        if let Some((a, _)) = linear_in(expr, var) {
            if a != 0.0 {
                return Ok(Expr::Const(2.0 / (3.0 * a))
                    * Expr::Pow(Box::new(expr.clone()), Box::new(Expr::Const(1.5))));
            }
        }
        Ok(self.unevaluated(var))
    }

    /// ∫ sin(u) dx = -cos(u)/a for u = a*x + b
    fn integrate_sin(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }
        if let Some((a, _)) = linear_in(expr, var) {
            if a != 0.0 {
                return Ok(Expr::Const(-1.0 / a) * Expr::cos(Box::new(expr.clone())));
            }
        }
        Ok(self.unevaluated(var))
    }

    /// ∫ cos(u) dx = sin(u)/a for u = a*x + b
    fn integrate_cos(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }
        if let Some((a, _)) = linear_in(expr, var) {
            if a != 0.0 {
                return Ok(Expr::sin(Box::new(expr.clone())) / Expr::Const(a));
            }
        }
        Ok(self.unevaluated(var))
    }

    /// ∫ tg(u) dx = -ln(cos(u))/a for u = a*x + b
    fn integrate_tan(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }
        if let Some((a, _)) = linear_in(expr, var) {
            if a != 0.0 {
                return Ok(Expr::Const(-1.0 / a) * Expr::cos(Box::new(expr.clone())).ln());
            }
        }
        Ok(self.unevaluated(var))
    }

    /// ∫ arcsin(u) dx = (1/a) * (u*arcsin(u) + sqrt(1 - u²)) for u = a*x + b
    fn integrate_arcsin(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }
        if let Some((a, _)) = linear_in(expr, var) {
            if a != 0.0 {
                let u = expr.clone();
                let one_minus_u2 = Expr::Const(1.0)
                    - Expr::Pow(Box::new(u.clone()), Box::new(Expr::Const(2.0)));
                return Ok(Expr::Const(1.0 / a)
                    * (u.clone() * Expr::arcsin(Box::new(u)) + one_minus_u2.sqrt()));
            }
        }
        Ok(self.unevaluated(var))
    }

    /// ∫ arccos(u) dx = (1/a) * (u*arccos(u) - sqrt(1 - u²)) for u = a*x + b
    fn integrate_arccos(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }
        if let Some((a, _)) = linear_in(expr, var) {
            if a != 0.0 {
                let u = expr.clone();
                let one_minus_u2 = Expr::Const(1.0)
                    - Expr::Pow(Box::new(u.clone()), Box::new(Expr::Const(2.0)));
                return Ok(Expr::Const(1.0 / a)
                    * (u.clone() * Expr::arccos(Box::new(u)) - one_minus_u2.sqrt()));
            }
        }
        Ok(self.unevaluated(var))
    }

    /// ∫ arctg(u) dx = (1/a) * (u*arctg(u) - ln(1 + u²)/2) for u = a*x + b
    fn integrate_arctan(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }
        if let Some((a, _)) = linear_in(expr, var) {
            if a != 0.0 {
                let u = expr.clone();
                let one_plus_u2 = Expr::Const(1.0)
                    + Expr::Pow(Box::new(u.clone()), Box::new(Expr::Const(2.0)));
                return Ok(Expr::Const(1.0 / a)
                    * (u.clone() * Expr::arctg(Box::new(u))
                        - one_plus_u2.ln() / Expr::Const(2.0)));
            }
        }
        Ok(self.unevaluated(var))
    }

    /// ∫ sh(u) dx = ch(u)/a for u = a*x + b
    fn integrate_sinh(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }
        if let Some((a, _)) = linear_in(expr, var) {
            if a != 0.0 {
                return Ok(Expr::ch(Box::new(expr.clone())) / Expr::Const(a));
            }
        }
        Ok(self.unevaluated(var))
    }

    /// ∫ ch(u) dx = sh(u)/a for u = a*x + b
    fn integrate_cosh(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }
        if let Some((a, _)) = linear_in(expr, var) {
            if a != 0.0 {
                return Ok(Expr::sh(Box::new(expr.clone())) / Expr::Const(a));
            }
        }
        Ok(self.unevaluated(var))
    }

    /// ∫ th(u) dx = ln(ch(u))/a for u = a*x + b
    fn integrate_tanh(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        if !expr.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }
        if let Some((a, _)) = linear_in(expr, var) {
            if a != 0.0 {
                return Ok(Expr::ch(Box::new(expr.clone())).ln() / Expr::Const(a));
            }
        }
        Ok(self.unevaluated(var))
    }

    /// numeric value of a variable-free expression, None when any part is symbolic
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Expr::Const(c) => Some(*c),
            Expr::Var(_) => None,
            Expr::Add(l, r) => Some(l.as_constant()? + r.as_constant()?),
            Expr::Sub(l, r) => Some(l.as_constant()? - r.as_constant()?),
            Expr::Mul(l, r) => Some(l.as_constant()? * r.as_constant()?),
            Expr::Div(l, r) => Some(l.as_constant()? / r.as_constant()?),
            Expr::Pow(l, r) => Some(l.as_constant()?.powf(r.as_constant()?)),
            Expr::Exp(e) => Some(e.as_constant()?.exp()),
            Expr::Ln(e) => Some(e.as_constant()?.ln()),
            Expr::Sqrt(e) => Some(e.as_constant()?.sqrt()),
            Expr::sin(e) => Some(e.as_constant()?.sin()),
            Expr::cos(e) => Some(e.as_constant()?.cos()),
            Expr::tg(e) => Some(e.as_constant()?.tan()),
            Expr::arcsin(e) => Some(e.as_constant()?.asin()),
            Expr::arccos(e) => Some(e.as_constant()?.acos()),
            Expr::arctg(e) => Some(e.as_constant()?.atan()),
            Expr::sh(e) => Some(e.as_constant()?.sinh()),
            Expr::ch(e) => Some(e.as_constant()?.cosh()),
            Expr::th(e) => Some(e.as_constant()?.tanh()),
            Expr::IntegralOf(_, _) => None,
        }
    }
}

fn rebuild_product(factors: Vec<Expr>) -> Expr {
    factors
        .into_iter()
        .reduce(|a, b| Expr::Mul(Box::new(a), Box::new(b)))
        .unwrap_or(Expr::Const(1.0))
}

/// Decompose an expression as a*var + b with numeric a and b.
/// Returns None when the expression is not linear in the variable.
pub(crate) fn linear_in(expr: &Expr, var: &str) -> Option<(f64, f64)> {
    if !expr.contains_variable(var) {
        return expr.as_constant().map(|c| (0.0, c));
    }
    match expr {
        Expr::Var(name) if name == var => Some((1.0, 0.0)),
        Expr::Add(l, r) => {
            let (a1, b1) = linear_in(l, var)?;
            let (a2, b2) = linear_in(r, var)?;
            Some((a1 + a2, b1 + b2))
        }
        Expr::Sub(l, r) => {
            let (a1, b1) = linear_in(l, var)?;
            let (a2, b2) = linear_in(r, var)?;
            Some((a1 - a2, b1 - b2))
        }
        Expr::Mul(l, r) => {
            if !l.contains_variable(var) {
                let c = l.as_constant()?;
                let (a, b) = linear_in(r, var)?;
                Some((c * a, c * b))
            } else if !r.contains_variable(var) {
                let c = r.as_constant()?;
                let (a, b) = linear_in(l, var)?;
                Some((c * a, c * b))
            } else {
                None
            }
        }
        Expr::Div(l, r) => {
            if !r.contains_variable(var) {
                let c = r.as_constant()?;
                if c != 0.0 {
                    let (a, b) = linear_in(l, var)?;
                    Some((a / c, b / c))
                } else {
                    None
                }
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Decompose a sum as b + a*var² with numeric a and b. Returns None when any
/// term is neither constant nor a constant multiple of var².
fn quadratic_in(expr: &Expr, var: &str) -> Option<(f64, f64)> {
    let mut terms = Vec::new();
    flatten_add(expr, &mut terms);
    let mut a = 0.0;
    let mut b = 0.0;
    for term in &terms {
        if !term.contains_variable(var) {
            b += term.as_constant()?;
        } else {
            a += square_term_coefficient(term, var)?;
        }
    }
    if a != 0.0 { Some((a, b)) } else { None }
}

/// coefficient c of a term of the shape c * var², None for any other shape
fn square_term_coefficient(term: &Expr, var: &str) -> Option<f64> {
    let mut factors = Vec::new();
    flatten_mul(term, &mut factors);
    let mut coeff = 1.0;
    let mut squares = 0;
    for f in &factors {
        if !f.contains_variable(var) {
            coeff *= f.as_constant()?;
        } else if let Expr::Pow(base, exp) = f {
            match (base.as_ref(), exp.as_ref()) {
                (Expr::Var(v), Expr::Const(n))
                    if v == var && (*n - 2.0).abs() < f64::EPSILON =>
                {
                    squares += 1;
                }
                _ => return None,
            }
        } else {
            return None;
        }
    }
    if squares == 1 { Some(coeff) } else { None }
}

/// x^n paired with exp(u), sin(u), cos(u) (u linear) or ln(x): the recursive
/// integration by parts patterns
fn integrate_by_parts_pair(poly: &Expr, other: &Expr, var: &str) -> Option<Expr> {
    let n = polynomial_degree(poly, var)?;
    match other {
        Expr::Exp(inner) => {
            let (a, _) = linear_in(inner, var)?;
            if a == 0.0 {
                return None;
            }
            Some(integrate_xn_times_exp_u(n, inner, a, var))
        }
        Expr::sin(inner) => {
            let (a, _) = linear_in(inner, var)?;
            if a == 0.0 {
                return None;
            }
            Some(integrate_xn_times_sin_u(n, inner, a, var))
        }
        Expr::cos(inner) => {
            let (a, _) = linear_in(inner, var)?;
            if a == 0.0 {
                return None;
            }
            Some(integrate_xn_times_cos_u(n, inner, a, var))
        }
        Expr::Ln(inner) => {
            if let Expr::Var(v) = inner.as_ref() {
                if v == var && n >= 1 {
                    return Some(integrate_xn_times_ln_x(n, var));
                }
            }
            None
        }
        _ => None,
    }
}

/// n from x^n when the factor is exactly the variable or an integer power of it
fn polynomial_degree(poly: &Expr, var: &str) -> Option<i32> {
    match poly {
        Expr::Var(x) if x == var => Some(1),
        Expr::Pow(base, exp) => {
            if let (Expr::Var(x), Expr::Const(power)) = (base.as_ref(), exp.as_ref()) {
                if x == var
                    && power.fract() == 0.0
                    && *power >= 1.0
                    && *power <= MAX_BY_PARTS_DEGREE
                {
                    Some(*power as i32)
                } else {
                    None
                }
            } else {
                None
            }
        }
        _ => None,
    }
}

fn xn(n: i32, var: &str) -> Expr {
    let x = Expr::Var(var.to_string());
    if n == 1 {
        x
    } else {
        x.pow(Expr::Const(n as f64))
    }
}

/// ∫ x^n * e^u dx = x^n * e^u / a - (n/a) * ∫ x^(n-1) * e^u dx, u = a*x + b
fn integrate_xn_times_exp_u(n: i32, u: &Expr, a: f64, var: &str) -> Expr {
    let exp_u = u.clone().exp();
    if n == 0 {
        return exp_u / Expr::Const(a);
    }
    let first_term = (xn(n, var) * exp_u) / Expr::Const(a);
    let second_term = (Expr::Const(n as f64) / Expr::Const(a))
        * integrate_xn_times_exp_u(n - 1, u, a, var);
    first_term - second_term
}

/// ∫ x^n * sin(u) dx = -x^n * cos(u)/a + (n/a) * ∫ x^(n-1) * cos(u) dx, u = a*x + b
fn integrate_xn_times_sin_u(n: i32, u: &Expr, a: f64, var: &str) -> Expr {
    let cos_u = Expr::cos(Box::new(u.clone()));
    if n == 0 {
        return Expr::Const(-1.0 / a) * cos_u;
    }
    let first_term = Expr::Const(-1.0 / a) * xn(n, var) * cos_u;
    let second_term = (Expr::Const(n as f64) / Expr::Const(a))
        * integrate_xn_times_cos_u(n - 1, u, a, var);
    first_term + second_term
}

/// ∫ x^n * cos(u) dx = x^n * sin(u)/a - (n/a) * ∫ x^(n-1) * sin(u) dx, u = a*x + b
fn integrate_xn_times_cos_u(n: i32, u: &Expr, a: f64, var: &str) -> Expr {
    let sin_u = Expr::sin(Box::new(u.clone()));
    if n == 0 {
        return sin_u / Expr::Const(a);
    }
    let first_term = (xn(n, var) * sin_u) / Expr::Const(a);
    let second_term = (Expr::Const(n as f64) / Expr::Const(a))
        * integrate_xn_times_sin_u(n - 1, u, a, var);
    first_term - second_term
}

/// ∫ x^n * ln(x) dx = x^(n+1)*ln(x)/(n+1) - x^(n+1)/(n+1)²
fn integrate_xn_times_ln_x(n: i32, var: &str) -> Expr {
    let m = (n + 1) as f64;
    let x_m = xn(n + 1, var);
    x_m.clone() * Expr::Var(var.to_string()).ln() / Expr::Const(m) - x_m / Expr::Const(m * m)
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn check_by_differentiation(input: &str) {
        let f = Expr::parse_expression(input).unwrap();
        let antiderivative = f.integrate("x").unwrap();
        assert!(
            !antiderivative.contains_unevaluated_integral(),
            "no rule fired for {}",
            input
        );
        let derivative = antiderivative.diff("x").simplify();
        assert!(
            derivative.equivalent(&f.simplify()),
            "d/dx of integral of {} gave {}",
            input,
            derivative
        );
    }

    #[test]
    fn test_integrate_constant() {
        let expr = Expr::Const(5.0);
        let result = expr.integrate("x").unwrap();
        assert_eq!(result, Expr::Const(5.0) * Expr::Var("x".to_string()));
    }

    #[test]
    fn test_integrate_power_rule() {
        check_by_differentiation("x^2");
        check_by_differentiation("x^5 + 3x^2 - 7");
    }

    #[test]
    fn test_integrate_reciprocal_gives_log() {
        let expr = Expr::parse_expression("x^-1").unwrap();
        let result = expr.integrate("x").unwrap();
        assert_eq!(
            result,
            Expr::Ln(Box::new(Expr::Var("x".to_string()))) / Expr::Const(1.0)
        );
    }

    #[test]
    fn test_integrate_one_over_x_division_form() {
        check_by_differentiation("1/x");
    }

    #[test]
    fn test_integrate_linear_chain_rules() {
        check_by_differentiation("sin(3x)");
        check_by_differentiation("cos(2x + 1)");
        check_by_differentiation("exp(2x)");
        check_by_differentiation("sqrt(4x + 1)");
        check_by_differentiation("(2x + 3)^4");
    }

    #[test]
    fn test_integrate_tangent() {
        check_by_differentiation("tan(x)");
    }

    #[test]
    fn test_integrate_hyperbolics() {
        check_by_differentiation("sinh(x)");
        check_by_differentiation("cosh(3x)");
        check_by_differentiation("tanh(x)");
    }

    #[test]
    fn test_integrate_by_parts_x_exp() {
        check_by_differentiation("x*exp(x)");
        check_by_differentiation("x^2*exp(x)");
        check_by_differentiation("x*exp(2x)");
    }

    #[test]
    fn test_integrate_by_parts_x_trig() {
        check_by_differentiation("x*sin(x)");
        check_by_differentiation("x^2*cos(x)");
    }

    #[test]
    fn test_integrate_by_parts_x_ln() {
        check_by_differentiation("x*ln(x)");
        check_by_differentiation("x^3*ln(x)");
    }

    #[test]
    fn test_integrate_plain_logarithm() {
        check_by_differentiation("ln(x)");
        check_by_differentiation("ln(2x + 1)");
    }

    #[test]
    fn test_integrate_inverse_trig_forms() {
        check_by_differentiation("arctan(x)");
        check_by_differentiation("arcsin(x)");
        check_by_differentiation("1/(1 + x^2)");
    }

    #[test]
    fn test_integrate_logarithmic_derivative() {
        // f'/f pattern: 2x over x² + 1
        check_by_differentiation("2x/(x^2 + 1)");
    }

    #[test]
    fn test_integrate_exponential_base() {
        check_by_differentiation("2^x");
        check_by_differentiation("e^x");
    }

    #[test]
    fn test_constant_factor_extraction() {
        check_by_differentiation("5*sin(x)");
        check_by_differentiation("2*x*exp(x)");
    }

    #[test]
    fn test_rule_miss_returns_unevaluated_integral() {
        let expr = Expr::parse_expression("exp(x^2)").unwrap();
        let result = expr.integrate("x").unwrap();
        assert!(result.contains_unevaluated_integral());
        assert_eq!(result, Expr::IntegralOf(Box::new(expr), "x".to_string()));
    }

    #[test]
    fn test_unevaluated_integral_differentiates_back() {
        let expr = Expr::parse_expression("exp(x^2)").unwrap();
        let result = expr.integrate("x").unwrap();
        assert_eq!(result.diff("x"), expr);
    }

    #[test]
    fn test_linear_in_decomposition() {
        let expr = Expr::parse_expression("2x + 3").unwrap();
        assert_eq!(linear_in(&expr, "x"), Some((2.0, 3.0)));
        let expr = Expr::parse_expression("x^2").unwrap();
        assert_eq!(linear_in(&expr, "x"), None);
        let expr = Expr::parse_expression("7").unwrap();
        assert_eq!(linear_in(&expr, "x"), Some((0.0, 7.0)));
    }
}
