//! Polynomial model: design rows for fitting and evaluation for sampling.
//!
//! Coefficients are stored highest power first:
//!
//! ```text
//! f(x) = c[0] x^d + c[1] x^(d-1) + ... + c[d]
//! ```

use std::fmt;

/// An immutable polynomial, highest-degree coefficient first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

/// One displayable term: formatted coefficient (sign included) and its power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub coef: String,
    pub power: usize,
}

impl Polynomial {
    /// Build from coefficients, highest power first.
    ///
    /// An empty slice is treated as the zero polynomial `[0.0]`.
    pub fn new(coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            return Self { coeffs: vec![0.0] };
        }
        Self { coeffs }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Evaluate `f(x)` with Horner's rule.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Terms that survive formatting, highest power first.
    ///
    /// Coefficients that format as `0` are dropped.
    pub fn terms(&self) -> Vec<Term> {
        let d = self.degree();
        self.coeffs
            .iter()
            .enumerate()
            .map(|(k, &c)| Term {
                coef: fmt_sig4(c),
                power: d - k,
            })
            .filter(|t| t.coef != "0")
            .collect()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = self.terms();
        if terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in terms.iter().enumerate() {
            let body = match term.power {
                0 => term.coef.clone(),
                1 => format!("{} x", term.coef),
                p => format!("{} x^{p}", term.coef),
            };
            write!(f, "{}", join_term(i, &body))?;
        }
        Ok(())
    }
}

/// Prefix a formatted term with its joining operator.
///
/// The first term keeps its own sign; later negative terms fold into ` - `.
pub fn join_term(index: usize, body: &str) -> String {
    if index == 0 {
        body.to_string()
    } else if let Some(rest) = body.strip_prefix('-') {
        format!(" - {rest}")
    } else {
        format!(" + {body}")
    }
}

/// Fill one Vandermonde design row: `[x^d, x^(d-1), ..., 1]`.
///
/// # Panics
/// Panics if `out` is empty. Callers size it as `degree + 1`.
pub fn fill_design_row(x: f64, out: &mut [f64]) {
    let last = out.len() - 1;
    out[last] = 1.0;
    for j in (0..last).rev() {
        out[j] = out[j + 1] * x;
    }
}

/// Format with 4 significant digits, like C's `%.4g`.
///
/// Trailing zeros are stripped; exponent form is used when the decimal
/// exponent is `< -4` or `>= 4`.
pub fn fmt_sig4(v: f64) -> String {
    const SIG: i32 = 4;

    if v == 0.0 {
        return "0".to_string();
    }
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    // Let the formatter do the rounding, then read back the exponent.
    let sci = format!("{:.*e}", (SIG - 1) as usize, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= SIG {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.abs())
    } else {
        let decimals = (SIG - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{v:.decimals$}")).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_uses_highest_power_first() {
        // 2x^2 - 3x + 1
        let p = Polynomial::new(vec![2.0, -3.0, 1.0]);
        assert_eq!(p.degree(), 2);
        assert_eq!(p.eval(0.0), 1.0);
        assert_eq!(p.eval(2.0), 3.0);
        assert_eq!(p.eval(-1.0), 6.0);
    }

    #[test]
    fn empty_coefficients_are_zero_polynomial() {
        let p = Polynomial::new(Vec::new());
        assert_eq!(p.degree(), 0);
        assert_eq!(p.eval(5.0), 0.0);
        assert_eq!(p.to_string(), "0");
    }

    #[test]
    fn design_row_is_vandermonde() {
        let mut row = [0.0; 3];
        fill_design_row(4.0, &mut row);
        assert_eq!(row, [16.0, 4.0, 1.0]);

        let mut single = [0.0; 1];
        fill_design_row(4.0, &mut single);
        assert_eq!(single, [1.0]);
    }

    #[test]
    fn sig4_matches_printf_g() {
        assert_eq!(fmt_sig4(2.3385655), "2.339");
        assert_eq!(fmt_sig4(1.8316667), "1.832");
        assert_eq!(fmt_sig4(-0.00025884157), "-0.0002588");
        assert_eq!(fmt_sig4(1.0), "1");
        assert_eq!(fmt_sig4(0.5), "0.5");
        assert_eq!(fmt_sig4(297.0), "297");
        assert_eq!(fmt_sig4(12344.0), "1.234e+04");
        assert_eq!(fmt_sig4(0.0000123), "1.23e-05");
        assert_eq!(fmt_sig4(9999.6), "1e+04");
    }

    #[test]
    fn display_folds_signs_and_drops_zero_terms() {
        let p = Polynomial::new(vec![-0.00025884157, 2.3385655, 1.8316667]);
        assert_eq!(p.to_string(), "-0.0002588 x^2 + 2.339 x + 1.832");

        let p = Polynomial::new(vec![0.5, 0.0, -3.0]);
        assert_eq!(p.to_string(), "0.5 x^2 - 3");

        let p = Polynomial::new(vec![0.0, 0.0, 0.0]);
        assert_eq!(p.to_string(), "0");
    }
}
