//! Formatted terminal output for the fitted polynomial.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::models::{Polynomial, join_term};

/// Format the run summary: a header line followed by the polynomial layout.
pub fn format_fit_summary(poly: &Polynomial) -> String {
    let mut out = String::new();
    match poly.degree() {
        2 => out.push_str("Fitted quadratic polynomial:\n"),
        d => out.push_str(&format!("Fitted polynomial (degree {d}):\n")),
    }
    out.push_str(&format_raised(poly));
    out.push('\n');
    out
}

/// Two-line layout with exponents raised onto the line above.
///
/// ```text
///            2
/// -0.0002588 x + 2.339 x + 1.832
/// ```
///
/// Powers 0 and 1 are written without an exponent. When no term has a power
/// of 2 or more the output is the single body line.
pub fn format_raised(poly: &Polynomial) -> String {
    let terms = poly.terms();
    if terms.is_empty() {
        return "0".to_string();
    }

    let mut top = String::new();
    let mut body = String::new();

    for (i, term) in terms.iter().enumerate() {
        let part = match term.power {
            0 => term.coef.clone(),
            _ => format!("{} x", term.coef),
        };
        body.push_str(&join_term(i, &part));

        if term.power >= 2 {
            let power = term.power.to_string();
            let col = body.chars().count();
            while top.chars().count() < col {
                top.push(' ');
            }
            top.push_str(&power);
            // Keep the body aligned with multi-digit exponents.
            body.push_str(&" ".repeat(power.len() - 1));
        }
    }

    if top.is_empty() {
        body
    } else {
        format!("{top}\n{body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raised_layout_quadratic() {
        let poly = Polynomial::new(vec![-0.00025884157, 2.3385655, 1.8316667]);
        let expected = concat!(
            "            2\n",
            "-0.0002588 x + 2.339 x + 1.832",
        );
        assert_eq!(format_raised(&poly), expected);
    }

    #[test]
    fn raised_layout_multiple_exponents() {
        let poly = Polynomial::new(vec![1.0, 0.0, -2.0, 0.0]);
        let expected = concat!(
            "   3\n",
            "1 x - 2 x",
        );
        assert_eq!(format_raised(&poly), expected);

        let poly = Polynomial::new(vec![1.0; 11]);
        let txt = format_raised(&poly);
        let mut lines = txt.lines();
        assert_eq!(
            lines.next(),
            Some("   10     9     8     7     6     5     4     3     2")
        );
        assert!(lines.next().unwrap_or("").starts_with("1 x  + 1 x + 1 x"));
    }

    #[test]
    fn raised_layout_linear_is_single_line() {
        let poly = Polynomial::new(vec![2.0, -1.5]);
        assert_eq!(format_raised(&poly), "2 x - 1.5");
    }

    #[test]
    fn summary_has_header() {
        let poly = Polynomial::new(vec![1.0, 2.0, 3.0]);
        let txt = format_fit_summary(&poly);
        assert_eq!(txt, "Fitted quadratic polynomial:\n   2\n1 x + 2 x + 3\n");
    }
}
