//! Textual polynomial parser: `spec.md` §6's "accepted as either a textual
//! expression in `x, y`, or a dense representation" input format.
//!
//! A small hand-rolled recursive-descent parser, in the spirit of the
//! teacher's own small self-contained helpers rather than pulling in a
//! parser-combinator crate for a four-token grammar (`+ - * ^`, integers,
//! `x`/`y`, parentheses).
//!
//! Grammar (all tokens separated by optional whitespace):
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor ('*' factor)*
//! factor := ('-')? atom ('^' integer)?
//! atom   := integer | 'x' | 'y' | '(' expr ')'
//! ```

use super::{BiPoly, Rational};
use crate::error::{Error, Result};
use num_bigint::BigInt;
use std::iter::Peekable;
use std::str::Chars;

/// Parse a textual bivariate polynomial expression, e.g. `"x^2 - y^3"` or
/// `"(x + y) * (x - y)"`.
///
/// # Errors
///
/// Returns [`Error::CoefficientUnsupported`] on any syntax error, naming
/// the offending remainder of input.
pub fn parse(input: &str) -> Result<BiPoly> {
    let mut p = Parser { chars: input.chars().peekable() };
    let sum = p.parse_expr()?;
    p.skip_ws();
    if p.chars.peek().is_some() {
        return Err(Error::CoefficientUnsupported(format!(
            "unexpected trailing input: {:?}",
            p.chars.collect::<String>()
        )));
    }
    Ok(sum.into_bipoly())
}

/// A single monomial `coeff * x^i * y^j`, the parser's intermediate
/// representation before monomials are summed into a dense [`BiPoly`].
#[derive(Clone)]
struct Monomial {
    coeff: Rational,
    deg_x: usize,
    deg_y: usize,
}

/// A sum of monomials, i.e. a fully parsed expression or sub-expression.
#[derive(Clone)]
struct Sum(Vec<Monomial>);

impl Sum {
    fn into_bipoly(self) -> BiPoly {
        let max_y = self.0.iter().map(|m| m.deg_y).max().unwrap_or(0);
        let max_x = self.0.iter().map(|m| m.deg_x).max().unwrap_or(0);
        let mut grid = vec![vec![Rational::from_integer(BigInt::from(0)); max_x + 1]; max_y + 1];
        for m in self.0 {
            grid[m.deg_y][m.deg_x] = grid[m.deg_y][m.deg_x].clone() + m.coeff;
        }
        BiPoly::from_grid(grid)
    }
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Parser<'a> {
    fn skip_ws(&mut self) {
        while matches!(self.chars.peek(), Some(c) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn parse_expr(&mut self) -> Result<Sum> {
        let mut terms = self.parse_term()?.0;
        loop {
            self.skip_ws();
            match self.chars.peek() {
                Some('+') => {
                    self.chars.next();
                    terms.extend(self.parse_term()?.0);
                }
                Some('-') => {
                    self.chars.next();
                    let negated: Vec<Monomial> = self
                        .parse_term()?
                        .0
                        .into_iter()
                        .map(|mut m| {
                            m.coeff = -m.coeff;
                            m
                        })
                        .collect();
                    terms.extend(negated);
                }
                _ => break,
            }
        }
        Ok(Sum(terms))
    }

    fn parse_term(&mut self) -> Result<Sum> {
        let mut acc = self.parse_factor()?;
        loop {
            self.skip_ws();
            if self.chars.peek() == Some(&'*') {
                self.chars.next();
                let rhs = self.parse_factor()?;
                acc = multiply_sums(&acc, &rhs);
            } else {
                break;
            }
        }
        Ok(acc)
    }

    fn parse_factor(&mut self) -> Result<Sum> {
        self.skip_ws();
        let negative = if self.chars.peek() == Some(&'-') {
            self.chars.next();
            true
        } else {
            false
        };
        let mut sum = self.parse_atom()?;
        self.skip_ws();
        if self.chars.peek() == Some(&'^') {
            self.chars.next();
            self.skip_ws();
            let exp = self.parse_integer_literal()?;
            let exp: usize = exp
                .try_into()
                .map_err(|_| Error::CoefficientUnsupported("negative exponent".into()))?;
            sum = pow_sum(&sum, exp);
        }
        if negative {
            for m in &mut sum.0 {
                m.coeff = -m.coeff.clone();
            }
        }
        Ok(sum)
    }

    fn parse_atom(&mut self) -> Result<Sum> {
        self.skip_ws();
        match self.chars.peek() {
            Some('x') => {
                self.chars.next();
                Ok(Sum(vec![Monomial { coeff: one(), deg_x: 1, deg_y: 0 }]))
            }
            Some('y') => {
                self.chars.next();
                Ok(Sum(vec![Monomial { coeff: one(), deg_x: 0, deg_y: 1 }]))
            }
            Some('(') => {
                self.chars.next();
                let sum = self.parse_expr()?;
                self.skip_ws();
                if self.chars.next() != Some(')') {
                    return Err(Error::CoefficientUnsupported("unbalanced parentheses".into()));
                }
                Ok(sum)
            }
            Some(c) if c.is_ascii_digit() => {
                let n = self.parse_integer_literal()?;
                Ok(Sum(vec![Monomial { coeff: Rational::from_integer(n), deg_x: 0, deg_y: 0 }]))
            }
            other => Err(Error::CoefficientUnsupported(format!("unexpected token: {other:?}"))),
        }
    }

    fn parse_integer_literal(&mut self) -> Result<BigInt> {
        self.skip_ws();
        let mut digits = String::new();
        while matches!(self.chars.peek(), Some(c) if c.is_ascii_digit()) {
            digits.push(self.chars.next().unwrap());
        }
        if digits.is_empty() {
            return Err(Error::CoefficientUnsupported("expected an integer".into()));
        }
        digits.parse::<BigInt>().map_err(|e| Error::CoefficientUnsupported(e.to_string()))
    }
}

fn one() -> Rational {
    Rational::from_integer(BigInt::from(1))
}

/// Full polynomial multiplication: every monomial of `lhs` against every
/// monomial of `rhs`, summed (like terms are merged later by
/// `Sum::into_bipoly`, not here).
fn multiply_sums(lhs: &Sum, rhs: &Sum) -> Sum {
    let mut out = Vec::with_capacity(lhs.0.len() * rhs.0.len());
    for a in &lhs.0 {
        for b in &rhs.0 {
            out.push(Monomial {
                coeff: a.coeff.clone() * b.coeff.clone(),
                deg_x: a.deg_x + b.deg_x,
                deg_y: a.deg_y + b.deg_y,
            });
        }
    }
    Sum(out)
}

fn pow_sum(base: &Sum, exp: usize) -> Sum {
    if exp == 0 {
        return Sum(vec![Monomial { coeff: one(), deg_x: 0, deg_y: 0 }]);
    }
    (1..exp).fold(base.clone(), |acc, _| multiply_sums(&acc, base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_cusp() {
        // x^2 - y^3
        let p = parse("x^2 - y^3").unwrap();
        assert_eq!(Some(2), p.degree_x());
        assert_eq!(Some(3), p.degree_y());
    }

    #[test]
    fn parses_product_of_linear_factors() {
        let p = parse("x*y + x - y - 1").unwrap();
        assert_eq!(Some(1), p.degree_x());
        assert_eq!(Some(1), p.degree_y());
    }

    #[test]
    fn parses_two_vertical_lines() {
        let p = parse("x^2 - 1").unwrap();
        assert_eq!(Some(2), p.degree_x());
        assert_eq!(Some(0), p.degree_y());
    }

    #[test]
    fn parses_a_product_of_parenthesised_sums() {
        // (x + y) * (x - y) = x^2 - y^2
        let p = parse("(x + y) * (x - y)").unwrap();
        assert_eq!(Some(2), p.degree_x());
        assert_eq!(Some(2), p.degree_y());
    }

    #[test]
    fn parses_three_linear_factors_through_the_origin() {
        let p = parse("(x + y) * (x - y) * (x + 2*y)").unwrap();
        assert_eq!(Some(3), p.degree_x());
        assert_eq!(Some(3), p.degree_y());
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(parse("x^2 $$").is_err());
    }
}
