//! Arithmetic operator implementations for [`super::Poly`].
//!
//! Each operator is implemented once on references and the owned variants
//! delegate to it, the usual pattern for value types wrapping a `Vec`.

use super::Poly;
use num_traits::Zero;
use std::ops::{Add, Mul, Neg, Sub};

impl<T> Add<&Poly<T>> for &Poly<T>
where
    T: Clone + Add<Output = T> + PartialEq + Zero,
{
    type Output = Poly<T>;
    fn add(self, rhs: &Poly<T>) -> Poly<T> {
        let len = self.len().max(rhs.len());
        let coeffs: Vec<T> = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).cloned().unwrap_or_else(T::zero);
                let b = rhs.coeffs.get(i).cloned().unwrap_or_else(T::zero);
                a + b
            })
            .collect();
        Poly::new_from_coeffs_iter(coeffs)
    }
}

impl<T> Add for Poly<T>
where
    T: Clone + Add<Output = T> + PartialEq + Zero,
{
    type Output = Poly<T>;
    fn add(self, rhs: Poly<T>) -> Poly<T> {
        &self + &rhs
    }
}

impl<T> Sub<&Poly<T>> for &Poly<T>
where
    T: Clone + Neg<Output = T> + Sub<Output = T> + PartialEq + Zero,
{
    type Output = Poly<T>;
    fn sub(self, rhs: &Poly<T>) -> Poly<T> {
        let len = self.len().max(rhs.len());
        let coeffs: Vec<T> = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).cloned().unwrap_or_else(T::zero);
                let b = rhs.coeffs.get(i).cloned().unwrap_or_else(T::zero);
                a - b
            })
            .collect();
        Poly::new_from_coeffs_iter(coeffs)
    }
}

impl<T> Sub for Poly<T>
where
    T: Clone + Neg<Output = T> + Sub<Output = T> + PartialEq + Zero,
{
    type Output = Poly<T>;
    fn sub(self, rhs: Poly<T>) -> Poly<T> {
        &self - &rhs
    }
}

impl<T> Neg for &Poly<T>
where
    T: Clone + Neg<Output = T> + PartialEq + Zero,
{
    type Output = Poly<T>;
    fn neg(self) -> Poly<T> {
        Poly::new_from_coeffs_iter(self.coeffs.iter().cloned().map(|c| -c))
    }
}

impl<T> Neg for Poly<T>
where
    T: Clone + Neg<Output = T> + PartialEq + Zero,
{
    type Output = Poly<T>;
    fn neg(self) -> Poly<T> {
        -&self
    }
}

impl<T> Mul<&Poly<T>> for &Poly<T>
where
    T: Clone + Add<Output = T> + Mul<Output = T> + PartialEq + Zero,
{
    type Output = Poly<T>;
    fn mul(self, rhs: &Poly<T>) -> Poly<T> {
        if self.is_zero() || rhs.is_zero() {
            return Poly::zero();
        }
        let mut coeffs = vec![T::zero(); self.len() + rhs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].clone() + a.clone() * b.clone();
            }
        }
        Poly::new_from_coeffs_iter(coeffs)
    }
}

impl<T> Mul for Poly<T>
where
    T: Clone + Add<Output = T> + Mul<Output = T> + PartialEq + Zero,
{
    type Output = Poly<T>;
    fn mul(self, rhs: Poly<T>) -> Poly<T> {
        &self * &rhs
    }
}
