// std::ops for Var: x + y, x - y, x * y, x / y, -x, with plain numbers on
// either side. Each operator forwards to the matching `*_op` function and
// panics with its error, like integer division by zero does.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::types::Scalar;
use crate::var::{Operand, Var};
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident, $name:literal) => {
        impl<'g, T: Scalar> $trait for Var<'g, T> {
            type Output = Var<'g, T>;

            fn $method(self, rhs: Var<'g, T>) -> Var<'g, T> {
                $op_fn(self, rhs)
                    .unwrap_or_else(|e| panic!(concat!("Var ", $name, " failed: {}"), e))
            }
        }

        impl<'g, T: Scalar> $trait<T> for Var<'g, T> {
            type Output = Var<'g, T>;

            fn $method(self, rhs: T) -> Var<'g, T> {
                $op_fn(self, Operand::Scalar(rhs))
                    .unwrap_or_else(|e| panic!(concat!("Var ", $name, " failed: {}"), e))
            }
        }
    };
}

impl_binary_op!(Add, add, add_op, "addition");
impl_binary_op!(Sub, sub, sub_op, "subtraction");
impl_binary_op!(Mul, mul, mul_op, "multiplication");
impl_binary_op!(Div, div, div_op, "division");

impl<'g, T: Scalar> Neg for Var<'g, T> {
    type Output = Var<'g, T>;

    fn neg(self) -> Var<'g, T> {
        neg_op(self).unwrap_or_else(|e| panic!("Var negation failed: {}", e))
    }
}

// `number op var`: the number becomes a constant in the graph of `var` and
// stays on the left, so `10.0 / f` is `10 * f^-1`.
macro_rules! impl_reflected_op {
    ($t:ty, $trait:ident, $method:ident, $op_fn:ident, $name:literal) => {
        impl<'g> $trait<Var<'g, $t>> for $t {
            type Output = Var<'g, $t>;

            fn $method(self, rhs: Var<'g, $t>) -> Var<'g, $t> {
                let lhs = rhs.graph().constant(self);
                $op_fn(lhs, rhs)
                    .unwrap_or_else(|e| panic!(concat!("Var ", $name, " failed: {}"), e))
            }
        }
    };
}

macro_rules! impl_reflected_ops {
    ($($t:ty),*) => {
        $(
            impl_reflected_op!($t, Add, add, add_op, "addition");
            impl_reflected_op!($t, Sub, sub, sub_op, "subtraction");
            impl_reflected_op!($t, Mul, mul, mul_op, "multiplication");
            impl_reflected_op!($t, Div, div, div_op, "division");
        )*
    };
}

impl_reflected_ops!(f32, f64);
