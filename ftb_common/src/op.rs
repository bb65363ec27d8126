//! Operator boilerplate for single-field money newtypes.

/// Implements a `std::ops` trait for a newtype wrapping an integer by delegating to the inner value.
///
/// * `op!(binary T, Add, add)` implements `T + T -> T`
/// * `op!(inplace T, AddAssign, add_assign)` implements `T += T`
/// * `op!(unary T, Neg, neg)` implements `-T -> T`
#[macro_export]
macro_rules! op {
    (binary $unit:ty, $trait:ident, $fn:ident) => {
        impl std::ops::$trait for $unit {
            type Output = Self;

            fn $fn(self, rhs: Self) -> Self::Output {
                Self(std::ops::$trait::$fn(self.0, rhs.0))
            }
        }
    };

    (inplace $unit:ty, $trait:ident, $fn:ident) => {
        impl std::ops::$trait for $unit {
            fn $fn(&mut self, rhs: Self) {
                std::ops::$trait::$fn(&mut self.0, rhs.0)
            }
        }
    };

    (unary $unit:ty, $trait:ident, $fn:ident) => {
        impl std::ops::$trait for $unit {
            type Output = Self;

            fn $fn(self) -> Self::Output {
                Self(std::ops::$trait::$fn(self.0))
            }
        }
    };
}
