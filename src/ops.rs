//! Arithmetic on the current value.
//!
//! The compound assignment operators commit their result as a new entry,
//! the plain operators only read the current value and leave the history untouched.
//! Every operator is only available when the value type supports it.

use crate::{Rollback, Slot};
use core::num::Wrapping;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Not, Rem, RemAssign, Sub, SubAssign,
};

/// The multiplicative identity, used by the increment and decrement operations.
pub trait One {
    /// Returns the value `1`.
    fn one() -> Self;
}

macro_rules! impl_one {
    ($one:expr => $($t:ty),*) => {$(
        impl One for $t {
            fn one() -> $t {
                $one
            }
        }
    )*};
}

impl_one!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_one!(1.0 => f32, f64);

impl<T: One> One for Wrapping<T> {
    fn one() -> Wrapping<T> {
        Wrapping(T::one())
    }
}

impl<T, S> Rollback<T, S>
where
    T: Clone + One + Add<Output = T>,
    S: Slot,
{
    /// Commits the current value plus one and returns the new value.
    ///
    /// # Examples
    /// ```
    /// # use rollback::Rollback;
    /// let mut value = Rollback::new(0);
    /// assert_eq!(*value.increment(), 1);
    /// assert_eq!(value.post_increment(), 1);
    /// assert_eq!(value.get(), &2);
    /// ```
    pub fn increment(&mut self) -> &T {
        self.set_with(|value| value.clone() + T::one())
    }

    /// Commits the current value plus one and returns the value before the change.
    pub fn post_increment(&mut self) -> T {
        let old = self.get().clone();
        self.set(old.clone() + T::one());
        old
    }
}

impl<T, S> Rollback<T, S>
where
    T: Clone + One + Sub<Output = T>,
    S: Slot,
{
    /// Commits the current value minus one and returns the new value.
    pub fn decrement(&mut self) -> &T {
        self.set_with(|value| value.clone() - T::one())
    }

    /// Commits the current value minus one and returns the value before the change.
    pub fn post_decrement(&mut self) -> T {
        let old = self.get().clone();
        self.set(old.clone() - T::one());
        old
    }
}

macro_rules! impl_assign_ops {
    ($($Assign:ident::$assign:ident => $Op:ident::$op:ident),*) => {$(
        impl<T, S> $Assign<T> for Rollback<T, S>
        where
            T: Clone + $Op<Output = T>,
            S: Slot,
        {
            fn $assign(&mut self, rhs: T) {
                self.set_with(|value| $Op::$op(value.clone(), rhs));
            }
        }
    )*};
}

impl_assign_ops!(
    AddAssign::add_assign => Add::add,
    SubAssign::sub_assign => Sub::sub,
    MulAssign::mul_assign => Mul::mul,
    DivAssign::div_assign => Div::div,
    RemAssign::rem_assign => Rem::rem
);

macro_rules! impl_binary_ops {
    ($($Op:ident::$op:ident),*) => {$(
        impl<T, S> $Op<T> for &Rollback<T, S>
        where
            T: Clone + $Op<Output = T>,
        {
            type Output = T;

            fn $op(self, rhs: T) -> T {
                $Op::$op(self.get().clone(), rhs)
            }
        }

        impl<T, S> $Op<T> for Rollback<T, S>
        where
            T: $Op<Output = T>,
        {
            type Output = T;

            fn $op(self, rhs: T) -> T {
                $Op::$op(self.into_inner(), rhs)
            }
        }
    )*};
}

impl_binary_ops!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

// A blanket `impl<T> Add<Rollback<T>> for T` is not allowed, so the reversed
// operand order is implemented for the primitive number types only.
macro_rules! impl_reversed_op {
    ($Op:ident::$op:ident for $($t:ty),*) => {$(
        impl<S> $Op<&Rollback<$t, S>> for $t {
            type Output = $t;

            fn $op(self, rhs: &Rollback<$t, S>) -> $t {
                $Op::$op(self, *rhs.get())
            }
        }

        impl<S> $Op<Rollback<$t, S>> for $t {
            type Output = $t;

            fn $op(self, rhs: Rollback<$t, S>) -> $t {
                $Op::$op(self, *rhs.get())
            }
        }
    )*};
}

macro_rules! impl_reversed_ops {
    ($($t:ty),*) => {
        impl_reversed_op!(Add::add for $($t),*);
        impl_reversed_op!(Sub::sub for $($t),*);
        impl_reversed_op!(Mul::mul for $($t),*);
        impl_reversed_op!(Div::div for $($t),*);
        impl_reversed_op!(Rem::rem for $($t),*);
    };
}

impl_reversed_ops!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl<T, S> Not for &Rollback<T, S>
where
    T: Clone + Not,
{
    type Output = T::Output;

    fn not(self) -> T::Output {
        !self.get().clone()
    }
}

impl<T: Not, S> Not for Rollback<T, S> {
    type Output = T::Output;

    fn not(self) -> T::Output {
        !self.into_inner()
    }
}
