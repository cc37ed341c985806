use soroban_sdk::Env;

use crate::error::BasketResult;
use crate::math_error;

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> BasketResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> BasketResult<Self>;
    fn safe_mul(self, rhs: Self, env: &Env) -> BasketResult<Self>;
    fn safe_div(self, rhs: Self, env: &Env) -> BasketResult<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t, env: &Env) -> BasketResult<$t> {
                self.checked_add(v).ok_or_else(math_error!(env))
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t, env: &Env) -> BasketResult<$t> {
                self.checked_sub(v).ok_or_else(math_error!(env))
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t, env: &Env) -> BasketResult<$t> {
                self.checked_mul(v).ok_or_else(math_error!(env))
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t, env: &Env) -> BasketResult<$t> {
                self.checked_div(v).ok_or_else(math_error!(env))
            }
        }
    };
}

checked_impl!(i128);
checked_impl!(u32);
