//! `f64` math routed through `std` or, without it, through `libm`.

macro_rules! unary {
    ($($name:ident => $libm:ident),+ $(,)?) => {
        $(
            #[inline]
            pub(crate) fn $name(x: f64) -> f64 {
                #[cfg(feature = "std")]
                {
                    x.$name()
                }
                #[cfg(not(feature = "std"))]
                {
                    crate::libm::$libm(x)
                }
            }
        )+
    };
}

macro_rules! binary {
    ($($name:ident => $libm:ident),+ $(,)?) => {
        $(
            #[inline]
            pub(crate) fn $name(x: f64, y: f64) -> f64 {
                #[cfg(feature = "std")]
                {
                    x.$name(y)
                }
                #[cfg(not(feature = "std"))]
                {
                    crate::libm::$libm(x, y)
                }
            }
        )+
    };
}

unary!(
    abs => fabs,
    sqrt => sqrt,
    cbrt => cbrt,
    ceil => ceil,
    floor => floor,
    trunc => trunc,
    round => round,
    sin => sin,
    cos => cos,
    tan => tan,
    sinh => sinh,
    cosh => cosh,
    tanh => tanh,
    asin => asin,
    acos => acos,
    atan => atan,
    asinh => asinh,
    acosh => acosh,
    atanh => atanh,
);

binary!(
    powf => pow,
    hypot => hypot,
    copysign => copysign,
    atan2 => atan2,
    min => fmin,
    max => fmax,
);

/// Euclidean remainder, always in `[0, modulus)` for positive `modulus`.
#[inline]
pub(crate) fn rem_euclid(x: f64, modulus: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.rem_euclid(modulus)
    }
    #[cfg(not(feature = "std"))]
    {
        let r = crate::libm::fmod(x, modulus);
        if r < 0.0 {
            r + abs(modulus)
        } else {
            r
        }
    }
}

/// Same semantics as `f64::signum`.
#[inline]
pub(crate) fn signum(x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else {
        copysign(1.0, x)
    }
}
