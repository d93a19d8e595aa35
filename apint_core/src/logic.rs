mod bitwise;
mod casting;
mod cmp;
mod div;
mod float;
mod misc;
mod mul;
mod numeric;
mod permute;
#[cfg(feature = "rand_support")]
mod rand;
mod std_ops;
mod strings;
mod sum;

pub use numeric::{gcd, solve_quadratic_equation_wrap, Magics, MagicsU};
