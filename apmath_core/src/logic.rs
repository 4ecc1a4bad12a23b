mod bitwise;
mod casting;
mod cmp;
mod div;
mod misc;
mod mul;
mod permute;
#[cfg(feature = "rand_support")]
mod rand;
mod strings;
mod sum;
