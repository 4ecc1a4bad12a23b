//! `zeroize_support` behavior

use apmath::ApInt;
use zeroize::Zeroize;

#[test]
fn zeroize_clears_the_value_in_place() {
    for w in [1usize, 64, 65, 256] {
        let mut x = ApInt::umax(w);
        x.zeroize();
        assert!(x.is_zero());
        assert_eq!(x.bitwidth(), w);
    }
}
