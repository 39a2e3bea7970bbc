//! Digit-sum reduction.

/// 11, 22 and 33 survive [`reduce_keeping_master`].
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce to a single digit, stopping early on a master number.
pub fn reduce_keeping_master(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n
}

/// Reduce to a single digit, master numbers included.
pub fn reduce_to_single_digit(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}
