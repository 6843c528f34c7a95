pub mod report;

/// Deterministic primality test by trial division over the 6k±1 wheel.
///
/// Total over `i64`: anything below 2 is not prime, and no input panics.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i: i64 = 5;
    // an overflowing square is necessarily larger than n
    while i.checked_mul(i).is_some_and(|square| square <= n) {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
