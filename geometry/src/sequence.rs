use std::ops::Add;

use num_traits::One;

/// Maximum number of squares drawn in the tiling overlay. Beyond this the
/// squares dwarf the spiral.
pub const MAX_TILING_SQUARES: usize = 10;

/// Upper bound on the number of terms reserved up front.
const MAX_PREALLOCATED_TERMS: usize = 1 << 16;

fn initial_capacity(len: usize) -> usize {
    len.min(MAX_PREALLOCATED_TERMS)
}

/// Returns the first `n` Fibonacci numbers, starting from `1, 1, 2, ...`.
///
/// Any `n <= 0` yields an empty sequence.
pub fn fib_sequence<T>(n: i64) -> Vec<T>
where
    T: One + Clone + Add<Output = T>,
{
    if n <= 0 {
        return vec![];
    }
    let len = usize::try_from(n).unwrap_or(usize::MAX);
    let mut seq = Vec::with_capacity(initial_capacity(len));
    seq.push(T::one());
    if len == 1 {
        return seq;
    }
    seq.push(T::one());
    while seq.len() < len {
        let next = seq[seq.len() - 1].clone() + seq[seq.len() - 2].clone();
        seq.push(next);
    }
    seq
}

/// Side lengths of the squares in the tiling overlay for a plot that reports
/// `n_numbers` terms: at least three squares, at most [`MAX_TILING_SQUARES`].
pub fn tiling_sizes(n_numbers: usize) -> Vec<u64> {
    let count = n_numbers.clamp(3, MAX_TILING_SQUARES);
    fib_sequence(count as i64)
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigUint;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn first_six() {
        assert_eq!(fib_sequence::<u64>(6), vec![1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn non_positive_is_empty() {
        assert!(fib_sequence::<u64>(0).is_empty());
        assert!(fib_sequence::<u64>(-1).is_empty());
        assert!(fib_sequence::<u64>(i64::MIN).is_empty());
    }

    #[test]
    fn single_term() {
        assert_eq!(fib_sequence::<u64>(1), vec![1]);
    }

    #[test]
    fn recurrence_holds() {
        let seq = fib_sequence::<u64>(50);
        assert_eq!(seq.len(), 50);
        assert_eq!(seq[0], 1);
        assert_eq!(seq[1], 1);
        for i in 2..seq.len() {
            assert_eq!(seq[i], seq[i - 1] + seq[i - 2]);
        }
    }

    #[test]
    fn big_terms_do_not_overflow() {
        // F(100) does not fit into a u64.
        let seq = fib_sequence::<BigUint>(100);
        assert_eq!(
            seq[99],
            "354224848179261915075".parse::<BigUint>().unwrap()
        );
        assert!(seq.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn huge_counts_reserve_a_bounded_amount() {
        assert_eq!(initial_capacity(6), 6);
        assert_eq!(initial_capacity(i64::MAX as usize), MAX_PREALLOCATED_TERMS);
        assert_eq!(initial_capacity(usize::MAX), MAX_PREALLOCATED_TERMS);
        // Growing past the reservation still yields the right terms.
        let seq = fib_sequence::<BigUint>(MAX_PREALLOCATED_TERMS as i64 + 2);
        assert_eq!(seq.len(), MAX_PREALLOCATED_TERMS + 2);
    }

    #[test]
    fn tiling_sizes_are_capped() {
        assert_eq!(tiling_sizes(0), vec![1, 1, 2]);
        assert_eq!(tiling_sizes(5), vec![1, 1, 2, 3, 5]);
        assert_eq!(tiling_sizes(20), vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }
}
