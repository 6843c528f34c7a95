use {
    crate::is_prime,
    derive_more::Display,
    std::{io::Write, ops::Range},
};

/// The range classified when no other range is requested.
pub const DEFAULT_RANGE: Range<i64> = 1..20;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    #[display("prime")]
    Prime,
    #[display("not prime")]
    NotPrime,
}

impl From<bool> for Verdict {
    fn from(prime: bool) -> Self {
        if prime {
            Verdict::Prime
        } else {
            Verdict::NotPrime
        }
    }
}

/// One line of the report, e.g. `7 is prime`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display("{num} is {verdict}")]
pub struct Classification {
    pub num: i64,
    pub verdict: Verdict,
}

pub fn classify(num: i64) -> Classification {
    Classification {
        num,
        verdict: Verdict::from(is_prime(num)),
    }
}

/// Classifies every value of `range` in ascending order.
pub fn classify_range(range: Range<i64>) -> impl Iterator<Item = Classification> {
    range.map(classify)
}

pub fn write_report(range: Range<i64>, out: &mut impl Write) -> std::io::Result<()> {
    for classification in classify_range(range) {
        writeln!(out, "{classification}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    #[rstest]
    #[case(2, "2 is prime")]
    #[case(1, "1 is not prime")]
    #[case(-7, "-7 is not prime")]
    #[case(19, "19 is prime")]
    fn renders_line(#[case] num: i64, #[case] expected: &str) {
        assert_eq!(classify(num).to_string(), expected);
    }

    #[rstest]
    fn default_range_classifications() {
        let primes: Vec<i64> = classify_range(DEFAULT_RANGE)
            .filter(|c| c.verdict == Verdict::Prime)
            .map(|c| c.num)
            .collect();
        assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19]);
        assert_eq!(classify_range(DEFAULT_RANGE).count(), 19);
    }

    #[rstest]
    #[case(5..5)]
    #[case(10..3)]
    fn empty_range_writes_nothing(#[case] range: Range<i64>) {
        let mut output = Vec::new();
        write_report(range, &mut output).unwrap();
        assert!(output.is_empty());
    }
}
