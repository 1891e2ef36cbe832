use rand::Rng;

/// An inclusive `[start, end]` span, used for durations and delays that may
/// be either fixed or randomized.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Range<T> {
    pub start: T,
    pub end: T,
}

impl<T: Copy> Range<T> {
    /// A degenerate span holding a single value.
    pub fn fixed(value: T) -> Self {
        Self {
            start: value,
            end: value,
        }
    }
}

impl<T: Copy> From<[T; 2]> for Range<T> {
    fn from(value: [T; 2]) -> Self {
        Self {
            start: value[0],
            end: value[1],
        }
    }
}

impl<T: Copy> From<T> for Range<T> {
    fn from(value: T) -> Self {
        Self::fixed(value)
    }
}

impl Range<u64> {
    /// Draws a value from the span. A fixed (or inverted) span always yields
    /// `start`, so configurations without randomness stay deterministic.
    pub fn pick(&self) -> u64 {
        match self.start >= self.end {
            true => self.start,
            false => rand::thread_rng().gen_range(self.start..=self.end),
        }
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Range<T>
where
    T: serde::Serialize + Copy,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize the Range as an array [start, end]
        [self.start, self.end].serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Range<T>
where
    T: serde::Deserialize<'de> + Copy,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Deserialize from an array [start, end]
        let array: [T; 2] = serde::Deserialize::deserialize(deserializer)?;
        Ok(Self::from(array))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_creation() {
        let range = Range { start: 10, end: 20 };
        assert_eq!(range.start, 10);
        assert_eq!(range.end, 20);
    }

    #[test]
    fn test_range_from_array() {
        let array = [5, 15];
        let range: Range<u8> = array.into();
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 15);
    }

    #[test]
    fn test_range_from_scalar() {
        let range: Range<u64> = 2500.into();
        assert_eq!(range, Range::fixed(2500));
    }

    #[test]
    fn test_range_pick_fixed() {
        let range = Range::fixed(2500u64);
        assert_eq!(range.pick(), 2500);

        // An inverted span behaves as fixed on its start value.
        let inverted = Range {
            start: 300u64,
            end: 100,
        };
        assert_eq!(inverted.pick(), 300);
    }

    #[test]
    fn test_range_pick_bounds() {
        let range = Range {
            start: 2000u64,
            end: 3000,
        };
        for _ in 0..100 {
            let value = range.pick();
            assert!((2000..=3000).contains(&value));
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_range_serialize() {
            let range = Range { start: 6, end: 12 };
            let json = serde_json::to_string(&range).unwrap();
            assert_eq!(json, r#"[6,12]"#);
        }

        #[test]
        fn test_range_deserialize() {
            let json = r#"[7,14]"#;
            let range: Range<u8> = serde_json::from_str(json).unwrap();
            assert_eq!(range.start, 7);
            assert_eq!(range.end, 14);
        }
    }
}
