pub trait Reversed {
    fn reversed(&self) -> Vec<u8>;
}

impl Reversed for [u8] {
    fn reversed(&self) -> Vec<u8> {
        self.iter().rev().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_bytes() {
        assert_eq!([1u8, 2, 3].reversed(), vec![3, 2, 1]);
        assert_eq!([7u8].reversed(), vec![7]);
        assert!([0u8; 0].reversed().is_empty());
    }

    #[test]
    fn reverse_is_self_inverse() {
        let data = b"bogus key material".to_vec();

        assert_eq!(data.reversed().reversed(), data);
    }
}
