//! Label value validation

use crate::traits::LabelElement;

/// Index of the first label that is not 0 or 1, if any
pub fn first_invalid_label<L: LabelElement>(row: &[L]) -> Option<usize> {
    row.iter().position(|label| !label.is_binary())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_invalid_label() {
        assert_eq!(first_invalid_label(&[0i32, 1, 1, 0]), None);
        assert_eq!(first_invalid_label(&[0i32, 1, 2, 0]), Some(2));
        assert_eq!(first_invalid_label(&[-1i64]), Some(0));
        assert_eq!(first_invalid_label(&[true, false]), None);
        assert_eq!(first_invalid_label::<u8>(&[]), None);
    }
}
