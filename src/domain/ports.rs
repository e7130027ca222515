/// Source of the password rules the store enforces.
pub trait PolicyProvider {
    /// Minimum number of characters a password must have.
    fn min_length(&self) -> usize;
    /// Characters of which at least one must appear in a password.
    fn special_chars(&self) -> &str;
}
