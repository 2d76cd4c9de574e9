pub trait ChecksumRepository: Send + Sync {
    /// Hex digest of the UTF-8 bytes of `text`.
    fn checksum(&self, text: &str) -> String;
}
