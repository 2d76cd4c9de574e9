use md5::{Digest, Md5};

use crate::domain::repositories::checksum_repository::ChecksumRepository;

#[derive(Debug, Default, Clone, Copy)]
pub struct Md5ChecksumRepository;

impl Md5ChecksumRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ChecksumRepository for Md5ChecksumRepository {
    fn checksum(&self, text: &str) -> String {
        let digest = Md5::digest(text.as_bytes());
        format!("{:x}", digest)
    }
}
