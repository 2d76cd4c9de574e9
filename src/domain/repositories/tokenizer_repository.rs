pub trait TokenizerRepository: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}
