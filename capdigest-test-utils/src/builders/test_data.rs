//! Builders for hash input data

/// Byte pattern of generated input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataPattern {
    /// `i % 256` at offset `i`
    Sequential,
    /// One byte repeated
    Repeated(u8),
    /// Given text repeated until the size is reached
    Text(String),
}

/// Builder for deterministic hash inputs
///
/// # Examples
///
/// ```rust
/// use capdigest_test_utils::TestDataBuilder;
///
/// let data = TestDataBuilder::new().with_size(300).build();
/// assert_eq!(data.len(), 300);
/// assert_eq!(data[257], 1);
/// ```
#[derive(Debug, Clone)]
pub struct TestDataBuilder {
    size: usize,
    pattern: DataPattern,
}

impl TestDataBuilder {
    /// Create a builder for 1KB of sequential data
    pub fn new() -> Self {
        Self {
            size: 1024,
            pattern: DataPattern::Sequential,
        }
    }

    /// Set the generated size in bytes
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the byte pattern
    pub fn with_pattern(mut self, pattern: DataPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Repeat `text` until the size is reached
    pub fn with_text(self, text: &str) -> Self {
        self.with_pattern(DataPattern::Text(text.to_string()))
    }

    /// Generate the data
    pub fn build(&self) -> Vec<u8> {
        match &self.pattern {
            DataPattern::Sequential => (0..self.size).map(|i| (i % 256) as u8).collect(),
            DataPattern::Repeated(byte) => vec![*byte; self.size],
            DataPattern::Text(text) if text.is_empty() => vec![0u8; self.size],
            DataPattern::Text(text) => text.bytes().cycle().take(self.size).collect(),
        }
    }

    /// Generate the data split into chunks of at most `chunk_size` bytes
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn build_chunks(&self, chunk_size: usize) -> Vec<Vec<u8>> {
        self.build()
            .chunks(chunk_size)
            .map(|chunk| chunk.to_vec())
            .collect()
    }
}

impl Default for TestDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_pattern() {
        let data = TestDataBuilder::new().with_size(258).build();
        assert_eq!(data[0], 0);
        assert_eq!(data[255], 255);
        assert_eq!(data[256], 0);
    }

    #[test]
    fn test_text_pattern() {
        let data = TestDataBuilder::new().with_size(7).with_text("abc").build();
        assert_eq!(data, b"abcabca".to_vec());
    }

    #[test]
    fn test_chunks_cover_data() {
        let builder = TestDataBuilder::new()
            .with_size(10)
            .with_pattern(DataPattern::Repeated(7));
        let chunks = builder.build_chunks(4);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].len(), 2);
        assert_eq!(chunks.concat(), builder.build());
    }
}
