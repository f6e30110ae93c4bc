use crate::document::Document;
use crc32fast::Hasher;

/// Derive the id seed for a document from its document id using CRC32.
pub fn document_seed(document_id: &str) -> String {
    let mut buff = String::from(document_id);
    if !document_id.starts_with("form://") {
        buff = format!("form://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for nodes within a document.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String, // Document seed (CRC32)
    count: u32,   // Sequential counter
}

impl IdGenerator {
    pub fn new(document_id: &str) -> Self {
        Self {
            seed: document_seed(document_id),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential id.
    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Next id not already present in `document`. A hydrated document may
    /// already contain ids from an earlier generator run; skipping them
    /// keeps id uniqueness intact.
    pub fn next_unused(&mut self, document: &Document) -> String {
        loop {
            let id = self.next_id();
            if !document.contains(&id) {
                return id;
            }
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
