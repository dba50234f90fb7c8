use std::fmt;

/// A finished BCF archive, ready to be handed to an attachment store.
#[derive(Clone, PartialEq, Eq)]
pub struct BcfPackage {
    /// Archive file name, always ending in `.bcfzip`
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Archive entry names in the order they were written
    pub entries: Vec<String>,
}

impl BcfPackage {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for BcfPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BcfPackage")
            .field("file_name", &self.file_name)
            .field("bytes", &self.bytes.len())
            .field("entries", &self.entries)
            .finish()
    }
}
