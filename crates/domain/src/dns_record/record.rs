use std::fmt;
use std::sync::Arc;

/// One decoded resource record.
///
/// `data` holds the record data in presentation form (an address literal,
/// a target name, quoted text). The full zone-file line is produced by the
/// `Display` impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Arc<str>,
    pub ttl: u32,
    /// Mnemonic of the record type as received, e.g. `"A"` or `"RRSIG"`.
    pub type_label: Arc<str>,
    pub data: String,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<Arc<str>>,
        ttl: u32,
        type_label: impl Into<Arc<str>>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ttl,
            type_label: type_label.into(),
            data: data.into(),
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\tIN\t{}\t{}",
            self.name, self.ttl, self.type_label, self.data
        )
    }
}
