use super::document_id::DocumentId;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Docx,
    Text,
}

impl ContentType {
    /// Every supported format, in suffix-matching precedence order.
    pub const ALL: [ContentType; 3] = [Self::Pdf, Self::Docx, Self::Text];

    /// Selects the decoder by filename suffix, ignoring case.
    ///
    /// Suffixes are checked in the order `.pdf`, `.docx`, `.txt`; anything
    /// else, including a missing extension, yields `None`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let name = filename.to_lowercase();

        Self::ALL.into_iter().find(|content_type| {
            name.strip_suffix(content_type.extension())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Text => "txt",
        }
    }
}

impl Document {
    pub fn new(filename: String, content_type: ContentType, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            content_type,
            size_bytes,
        }
    }
}
