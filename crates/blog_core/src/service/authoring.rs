//! Post authoring input and file payload encoding.
//!
//! # Responsibility
//! - Describe a post draft: text fields plus optional image and attachments.
//! - Encode file contents into embedded `data:` URIs.
//!
//! # Invariants
//! - Payloads are always embedded, never referenced, so they survive reloads.
//! - Encoding a draft is all-or-nothing: the first failing file aborts it.
//! - Attachment order equals input order.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Readable file supplied by the author.
pub trait FileSource {
    /// File name shown to readers.
    fn name(&self) -> &str;
    /// MIME type; empty when unknown.
    fn mime_type(&self) -> &str;
    /// Reads the whole payload.
    fn read(&self) -> io::Result<Vec<u8>>;
}

/// File on the local filesystem, typed by extension.
#[derive(Debug, Clone)]
pub struct PathFile {
    path: PathBuf,
    name: String,
    mime_type: String,
}

impl PathFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = mime_from_extension(&path).to_string();
        Self {
            path,
            name,
            mime_type,
        }
    }
}

impl FileSource for PathFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }
}

/// File whose bytes are already in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl InMemoryFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

impl FileSource for InMemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn read(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// Draft of a post before validation and encoding.
#[derive(Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub image: Option<Box<dyn FileSource>>,
    pub attachments: Vec<Box<dyn FileSource>>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            image: None,
            attachments: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: impl FileSource + 'static) -> Self {
        self.image = Some(Box::new(image));
        self
    }

    pub fn with_attachment(mut self, file: impl FileSource + 'static) -> Self {
        self.attachments.push(Box::new(file));
        self
    }
}

/// Payload read and encoded from one `FileSource`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub data_uri: String,
}

/// File could not be read for embedding.
#[derive(Debug)]
pub struct EncodingError {
    pub name: String,
    pub source: io::Error,
}

impl Display for EncodingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to encode file `{}`: {}", self.name, self.source)
    }
}

impl Error for EncodingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Reads `file` and embeds it as `data:<mime>;base64,<payload>`.
pub fn encode_file(file: &dyn FileSource) -> Result<EncodedFile, EncodingError> {
    let bytes = file.read().map_err(|source| EncodingError {
        name: file.name().to_string(),
        source,
    })?;
    let mime_type = file.mime_type().to_string();
    let data_mime = if mime_type.trim().is_empty() {
        FALLBACK_MIME
    } else {
        mime_type.as_str()
    };
    let data_uri = format!("data:{data_mime};base64,{}", STANDARD.encode(&bytes));

    Ok(EncodedFile {
        name: file.name().to_string(),
        size: bytes.len() as u64,
        mime_type,
        data_uri,
    })
}

/// Encodes the draft's image and attachments, stopping at the first failure.
pub(crate) fn encode_draft_files(
    draft: &NewPost,
) -> Result<(Option<EncodedFile>, Vec<EncodedFile>), EncodingError> {
    let image = draft.image.as_deref().map(encode_file).transpose()?;
    let attachments = draft
        .attachments
        .iter()
        .map(|file| encode_file(file.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((image, attachments))
}

fn mime_from_extension(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|value| value.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "json" => "application/json",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        _ => "",
    }
}
