use std::{fmt, sync::Arc};

use thiserror::Error;
use uuid::Uuid;

/// Extensions the certificate picker advertises alongside `image/*`.
pub static CERTIFICATE_EXTENSIONS: &[&str] = &[".jpeg", ".png", ".jpg", ".gif"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CertificateId(String);

impl CertificateId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CertificateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Self-contained `data:` URL holding a file's bytes, usable directly as an
/// image source. Shared, so cloning a record never copies the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl(Arc<str>);

impl DataUrl {
    /// Accepts anything the reader hands back as a `data:` URL. An empty file
    /// reads as a bare `data:`.
    pub fn parse(value: impl Into<String>) -> Result<Self, IntakeError> {
        let value = value.into();
        if value.starts_with("data:") {
            Ok(Self(value.into()))
        } else {
            Err(IntakeError::NotDataUrl)
        }
    }

    /// Media type from the header, e.g. `image/png` for
    /// `data:image/png;base64,...`. Empty when the reader could not tell.
    pub fn mime(&self) -> &str {
        let header = &self.0["data:".len()..self.0.find(',').unwrap_or(self.0.len())];
        header.split(';').next().unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Couldn't start reading {0}")]
    Reader(String),
    #[error("Reading {0} failed")]
    Failed(String),
    #[error("Reader result was not a data URL")]
    NotDataUrl,
}

/// One uploaded certificate. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    id: CertificateId,
    url: DataUrl,
    name: String,
}

impl Certificate {
    pub fn id(&self) -> &CertificateId {
        &self.id
    }

    pub fn url(&self) -> &DataUrl {
        &self.url
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// In-memory certificate collection, in read-completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    certificates: Vec<Certificate>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a freshly read file and returns its new id.
    pub fn insert(&mut self, name: impl Into<String>, url: DataUrl) -> CertificateId {
        let mut id = CertificateId::generate();
        while self.contains(&id) {
            id = CertificateId::generate();
        }
        let name = name.into();
        log::debug!("adding certificate {name} as {id}");
        self.certificates.push(Certificate {
            id: id.clone(),
            url,
            name,
        });
        id
    }

    /// Handles one finished read: a successful read is appended, a failed one
    /// is logged and dropped without touching the gallery.
    pub fn complete(
        &mut self,
        name: impl Into<String>,
        read: Result<DataUrl, IntakeError>,
    ) -> Option<CertificateId> {
        let name = name.into();
        match read {
            Ok(url) => Some(self.insert(name, url)),
            Err(e) => {
                log::debug!("dropping {name}: {e}");
                None
            }
        }
    }

    /// Removes the certificate with `id`, if any. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &CertificateId) -> Option<Certificate> {
        let index = self.certificates.iter().position(|c| &c.id == id)?;
        Some(self.certificates.remove(index))
    }

    pub fn contains(&self, id: &CertificateId) -> bool {
        self.certificates.iter().any(|c| &c.id == id)
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Certificate> {
        self.certificates.iter()
    }
}

/// Advisory picker filter: `image/*` plus a list of extensions.
///
/// A file is admitted when either its MIME type is an image type or its name
/// carries one of the extensions. This only screens what the user offers; it
/// never inspects file contents.
#[derive(Debug, Clone, Copy)]
pub struct AcceptFilter {
    extensions: &'static [&'static str],
}

impl Default for AcceptFilter {
    fn default() -> Self {
        Self {
            extensions: CERTIFICATE_EXTENSIONS,
        }
    }
}

impl AcceptFilter {
    /// Value for an `<input type="file">` `accept` attribute.
    pub fn accept_attr(&self) -> String {
        let mut parts = vec!["image/*"];
        parts.extend(self.extensions.iter().copied());
        parts.join(",")
    }

    pub fn admits(&self, name: &str, mime: &str) -> bool {
        if mime.starts_with("image/") {
            return true;
        }
        let name = name.to_ascii_lowercase();
        self.extensions.iter().any(|ext| name.ends_with(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn png(tag: &str) -> DataUrl {
        DataUrl::parse(format!("data:image/png;base64,{tag}")).unwrap()
    }

    fn names(gallery: &Gallery) -> Vec<&str> {
        gallery.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn test_insert_assigns_unique_ids() {
        let mut gallery = Gallery::new();
        let ids = (0..50)
            .map(|i| gallery.insert(format!("cert-{i}.png"), png("AAAA")))
            .collect::<Vec<_>>();

        assert_eq!(gallery.len(), 50);
        let unique = ids.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 50);
        assert!(ids.iter().all(|id| gallery.contains(id)));
    }

    #[test]
    fn test_same_file_twice_is_two_records() {
        let mut gallery = Gallery::new();
        let first = gallery.insert("cert.png", png("AAAA"));
        let second = gallery.insert("cert.png", png("AAAA"));

        assert_ne!(first, second);
        assert_eq!(names(&gallery), vec!["cert.png", "cert.png"]);
    }

    #[test]
    fn test_order_follows_completion() {
        // b.jpg finished reading first
        let mut gallery = Gallery::new();
        gallery.insert("b.jpg", png("Qg"));
        gallery.insert("a.png", png("QQ"));
        assert_eq!(names(&gallery), vec!["b.jpg", "a.png"]);

        // a.png finished reading first
        let mut gallery = Gallery::new();
        gallery.insert("a.png", png("QQ"));
        gallery.insert("b.jpg", png("Qg"));
        assert_eq!(names(&gallery), vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn test_remove_present_id() {
        let mut gallery = Gallery::new();
        gallery.insert("one.png", png("MQ"));
        let two = gallery.insert("two.png", png("Mg"));
        gallery.insert("three.png", png("Mw"));

        let removed = gallery.remove(&two).expect("two.png should be removed");
        assert_eq!(removed.name(), "two.png");
        assert_eq!(gallery.len(), 2);
        assert!(!gallery.contains(&two));
        assert_eq!(names(&gallery), vec!["one.png", "three.png"]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut gallery = Gallery::new();
        gallery.insert("one.png", png("MQ"));
        let before = gallery.clone();

        assert!(gallery.remove(&CertificateId::generate()).is_none());
        assert_eq!(gallery, before);
    }

    #[test]
    fn test_remove_twice_matches_remove_once() {
        let mut once = Gallery::new();
        once.insert("keep.png", png("MQ"));
        let id = once.insert("drop.png", png("Mg"));
        let mut twice = once.clone();

        once.remove(&id);
        twice.remove(&id);
        assert!(twice.remove(&id).is_none());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_add_then_remove_restores_empty() {
        let mut gallery = Gallery::new();
        assert!(gallery.is_empty());

        let id = gallery.insert("cert.png", png("AAAA"));
        assert_eq!(gallery.len(), 1);
        let cert = gallery.iter().next().unwrap();
        assert_eq!(cert.name(), "cert.png");
        assert_eq!(cert.id(), &id);

        gallery.remove(&id);
        assert_eq!(gallery, Gallery::new());
    }

    #[test]
    fn test_data_url_parsing() {
        let url = DataUrl::parse("data:image/gif;base64,R0lGOD").unwrap();
        assert_eq!(url.mime(), "image/gif");
        assert_eq!(url.as_str(), "data:image/gif;base64,R0lGOD");

        let untyped = DataUrl::parse("data:;base64,AAAA").unwrap();
        assert_eq!(untyped.mime(), "");

        assert_eq!(
            DataUrl::parse("https://example.com/cert.png"),
            Err(IntakeError::NotDataUrl)
        );
        assert_eq!(DataUrl::parse("data:image/png").unwrap().mime(), "image/png");
        assert_eq!(DataUrl::parse(""), Err(IntakeError::NotDataUrl));
    }

    #[test]
    fn test_empty_file_read_is_kept() {
        let url = DataUrl::parse("data:").expect("empty file should still read");
        assert_eq!(url.mime(), "");
        assert_eq!(url.as_str(), "data:");

        let mut gallery = Gallery::new();
        let id = gallery.complete("empty.png", Ok(url));
        assert!(id.is_some_and(|id| gallery.contains(&id)));
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn test_complete_appends_successful_reads() {
        let mut gallery = Gallery::new();
        let first = gallery.complete("a.png", Ok(png("QQ"))).unwrap();
        let second = gallery.complete("b.jpg", Ok(png("Qg"))).unwrap();

        assert_ne!(first, second);
        assert_eq!(names(&gallery), vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn test_complete_drops_failed_reads() {
        let mut gallery = Gallery::new();
        gallery.complete("keep.png", Ok(png("MQ")));
        let before = gallery.clone();

        let failures = [
            IntakeError::Reader("a.png".to_string()),
            IntakeError::Failed("b.png".to_string()),
            IntakeError::NotDataUrl,
        ];
        for err in failures {
            assert!(gallery.complete("broken.png", Err(err)).is_none());
        }
        assert_eq!(gallery, before);
    }

    #[test]
    fn test_screened_batch_records_each_completed_read() {
        let filter = AcceptFilter::default();
        let batch = [
            ("cert.png", "image/png", true),
            ("notes.txt", "text/plain", true),
            ("badge.gif", "", false),
            ("scan.jpg", "image/jpeg", true),
        ];

        let mut gallery = Gallery::new();
        for (name, mime, read_ok) in batch {
            if !filter.admits(name, mime) {
                continue;
            }
            let read = if read_ok {
                Ok(png("AAAA"))
            } else {
                Err(IntakeError::Failed(name.to_string()))
            };
            gallery.complete(name, read);
        }
        assert_eq!(names(&gallery), vec!["cert.png", "scan.jpg"]);
    }

    #[test]
    fn test_cloned_record_shares_payload() {
        let mut gallery = Gallery::new();
        gallery.insert("cert.png", png("AAAA"));
        let copy = gallery.clone();

        let a = gallery.iter().next().unwrap().url();
        let b = copy.iter().next().unwrap().url();
        assert!(Arc::ptr_eq(&a.0, &b.0));
    }

    #[test]
    fn test_accept_filter() {
        let filter = AcceptFilter::default();
        assert_eq!(filter.accept_attr(), "image/*,.jpeg,.png,.jpg,.gif");

        assert!(filter.admits("cert.png", "image/png"));
        assert!(filter.admits("scan.webp", "image/webp"));
        assert!(filter.admits("PHOTO.JPG", ""));
        assert!(filter.admits("badge.gif", "application/octet-stream"));
        assert!(!filter.admits("notes.txt", "text/plain"));
        assert!(!filter.admits("archive.png.zip", "application/zip"));
    }

    #[test]
    fn test_intake_error_messages() {
        assert_eq!(
            IntakeError::Failed("cert.png".to_string()).to_string(),
            "Reading cert.png failed"
        );
        assert_eq!(
            IntakeError::Reader("cert.png".to_string()).to_string(),
            "Couldn't start reading cert.png"
        );
    }
}
