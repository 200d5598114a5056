#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lopdf::{Document as LopdfDocument, Object};
use resume::{DocumentSource, GenerateOptions};

pub const ICONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons-png");
pub const FONTS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts");

/// Options writing to `dir/resume.pdf`, with a fonts dir that does not exist
/// so the built-in font fallback is exercised.
pub fn options(dir: &Path, source: DocumentSource) -> GenerateOptions {
    GenerateOptions {
        source,
        output: dir.join("resume.pdf"),
        fonts_dir: dir.join("fonts"),
        icons_dir: PathBuf::from(ICONS_DIR),
        page_numbers: true,
        auto_overflow: false,
    }
}

pub fn load_pdf(path: &Path) -> LopdfDocument {
    let bytes = std::fs::read(path).expect("output PDF should exist");
    LopdfDocument::load_mem(&bytes).expect("output should be a valid PDF")
}

/// URI targets of every `/Link` annotation, page by page.
pub fn link_uris_by_page(doc: &LopdfDocument) -> Vec<Vec<String>> {
    doc.get_pages()
        .values()
        .map(|page_id| {
            let page = doc.get_object(*page_id).unwrap().as_dict().unwrap();
            let Ok(annots) = page.get(b"Annots").and_then(Object::as_array) else {
                return Vec::new();
            };
            annots
                .iter()
                .filter_map(|a| {
                    let dict = match a.as_reference() {
                        Ok(id) => doc.get_object(id).ok()?.as_dict().ok()?,
                        Err(_) => a.as_dict().ok()?,
                    };
                    if dict.get(b"Subtype").ok()?.as_name().ok()? != b"Link" {
                        return None;
                    }
                    let action = dict.get(b"A").ok()?.as_dict().ok()?;
                    let uri = action.get(b"URI").ok()?.as_str().ok()?;
                    Some(String::from_utf8_lossy(uri).into_owned())
                })
                .collect()
        })
        .collect()
}

pub fn all_link_uris(doc: &LopdfDocument) -> Vec<String> {
    link_uris_by_page(doc).into_iter().flatten().collect()
}
