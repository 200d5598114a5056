//! Post-pass over the printpdf output with lopdf: URI link annotations and a
//! content-derived trailer `/ID`.

use std::collections::BTreeMap;

use lopdf::{dictionary, Document, Object, ObjectId, StringFormat};
use sha2::{Digest, Sha256};

use crate::errors::ResumeError;

/// A clickable area on one page, in PDF points (origin bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub struct PageLink {
    pub page: usize,
    /// `[x1, y1, x2, y2]`
    pub rect: [f32; 4],
    pub url: String,
}

fn lopdf_error(e: lopdf::Error) -> ResumeError {
    ResumeError::Render(format!("Failed to post-process PDF: {e}"))
}

/// Reloads `pdf`, adds one `/Link` annotation per entry of `links`, replaces
/// the trailer `/ID` with a digest of the content and serializes it again.
/// The same input always yields the same bytes.
pub fn finalize_pdf(pdf: &[u8], links: &[PageLink]) -> Result<Vec<u8>, ResumeError> {
    let mut doc = Document::load_mem(pdf).map_err(lopdf_error)?;
    attach_uri_links(&mut doc, links)?;
    stamp_content_id(&mut doc)?;

    let mut out = Vec::new();
    doc.save_to(&mut out).map_err(|e| lopdf_error(e.into()))?;
    Ok(out)
}

pub fn attach_uri_links(doc: &mut Document, links: &[PageLink]) -> Result<(), ResumeError> {
    if links.is_empty() {
        return Ok(());
    }
    let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
    annotate_pages(doc, &page_ids, links)
}

fn annotate_pages(
    doc: &mut Document,
    page_ids: &[ObjectId],
    links: &[PageLink],
) -> Result<(), ResumeError> {
    let mut annots_by_page: BTreeMap<usize, Vec<Object>> = BTreeMap::new();
    for link in links {
        if link.page >= page_ids.len() {
            return Err(ResumeError::Render(format!(
                "Link to '{}' placed on page {} of {}",
                link.url,
                link.page + 1,
                page_ids.len()
            )));
        }
        let action = dictionary! {
            "Type" => "Action",
            "S" => "URI",
            "URI" => Object::string_literal(link.url.as_str()),
        };
        let rect: Vec<Object> = link.rect.iter().map(|v| Object::Real(*v)).collect();
        let annot = dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "Rect" => rect,
            "Border" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(0)],
            "A" => action,
        };
        let annot_id = doc.add_object(annot);
        annots_by_page
            .entry(link.page)
            .or_default()
            .push(Object::Reference(annot_id));
    }

    for (page, annots) in annots_by_page {
        match doc.get_object_mut(page_ids[page]) {
            Ok(Object::Dictionary(page_dict)) => page_dict.set("Annots", Object::Array(annots)),
            _ => {
                return Err(ResumeError::Render(format!(
                    "Page {} is not a dictionary; cannot attach {} link(s)",
                    page + 1,
                    annots.len()
                )))
            }
        }
    }
    Ok(())
}

/// Sets both halves of the trailer `/ID` to the first 16 bytes of the
/// SHA-256 of the document serialized without an `/ID`.
fn stamp_content_id(doc: &mut Document) -> Result<(), ResumeError> {
    doc.trailer.remove(b"ID");
    let mut unstamped = Vec::new();
    doc.save_to(&mut unstamped).map_err(|e| lopdf_error(e.into()))?;

    let digest = Sha256::digest(&unstamped);
    let id = Object::String(digest[..16].to_vec(), StringFormat::Hexadecimal);
    doc.trailer.set("ID", Object::Array(vec![id.clone(), id]));
    Ok(())
}
