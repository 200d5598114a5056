//! printpdf-backed `DocumentBuilder`.
//!
//! Rows are placed as they arrive (so page breaks and icon failures surface
//! from `add_row`), but page content is only emitted in `finish`, once the
//! total page count for the footer is known.
//!
//! Font and image resources get fixed names instead of printpdf's random
//! ids, so the same input always produces the same bytes.

use std::collections::HashMap;

use printpdf::font::BuiltinFont;
use printpdf::graphics::{LinePoint, PaintMode, Point, Polygon, PolygonRing, WindingOrder};
use printpdf::image::RawImage;
use printpdf::matrix::TextMatrix;
use printpdf::ops::Op;
use printpdf::text::TextItem;
use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::{FontId, Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, XObjectId};
use tracing::{debug, info};

use super::fonts::{FontFace, FontSet};
use super::icons::IconStore;
use super::links::{finalize_pdf, PageLink};
use super::pagination::{Paginator, Placement};
use super::DocumentBuilder;
use crate::errors::ResumeError;
use crate::layout::font_metrics::PT_TO_MM;
use crate::layout::wrap::wrap_text;
use crate::layout::{
    get_metrics, Align, CellContent, FontFamily, Icon, ImageCell, PageConfig, Rgb, Row, TextCell,
    TextStyle,
};

/// Baseline offset below the top of a text line, as a fraction of the font size.
const ASCENT: f32 = 0.8;
const PAGE_NUMBER_SIZE: f32 = 9.0;

fn mm_to_pt(mm: f32) -> Pt {
    Mm(mm).into_pt()
}

fn to_pdf_color(c: Rgb) -> printpdf::color::Color {
    printpdf::color::Color::Rgb(printpdf::Rgb::new(
        c.r as f32 / 255.0,
        c.g as f32 / 255.0,
        c.b as f32 / 255.0,
        None,
    ))
}

enum Faces {
    Embedded(HashMap<FontFace, FontId>),
    Builtin,
}

enum FontRef<'a> {
    Embedded(&'a FontId),
    Builtin(BuiltinFont),
}

struct EmbeddedImage {
    id: XObjectId,
    width_px: f32,
    height_px: f32,
}

struct PlacedRow {
    row: Row,
    at: Placement,
}

/// Operations and links collected for one page.
#[derive(Default)]
struct PageCanvas {
    ops: Vec<Op>,
    links: Vec<PageLink>,
}

pub struct PdfBuilder {
    document: PdfDocument,
    page: PageConfig,
    faces: Faces,
    family: FontFamily,
    icons: IconStore,
    images: HashMap<Icon, EmbeddedImage>,
    paginator: Paginator,
    placed: Vec<PlacedRow>,
    page_numbers: bool,
}

impl PdfBuilder {
    pub fn new(
        title: &str,
        page: PageConfig,
        fonts: FontSet,
        icons: IconStore,
        page_numbers: bool,
    ) -> Self {
        let mut document = PdfDocument::new(title);
        let family = fonts.family();
        let faces = match fonts {
            FontSet::Custom(custom) => {
                let mut ids = HashMap::new();
                for (face, parsed) in custom.iter() {
                    let id = FontId(face.resource_name().to_string());
                    document.resources.fonts.map.insert(id.clone(), parsed.clone());
                    ids.insert(face, id);
                }
                Faces::Embedded(ids)
            }
            FontSet::Builtin => Faces::Builtin,
        };

        PdfBuilder {
            document,
            paginator: Paginator::new(&page),
            page,
            faces,
            family,
            icons,
            images: HashMap::new(),
            placed: Vec::new(),
            page_numbers,
        }
    }

    /// Pages used so far.
    pub fn page_count(&self) -> usize {
        self.paginator.page_count()
    }

    fn embed_icon(&mut self, icon: Icon) -> Result<(), ResumeError> {
        if self.images.contains_key(&icon) {
            return Ok(());
        }
        let bytes = self.icons.read(icon)?;
        let mut warnings = Vec::new();
        let raw = RawImage::decode_from_bytes(&bytes, &mut warnings).map_err(|e| {
            ResumeError::Render(format!("Failed to decode icon '{}': {e}", icon.file_name()))
        })?;
        let (width_px, height_px) = (raw.width as f32, raw.height as f32);
        if width_px <= 0.0 || height_px <= 0.0 {
            return Err(ResumeError::Render(format!(
                "Icon '{}' is empty",
                icon.file_name()
            )));
        }

        let id = XObjectId(format!("icon-{}", icon.file_name().trim_end_matches(".png")));
        self.document
            .resources
            .xobjects
            .map
            .insert(id.clone(), XObject::Image(raw));
        debug!(icon = icon.file_name(), width_px, height_px, "Embedded icon");
        self.images.insert(icon, EmbeddedImage { id, width_px, height_px });
        Ok(())
    }

    fn font_ref(&self, face: FontFace) -> FontRef<'_> {
        match &self.faces {
            Faces::Embedded(ids) => ids
                .get(&face)
                .map(FontRef::Embedded)
                .unwrap_or_else(|| FontRef::Builtin(face.builtin())),
            Faces::Builtin => FontRef::Builtin(face.builtin()),
        }
    }

    fn pdf_y(&self, y_mm: f32) -> Pt {
        mm_to_pt(self.page.height_mm - y_mm)
    }

    fn draw_row(&self, canvas: &mut PageCanvas, row: &Row, y: f32) {
        if let Some(color) = row.background {
            self.draw_bar(canvas, y, row.height, color);
        }

        let row_total: u32 = row.cols.iter().map(|c| c.width as u32).sum();
        let mut x = self.page.margin_left_mm;
        for col in &row.cols {
            let width = self.page.column_width_mm(col.width, row_total);
            match &col.content {
                CellContent::Text(cell) => self.draw_text(canvas, cell, x, y, width),
                CellContent::Image(cell) => {
                    self.draw_image(canvas, cell, x, y, width, row.height)
                }
                CellContent::Empty => {}
            }
            x += width;
        }
    }

    fn draw_bar(&self, canvas: &mut PageCanvas, y: f32, height: f32, color: Rgb) {
        let x1 = mm_to_pt(self.page.margin_left_mm);
        let x2 = mm_to_pt(self.page.margin_left_mm + self.page.content_width_mm());
        let top = self.pdf_y(y);
        let bottom = self.pdf_y(y + height);
        let corner = |x: Pt, y: Pt| LinePoint { p: Point { x, y }, bezier: false };

        let polygon = Polygon {
            rings: vec![PolygonRing {
                points: vec![
                    corner(x1, bottom),
                    corner(x2, bottom),
                    corner(x2, top),
                    corner(x1, top),
                ],
            }],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::EvenOdd,
        };
        canvas.ops.push(Op::SetFillColor { col: to_pdf_color(color) });
        canvas.ops.push(Op::DrawPolygon { polygon });
    }

    fn draw_text(&self, canvas: &mut PageCanvas, cell: &TextCell, x: f32, y: f32, width: f32) {
        let style = &cell.style;
        let metrics = get_metrics(self.family, style.style);
        let avail = (width - style.left).max(0.0);
        let lines = wrap_text(&cell.text, metrics, style.size, avail);
        if lines.is_empty() {
            return;
        }

        let line_height = self.page.line_height_mm(style.size);
        let font = self.font_ref(FontFace::for_style(style.style, style.variant));
        let widths: Vec<f32> = lines.iter().map(|l| metrics.width_mm(l, style.size)).collect();
        let top = y + style.top;

        canvas.ops.push(Op::StartTextSection);
        canvas.ops.push(Op::SetFillColor { col: to_pdf_color(style.color) });
        match &font {
            FontRef::Embedded(id) => canvas.ops.push(Op::SetFontSize {
                size: Pt(style.size),
                font: (*id).clone(),
            }),
            FontRef::Builtin(builtin) => canvas.ops.push(Op::SetFontSizeBuiltinFont {
                size: Pt(style.size),
                font: builtin.clone(),
            }),
        }
        for (i, (line, line_width)) in lines.iter().zip(&widths).enumerate() {
            let line_x = aligned_x(style, x, width, *line_width);
            let baseline = top + style.size * PT_TO_MM * ASCENT + i as f32 * line_height;
            canvas.ops.push(Op::SetTextMatrix {
                matrix: TextMatrix::Translate(mm_to_pt(line_x), self.pdf_y(baseline)),
            });
            let items = vec![TextItem::Text(line.clone())];
            match &font {
                FontRef::Embedded(id) => canvas.ops.push(Op::WriteText {
                    items,
                    font: (*id).clone(),
                }),
                FontRef::Builtin(builtin) => canvas.ops.push(Op::WriteTextBuiltinFont {
                    items,
                    font: builtin.clone(),
                }),
            }
        }
        canvas.ops.push(Op::EndTextSection);

        if let Some(url) = &cell.hyperlink {
            let widest = widths.iter().copied().fold(0.0_f32, f32::max);
            let left = aligned_x(style, x, width, widest);
            let bottom = top + lines.len() as f32 * line_height;
            canvas.links.push(PageLink {
                page: 0,
                rect: [
                    mm_to_pt(left).0,
                    self.pdf_y(bottom).0,
                    mm_to_pt(left + widest).0,
                    self.pdf_y(top).0,
                ],
                url: url.clone(),
            });
        }
    }

    fn draw_image(
        &self,
        canvas: &mut PageCanvas,
        cell: &ImageCell,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) {
        // Embedded by add_row; a miss here means the row bypassed it.
        let Some(image) = self.images.get(&cell.icon) else {
            debug!(icon = cell.icon.file_name(), "Icon not embedded, skipping");
            return;
        };
        let avail_w = (width - cell.left).max(0.0);
        let avail_h = (height - cell.top).max(0.0);
        let fit = (avail_w / image.width_px).min(avail_h / image.height_px);
        let mm_per_px = fit * cell.percent / 100.0;
        if mm_per_px <= 0.0 {
            return;
        }
        let draw_w = image.width_px * mm_per_px;
        let draw_h = image.height_px * mm_per_px;

        // At 72 dpi one image pixel is one point.
        let transform = XObjectTransform {
            translate_x: Some(mm_to_pt(x + cell.left)),
            translate_y: Some(self.pdf_y(y + cell.top + draw_h)),
            scale_x: Some(mm_to_pt(draw_w).0 / image.width_px),
            scale_y: Some(mm_to_pt(draw_h).0 / image.height_px),
            rotate: None,
            dpi: Some(72.0),
        };
        canvas.ops.push(Op::UseXobject {
            id: image.id.clone(),
            transform,
        });
    }

    fn draw_page_number(&self, canvas: &mut PageCanvas, number: usize, total: usize) {
        let cell = TextCell {
            text: format!("{number}/{total}"),
            style: TextStyle::new(PAGE_NUMBER_SIZE).align(Align::Right),
            hyperlink: None,
        };
        let line_height = self.page.line_height_mm(PAGE_NUMBER_SIZE);
        let y = self.page.content_bottom_mm() + (self.page.margin_bottom_mm - line_height) / 2.0;
        let (x, width) = (self.page.margin_left_mm, self.page.content_width_mm());
        self.draw_text(canvas, &cell, x, y, width);
    }
}

fn aligned_x(style: &TextStyle, x: f32, width: f32, line_width: f32) -> f32 {
    match style.align {
        Align::Left => x + style.left,
        Align::Right => x + width - line_width,
        Align::Center => x + style.left + ((width - style.left) - line_width) / 2.0,
    }
}

impl DocumentBuilder for PdfBuilder {
    fn add_row(&mut self, row: &Row) -> Result<(), ResumeError> {
        for col in &row.cols {
            if let CellContent::Image(cell) = &col.content {
                self.embed_icon(cell.icon)?;
            }
        }
        let at = self.paginator.place(row.height);
        debug!(page = at.page + 1, y_mm = at.y_mm, height = row.height, "Placed row");
        self.placed.push(PlacedRow { row: row.clone(), at });
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, ResumeError> {
        let total = self.page_count();
        let mut canvases: Vec<PageCanvas> = (0..total).map(|_| PageCanvas::default()).collect();

        for placed in &self.placed {
            self.draw_row(&mut canvases[placed.at.page], &placed.row, placed.at.y_mm);
        }
        if self.page_numbers {
            for (i, canvas) in canvases.iter_mut().enumerate() {
                self.draw_page_number(canvas, i + 1, total);
            }
        }

        let (width, height) = (Mm(self.page.width_mm), Mm(self.page.height_mm));
        let mut links = Vec::new();
        let mut pages = Vec::with_capacity(total);
        for (index, canvas) in canvases.into_iter().enumerate() {
            links.extend(
                canvas
                    .links
                    .into_iter()
                    .map(|link| PageLink { page: index, ..link }),
            );
            pages.push(PdfPage::new(width, height, canvas.ops));
        }

        let mut document = self.document;
        document.pages = pages;
        let mut bytes = Vec::new();
        let mut warnings = Vec::new();
        document.save_writer(&mut bytes, &PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            debug!(count = warnings.len(), "printpdf reported warnings while saving");
        }

        let bytes = finalize_pdf(&bytes, &links)?;
        info!(pages = total, links = links.len(), bytes = bytes.len(), "PDF assembled");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_page_config, Col, TextStyle};

    fn shipped_icons() -> IconStore {
        IconStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons-png"))
    }

    fn builder(icons: IconStore) -> PdfBuilder {
        PdfBuilder::new("test", default_page_config(), FontSet::Builtin, icons, true)
    }

    #[test]
    fn test_aligned_x() {
        let style = TextStyle::new(10.0);
        assert_eq!(aligned_x(&style, 10.0, 100.0, 20.0), 10.0);
        assert_eq!(aligned_x(&style.clone().align(Align::Right), 10.0, 100.0, 20.0), 90.0);
        assert_eq!(aligned_x(&style.align(Align::Center), 10.0, 100.0, 20.0), 50.0);
    }

    #[test]
    fn test_missing_icon_fails_on_add_row() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = builder(IconStore::new(dir.path()));
        let row = Row::new(
            8.0,
            vec![
                Col::image(1, Icon::Phone, 60.0),
                Col::text(11, "x", TextStyle::new(10.0)),
            ],
        );
        let err = b.add_row(&row).unwrap_err();
        assert!(matches!(err, ResumeError::Render(ref m) if m.contains("phone.png")), "{err}");
    }

    #[test]
    fn test_pages_follow_row_heights() {
        let mut b = builder(shipped_icons());
        for _ in 0..60 {
            b.add_row(&Row::text(5.0, "line", TextStyle::new(9.0))).unwrap();
        }
        // 267 mm of content per page, 53 rows of 5 mm
        assert_eq!(b.page_count(), 2);
        let bytes = b.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_link_cells_become_annotations() {
        let mut b = builder(shipped_icons());
        b.add_row(&Row::new(
            8.0,
            vec![
                Col::image(1, Icon::Github, 60.0),
                Col::link(3, "github.com/x", TextStyle::new(10.0), "https://github.com/x"),
            ],
        ))
        .unwrap();
        b.add_row(&Row::text(5.0, "plain", TextStyle::new(9.0))).unwrap();
        let bytes = b.finish().unwrap();

        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        let pages: Vec<_> = doc.get_pages().into_values().collect();
        assert_eq!(pages.len(), 1);
        let page = doc.get_object(pages[0]).unwrap().as_dict().unwrap();
        assert_eq!(page.get(b"Annots").unwrap().as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_resources_have_stable_names() {
        let build = || {
            let mut b = builder(shipped_icons());
            b.add_row(&Row::new(
                8.0,
                vec![Col::image(1, Icon::Mail, 60.0), Col::text(11, "x", TextStyle::new(10.0))],
            ))
            .unwrap();
            assert_eq!(b.images[&Icon::Mail].id.0, "icon-mail");
            b.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
