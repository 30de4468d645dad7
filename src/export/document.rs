//! Output PDF under construction.
//!
//! Pages are appended in order, either as a full-page image or as a copy of
//! a page from a cached source document. `finish` writes the page tree and
//! catalog; until then the document is not a valid PDF.

use crate::constants::{IMAGE_XOBJECT_NAME, OUTPUT_PDF_VERSION};
use crate::error::{StudioError, StudioResult};
use crate::pdf::SourceDocumentCache;
use crate::types::PdfPageRef;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::RgbImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use std::io::Write;

pub struct OutputDocument {
    document: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
}

impl Default for OutputDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputDocument {
    pub fn new() -> Self {
        let mut document = Document::with_version(OUTPUT_PDF_VERSION);
        let pages_id = document.new_object_id();
        Self {
            document,
            pages_id,
            page_ids: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Append a page showing `raster` edge to edge, one point per pixel
    pub fn add_image_page(&mut self, raster: &RgbImage) -> StudioResult<ObjectId> {
        let (width, height) = raster.dimensions();

        let image = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8_i64,
                "Filter" => "FlateDecode",
            },
            deflate(raster.as_raw())?,
        );
        let image_id = self.document.add_object(image);

        let content = format!("q {width} 0 0 {height} 0 0 cm /{IMAGE_XOBJECT_NAME} Do Q");
        let content_id = self
            .document
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let page = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(width as i64),
                Object::Integer(height as i64),
            ],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { IMAGE_XOBJECT_NAME => image_id },
            },
        };
        let page_id = self.document.add_object(page);
        self.page_ids.push(page_id);
        Ok(page_id)
    }

    /// Append a structural copy of `page`, parsing its source through `cache`
    pub fn add_pdf_page(
        &mut self,
        cache: &mut SourceDocumentCache,
        page: &PdfPageRef,
    ) -> StudioResult<ObjectId> {
        let source = cache.get_or_open(&page.path)?;
        let page_id = source.copy_page_into(page.page_index, &mut self.document, self.pages_id)?;
        self.page_ids.push(page_id);
        Ok(page_id)
    }

    /// Close the page tree and return the finished document
    pub fn finish(mut self) -> Document {
        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i64,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);
        self.document
    }
}

fn deflate(data: &[u8]) -> StudioResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(StudioError::Compression)?;
    encoder
        .finish()
        .map_err(StudioError::Compression)
}
