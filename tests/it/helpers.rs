//! Test helpers and fixtures for reducing boilerplate in tests.
//!
//! This module provides:
//! - Image fixture writers (`write_png`, `write_rgba_png`, `write_indexed_png`,
//!   `write_jpeg_with_orientation`, `write_corrupt`, ...)
//! - `write_pdf` / `write_annotated_pdf` - small PDFs built with lopdf
//! - `FakeRasterizer` / `FailingPageRasterizer` - `PageRasterizer`s that need no PDFium
//! - Readers for inspecting exported documents

#![allow(dead_code)]

use flate2::Compression;
use flate2::Crc;
use flate2::write::ZlibEncoder;
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use pdf_studio::pdf::PageRasterizer;
use pdf_studio::settings::Settings;
use pdf_studio::{PageStudio, StudioError, StudioMode, StudioResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

// ============================================================================
// Image fixtures
// ============================================================================

pub fn write_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(&path)
        .unwrap();
    path
}

pub fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([40, 120, 200]))
        .save(&path)
        .unwrap();
    path
}

/// Left half fully transparent, right half opaque red
pub fn write_rgba_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let image = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([255, 0, 0, 255])
        }
    });
    image.save(&path).unwrap();
    path
}

/// JPEG carrying an Exif APP1 segment with the given Orientation tag.
///
/// Pixels are stored `width` x `height`; a viewer honouring orientation 5-8
/// shows them transposed.
pub fn write_jpeg_with_orientation(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    orientation: u16,
) -> PathBuf {
    let path = write_jpeg(dir, name, width, height);
    let jpeg = fs::read(&path).unwrap();

    // Big-endian TIFF header, one IFD entry: 0x0112 SHORT x1 = orientation.
    let mut exif = b"Exif\0\0MM\0\x2a\0\0\0\x08\0\x01\x01\x12\0\x03\0\0\0\x01".to_vec();
    exif.extend_from_slice(&orientation.to_be_bytes());
    exif.extend_from_slice(&[0, 0, 0, 0, 0, 0]);

    let mut bytes = jpeg[..2].to_vec();
    bytes.extend_from_slice(&[0xFF, 0xE1]);
    bytes.extend_from_slice(&((exif.len() + 2) as u16).to_be_bytes());
    bytes.extend_from_slice(&exif);
    bytes.extend_from_slice(&jpeg[2..]);
    fs::write(&path, bytes).unwrap();
    path
}

/// 2x1 indexed PNG: palette [black, red], black fully transparent via tRNS
pub fn write_indexed_png(dir: &Path, name: &str) -> PathBuf {
    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&2u32.to_be_bytes());
    ihdr.extend_from_slice(&1u32.to_be_bytes());
    ihdr.extend_from_slice(&[8, 3, 0, 0, 0]);

    // One scanline: filter byte, then palette indices.
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&[0, 0, 1]).unwrap();
    let idat = encoder.finish().unwrap();

    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    png_chunk(&mut bytes, b"IHDR", &ihdr);
    png_chunk(&mut bytes, b"PLTE", &[0, 0, 0, 255, 0, 0]);
    png_chunk(&mut bytes, b"tRNS", &[0, 255]);
    png_chunk(&mut bytes, b"IDAT", &idat);
    png_chunk(&mut bytes, b"IEND", &[]);

    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn png_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    let mut crc = Crc::new();
    crc.update(kind);
    crc.update(data);
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.sum().to_be_bytes());
}

/// A file with an image extension and garbage content
pub fn write_corrupt(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"definitely not an image").unwrap();
    path
}

// ============================================================================
// PDF fixtures
// ============================================================================

/// Width of page `index` in PDFs written by `write_pdf`; pages are told apart by width.
pub fn fixture_page_width(index: usize) -> i64 {
    100 + index as i64
}

/// Write a PDF with `pages` pages.
///
/// Page `i` is `fixture_page_width(i)` x 200 points and draws the text
/// `(i + 1)`. Fonts live in `/Resources` on the page-tree root, so copying a
/// page requires resolving inherited attributes.
pub fn write_pdf(dir: &Path, name: &str, pages: usize) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids = Vec::new();
    for i in 0..pages {
        let content = format!("BT /F1 24 Tf 20 20 Td ({}) Tj ET", i + 1);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(fixture_page_width(i)),
                Object::Integer(200),
            ],
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "Resources" => resources_id,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

/// One-page PDF whose page carries a text annotation pointing back at it via `/P`
pub fn write_annotated_pdf(dir: &Path, name: &str) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let page_id = doc.new_object_id();
    let annot_id = doc.add_object(dictionary! {
        "Type" => "Annot",
        "Subtype" => "Text",
        "Rect" => vec![
            Object::Integer(10),
            Object::Integer(10),
            Object::Integer(30),
            Object::Integer(30),
        ],
        "Contents" => Object::string_literal("note"),
        "P" => page_id,
    });
    let content_id = doc.add_object(Stream::new(Dictionary::new(), b"0 0 m 10 10 l S".to_vec()));
    doc.objects.insert(
        page_id,
        Object::Dictionary(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(100),
                Object::Integer(100),
            ],
            "Resources" => Dictionary::new(),
            "Annots" => vec![Object::Reference(annot_id)],
        }),
    );
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => Object::Integer(1),
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

// ============================================================================
// Output inspection
// ============================================================================

/// Page ids in page order
pub fn page_ids(document: &Document) -> Vec<ObjectId> {
    document.get_pages().into_values().collect()
}

pub fn media_box(document: &Document, page_id: ObjectId) -> Vec<i64> {
    document
        .get_dictionary(page_id)
        .unwrap()
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o.as_i64().unwrap())
        .collect()
}

/// MediaBox width of every page of the PDF at `path`, in page order
pub fn page_widths(path: &Path) -> Vec<i64> {
    let document = Document::load(path).unwrap();
    page_ids(&document)
        .into_iter()
        .map(|id| media_box(&document, id)[2])
        .collect()
}

/// Decoded pixel data of every image XObject in the PDF at `path`
pub fn image_streams(path: &Path) -> Vec<Vec<u8>> {
    let document = Document::load(path).unwrap();
    document
        .objects
        .values()
        .filter_map(|object| match object {
            Object::Stream(stream) if is_image(&stream.dict) => {
                Some(stream.decompressed_content().unwrap())
            }
            _ => None,
        })
        .collect()
}

fn is_image(dict: &Dictionary) -> bool {
    dict.get(b"Subtype")
        .and_then(Object::as_name)
        .map(|name| name == b"Image")
        .unwrap_or(false)
}

// ============================================================================
// Rasterizer double
// ============================================================================

/// Rasterizes with lopdf: a solid grey image sized MediaBox x scale.
///
/// Lets PDF entries be added and previewed without the PDFium library.
pub struct FakeRasterizer;

impl PageRasterizer for FakeRasterizer {
    fn page_count(&self, path: &Path) -> StudioResult<usize> {
        let document = Document::load(path).map_err(|e| StudioError::unreadable(path, e))?;
        Ok(document.get_pages().len())
    }

    fn rasterize(&self, path: &Path, page_index: usize, scale: f32) -> StudioResult<RgbImage> {
        let document = Document::load(path).map_err(|e| StudioError::unreadable(path, e))?;
        let ids = page_ids(&document);
        let page_id = *ids
            .get(page_index)
            .ok_or_else(|| StudioError::PageIndexOutOfRange {
                path: path.to_path_buf(),
                index: page_index,
                page_count: ids.len(),
            })?;
        let dims = media_box(&document, page_id);
        let width = ((dims[2] as f32 * scale) as u32).max(1);
        let height = ((dims[3] as f32 * scale) as u32).max(1);
        Ok(RgbImage::from_pixel(width, height, Rgb([128, 128, 128])))
    }
}

/// `FakeRasterizer` that fails on one page index of every document
pub struct FailingPageRasterizer {
    pub failing_page: usize,
}

impl PageRasterizer for FailingPageRasterizer {
    fn page_count(&self, path: &Path) -> StudioResult<usize> {
        FakeRasterizer.page_count(path)
    }

    fn rasterize(&self, path: &Path, page_index: usize, scale: f32) -> StudioResult<RgbImage> {
        if page_index == self.failing_page {
            return Err(StudioError::unreadable(path, "damaged page"));
        }
        FakeRasterizer.rasterize(path, page_index, scale)
    }
}

pub fn studio(mode: StudioMode) -> PageStudio {
    PageStudio::with_rasterizer(mode, &Settings::default(), Box::new(FakeRasterizer))
}
