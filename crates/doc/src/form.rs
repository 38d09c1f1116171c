//! Fixed-layout custody form renderer.
//!
//! Coordinates are in PDF points on a US-letter page, origin at the
//! bottom-left. The layout is a title, the custody date, a labeled
//! attribute block, the custodian block, and two side-by-side
//! signature blocks for the receiving and delivering parties.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use demirbas_db::models::Asset;
use printpdf::{IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Pt};

use crate::config::DocumentConfig;
use crate::error::DocumentError;

/// US-letter page, in millimetres.
const PAGE_WIDTH: Mm = Mm(215.9);
const PAGE_HEIGHT: Mm = Mm(279.4);

/// Blank rule the parties sign on.
const SIGNATURE_RULE: &str = "...............................";

/// File name for a custody form generated on `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use demirbas_doc::custody_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(custody_file_name("DMB-001", date), "Custody_DMB-001_20240305.pdf");
/// ```
pub fn custody_file_name(asset_tag: &str, date: NaiveDate) -> String {
    format!("Custody_{}_{}.pdf", asset_tag, date.format("%Y%m%d"))
}

/// Render the custody form for one asset record and write it to the
/// configured output directory.
///
/// Returns the path of the written file, named
/// `Custody_<asset_tag>_<YYYYMMDD>.pdf` after the generation date.
/// Optional record fields render as empty strings; a missing font or
/// an unwritable output path is an error.
pub fn generate_custody_form(
    asset: &Asset,
    config: &DocumentConfig,
) -> Result<PathBuf, DocumentError> {
    let (doc, page, layer) =
        PdfDocument::new("Demirbaş Zimmet Formu", PAGE_WIDTH, PAGE_HEIGHT, "Form");

    let font_file = File::open(&config.font_path).map_err(|source| {
        DocumentError::FontUnavailable {
            path: config.font_path.clone(),
            source,
        }
    })?;
    let font = doc
        .add_external_font(font_file)
        .map_err(|e| DocumentError::Render(e.to_string()))?;

    let layer = doc.get_page(page).get_layer(layer);
    draw_form(&layer, &font, asset);

    let path = config
        .output_dir
        .join(custody_file_name(&asset.asset_tag, Local::now().date_naive()));
    let file = File::create(&path).map_err(|source| DocumentError::Io {
        path: path.clone(),
        source,
    })?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| DocumentError::Render(e.to_string()))?;

    tracing::info!(path = %path.display(), asset_tag = %asset.asset_tag, "custody form written");
    Ok(path)
}

fn draw_form(layer: &PdfLayerReference, font: &IndirectFontRef, asset: &Asset) {
    let text = |s: &str, size: f32, x: f32, y: f32| {
        layer.use_text(s, size, Mm::from(Pt(x)), Mm::from(Pt(y)), font);
    };

    text("DEMİRBAŞ ZİMMET FORMU", 16.0, 100.0, 750.0);
    text(&format!("Zimmet Tarihi: {}", asset.custody_date), 12.0, 100.0, 730.0);
    text("Demirbaş Bilgileri:", 12.0, 100.0, 710.0);

    let attributes = [
        ("Demirbaş No:", asset.asset_tag.as_str()),
        ("Bilgisayar Adı:", asset.computer_name.as_str()),
        ("Marka:", asset.brand.as_str()),
        ("İşlemci:", asset.cpu.as_str()),
        ("RAM:", asset.ram.as_str()),
        ("Depolama:", asset.storage.as_str()),
        ("Sarf Malzeme:", asset.consumables.as_str()),
        ("Seri No:", asset.serial_number.as_str()),
    ];
    let mut y = 690.0;
    for (label, value) in attributes {
        text(label, 12.0, 120.0, y);
        text(value, 12.0, 250.0, y);
        y -= 20.0;
    }

    text("Kullanıcı Bilgileri:", 12.0, 100.0, y - 20.0);
    text("Adı Soyadı:", 12.0, 120.0, y - 40.0);
    text(&asset.custodian_name, 12.0, 250.0, y - 40.0);

    // Received by / delivered by, side by side.
    text("Teslim Alan:", 12.0, 100.0, y - 80.0);
    text("Teslim Eden:", 12.0, 400.0, y - 80.0);
    text(SIGNATURE_RULE, 12.0, 100.0, y - 120.0);
    text(SIGNATURE_RULE, 12.0, 400.0, y - 120.0);
    text("İmza", 12.0, 100.0, y - 140.0);
    text("İmza", 12.0, 400.0, y - 140.0);
}
