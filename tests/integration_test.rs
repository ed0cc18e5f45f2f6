//! End-to-end checks across the EXIF reader, upload pipeline, moon
//! calculator, gallery and history

use std::fs;
use std::io::Cursor;

use byteorder::{BigEndian, WriteBytesExt};
use chrono::{TimeZone, Utc};
use image::{ImageFormat, RgbImage};

use celestial_capture::astro::{self, PhaseName, RatingKey};
use celestial_capture::gallery::{self, Catalog, Direction, EditablePhoto, Favorites, GalleryQuery};
use celestial_capture::history::History;
use celestial_capture::{read_exif, ExifReader};

/// Big-endian TIFF block: IFD0 holds only the EXIF pointer, the EXIF
/// sub-IFD holds ISO 800, f/2.8, 30 s and 4000x3000
fn night_sky_tiff() -> Vec<u8> {
    const SUB_IFD: u32 = 26;
    const F_NUMBER_AT: u32 = SUB_IFD + 2 + 5 * 12 + 4;
    const EXPOSURE_AT: u32 = F_NUMBER_AT + 8;

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"MM");
    tiff.write_u16::<BigEndian>(0x2A).unwrap();
    tiff.write_u32::<BigEndian>(8).unwrap();

    tiff.write_u16::<BigEndian>(1).unwrap();
    write_entry(&mut tiff, 0x8769, 4, SUB_IFD);
    tiff.write_u32::<BigEndian>(0).unwrap();
    assert_eq!(tiff.len() as u32, SUB_IFD);

    tiff.write_u16::<BigEndian>(5).unwrap();
    write_entry(&mut tiff, 0x8827, 3, 800 << 16);
    write_entry(&mut tiff, 0x829D, 5, F_NUMBER_AT);
    write_entry(&mut tiff, 0x829A, 5, EXPOSURE_AT);
    write_entry(&mut tiff, 0xA002, 4, 4000);
    write_entry(&mut tiff, 0xA003, 4, 3000);
    tiff.write_u32::<BigEndian>(0).unwrap();
    assert_eq!(tiff.len() as u32, F_NUMBER_AT);

    for (numerator, denominator) in [(28, 10), (30, 1)] {
        tiff.write_u32::<BigEndian>(numerator).unwrap();
        tiff.write_u32::<BigEndian>(denominator).unwrap();
    }
    tiff
}

/// Big-endian TIFF block whose EXIF sub-IFD holds only inline values
fn inline_exif_tiff(entries: &[(u16, u16, u32)]) -> Vec<u8> {
    const SUB_IFD: u32 = 26;

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"MM");
    tiff.write_u16::<BigEndian>(0x2A).unwrap();
    tiff.write_u32::<BigEndian>(8).unwrap();

    tiff.write_u16::<BigEndian>(1).unwrap();
    write_entry(&mut tiff, 0x8769, 4, SUB_IFD);
    tiff.write_u32::<BigEndian>(0).unwrap();

    tiff.write_u16::<BigEndian>(entries.len() as u16).unwrap();
    for &(tag, field_type, value) in entries {
        write_entry(&mut tiff, tag, field_type, value);
    }
    tiff.write_u32::<BigEndian>(0).unwrap();
    tiff
}

fn write_entry(out: &mut Vec<u8>, tag: u16, field_type: u16, value: u32) {
    out.write_u16::<BigEndian>(tag).unwrap();
    out.write_u16::<BigEndian>(field_type).unwrap();
    out.write_u32::<BigEndian>(1).unwrap();
    out.write_u32::<BigEndian>(value).unwrap();
}

/// Inserts an APP1 EXIF segment right after the SOI marker of `jpeg`
fn with_app1(jpeg: &[u8], tiff: &[u8]) -> Vec<u8> {
    let mut out = jpeg[..2].to_vec();
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.write_u16::<BigEndian>((2 + 6 + tiff.len()) as u16).unwrap();
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out.extend_from_slice(&jpeg[2..]);
    out
}

fn encoded_jpeg(width: u32, height: u32) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    RgbImage::new(width, height)
        .write_to(&mut buffer, ImageFormat::Jpeg)
        .unwrap();
    buffer.into_inner()
}

#[test]
fn test_exif_from_minimal_jpeg() {
    let data = with_app1(&[0xFF, 0xD8], &night_sky_tiff());

    let exif = read_exif(&data);
    assert_eq!(exif.width, Some(4000));
    assert_eq!(exif.height, Some(3000));
    assert_eq!(exif.iso.as_deref(), Some("800"));
    assert_eq!(exif.aperture.as_deref(), Some("f/2.8"));
    assert_eq!(exif.exposure_time.as_deref(), Some("30 s"));

    let tags = ExifReader::parse(&data).unwrap();
    assert_eq!(tags.len(), 6);
}

#[test]
fn test_upload_prefers_exif_dimensions() {
    let jpeg = with_app1(&encoded_jpeg(16, 8), &night_sky_tiff());

    assert_eq!(gallery::upload::probe_dimensions(&jpeg), Some((16, 8)));

    let metadata = gallery::resolve_metadata(&jpeg);
    assert_eq!((metadata.width, metadata.height), (Some(4000), Some(3000)));
    assert_eq!(metadata.exif.iso.as_deref(), Some("800"));
    assert_eq!(metadata.file_size, 0.0);
}

#[test]
fn test_upload_resolves_each_dimension_separately() {
    let jpeg = with_app1(&encoded_jpeg(16, 8), &inline_exif_tiff(&[(0xA002, 4, 4000)]));

    let metadata = gallery::resolve_metadata(&jpeg);
    assert_eq!(metadata.exif.width, Some(4000));
    assert_eq!(metadata.exif.height, None);
    assert_eq!((metadata.width, metadata.height), (Some(4000), Some(8)));
}

#[test]
fn test_upload_ignores_zero_exif_dimensions() {
    let tiff = inline_exif_tiff(&[(0xA002, 4, 0), (0xA003, 4, 3000)]);
    let jpeg = with_app1(&encoded_jpeg(16, 8), &tiff);

    let metadata = gallery::resolve_metadata(&jpeg);
    assert_eq!((metadata.width, metadata.height), (Some(16), Some(3000)));
}

#[test]
fn test_upload_without_exif_uses_decoded_size() {
    let metadata = gallery::resolve_metadata(&encoded_jpeg(16, 8));
    assert!(metadata.exif.is_empty());
    assert_eq!((metadata.width, metadata.height), (Some(16), Some(8)));
}

#[test]
fn test_full_moon_january_2024() {
    let at = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
    let moon = astro::moon_phase_en(at);

    assert_eq!(moon.phase, PhaseName::FullMoon);
    assert_eq!(moon.phase_name, "Full Moon");
    assert!(moon.illumination >= 99);
    assert_eq!(moon.rating, RatingKey::FullMoon);

    let conditions = astro::viewing_conditions(moon.rating).unwrap();
    assert_eq!(conditions.astrophotography.quality, astro::Quality::Challenging);

    let next = astro::next_major_phase_en(at);
    assert!(next.at > at);
    assert!(next.at - at <= chrono::Duration::days(8));
}

const CATALOG: &str = r#"
[[photos]]
id = "m31"
title = "Andromeda Galaxy"
date = "2024-09-14"
tags = ["galaxy", "deep-sky"]
rating = 5

[[photos]]
id = "m42"
title = "Orion Nebula"
date = "2024-01-03"
tags = ["nebula", "deep-sky"]
rating = 4

[[photos]]
id = "moon-1"
title = "Waxing Gibbous"
date = "2024-05-18"
tags = ["moon"]
rating = 3
"#;

#[test]
fn test_catalog_favorites_and_editing() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.toml");
    fs::write(&catalog_path, CATALOG).unwrap();

    let mut catalog = Catalog::load(&catalog_path).unwrap();
    let query = GalleryQuery {
        tags: vec!["deep-sky".to_string()],
        ..GalleryQuery::default()
    };
    let page = catalog.query(&query);
    let ids: Vec<&str> = page.items.iter().map(|photo| photo.id.as_str()).collect();
    assert_eq!(ids, vec!["m31", "m42"]);
    assert_eq!(catalog.neighbor(&query, "m42", Direction::Next).unwrap().id, "m31");

    let store = dir.path().join("state").join("favorites.json");
    let mut favorites = Favorites::load(&store);
    assert!(favorites.toggle("m42").unwrap());
    assert!(Favorites::load(&store).contains("m42"));

    let original = EditablePhoto::from_photo(catalog.get("m42").unwrap());
    let mut history = History::new(original.clone());
    assert!(history.set_state(history.present().with_tag("winter")));
    assert!(history.set_state(history.present().with_rating(5)));
    assert!(!history.set_state(history.present().clone()));

    assert!(history.undo());
    assert_eq!(history.present().rating, 4);
    assert!(history.present().tags.contains(&"winter".to_string()));
    assert!(history.undo());
    assert_eq!(history.present(), &original);
    assert!(history.redo());

    let photo = catalog.get_mut("m42").unwrap();
    photo.apply_edit(history.present());
    assert_eq!(photo.tags, vec!["nebula", "deep-sky", "winter"]);
    assert_eq!(photo.rating, 4);
}
