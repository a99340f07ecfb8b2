//! Fixture builders for the test suite.
//!
//! Real camera files are large and carry personal metadata, so the tests
//! synthesize the smallest containers kamadak-exif accepts instead, each
//! wrapping the same little-endian TIFF structure:
//!
//! - JPEG: SOI, one APP1 `Exif` segment, EOI
//! - PNG: signature, IHDR, `eXIf`, IEND
//! - HEIF: `ftyp`, a `meta` box describing one `Exif` item, `mdat` holding it
//!
//! ```text
//! let tmp = TempDir::new().unwrap();
//! write_file(tmp.path(), "trip/IMG_0001.jpg", &jpeg_with_gps(37.1, -122.1));
//! ```

use std::path::{Path, PathBuf};

/// SOI immediately followed by EOI: a JPEG with no metadata at all.
pub const MINIMAL_JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xD9];

const TAG_GPS_IFD_POINTER: u16 = 0x8825;
const TAG_ORIENTATION: u16 = 0x0112;
const TAG_GPS_LATITUDE_REF: u16 = 0x0001;
const TAG_GPS_LATITUDE: u16 = 0x0002;
const TAG_GPS_LONGITUDE_REF: u16 = 0x0003;
const TAG_GPS_LONGITUDE: u16 = 0x0004;

const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

fn push_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn push_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn push_entry(buf: &mut Vec<u8>, tag: u16, typ: u16, count: u32, value: [u8; 4]) {
    push_u16(buf, tag);
    push_u16(buf, typ);
    push_u32(buf, count);
    buf.extend_from_slice(&value);
}

fn tiff_header(buf: &mut Vec<u8>) {
    buf.extend_from_slice(b"II");
    push_u16(buf, 42);
    push_u32(buf, 8);
}

/// Decimal degrees as (numerator, denominator) degrees/minutes/seconds.
fn to_dms(value: f64) -> [(u32, u32); 3] {
    let abs = value.abs();
    let degrees = abs.trunc();
    let minutes_f = (abs - degrees) * 60.0;
    let minutes = minutes_f.trunc();
    let seconds = (minutes_f - minutes) * 60.0;
    [
        (degrees as u32, 1),
        (minutes as u32, 1),
        ((seconds * 10_000.0).round() as u32, 10_000),
    ]
}

/// TIFF structure with IFD0 pointing at a GPS IFD holding lat/lon and refs.
pub fn exif_tiff_with_gps(lat: f64, lon: f64) -> Vec<u8> {
    const GPS_IFD_OFFSET: u32 = 26;
    const LAT_OFFSET: u32 = 80;
    const LON_OFFSET: u32 = 104;

    let lat_ref = if lat < 0.0 { b'S' } else { b'N' };
    let lon_ref = if lon < 0.0 { b'W' } else { b'E' };

    let mut buf = Vec::new();
    tiff_header(&mut buf);

    // IFD0: a single GPS pointer
    push_u16(&mut buf, 1);
    push_entry(&mut buf, TAG_GPS_IFD_POINTER, TYPE_LONG, 1, GPS_IFD_OFFSET.to_le_bytes());
    push_u32(&mut buf, 0);
    assert_eq!(buf.len() as u32, GPS_IFD_OFFSET);

    // GPS IFD
    push_u16(&mut buf, 4);
    push_entry(&mut buf, TAG_GPS_LATITUDE_REF, TYPE_ASCII, 2, [lat_ref, 0, 0, 0]);
    push_entry(&mut buf, TAG_GPS_LATITUDE, TYPE_RATIONAL, 3, LAT_OFFSET.to_le_bytes());
    push_entry(&mut buf, TAG_GPS_LONGITUDE_REF, TYPE_ASCII, 2, [lon_ref, 0, 0, 0]);
    push_entry(&mut buf, TAG_GPS_LONGITUDE, TYPE_RATIONAL, 3, LON_OFFSET.to_le_bytes());
    push_u32(&mut buf, 0);
    assert_eq!(buf.len() as u32, LAT_OFFSET);

    for (num, denom) in to_dms(lat).into_iter().chain(to_dms(lon)) {
        push_u32(&mut buf, num);
        push_u32(&mut buf, denom);
    }
    assert_eq!(buf.len() as u32, LON_OFFSET + 24);
    buf
}

/// TIFF structure whose IFD0 only has an orientation tag.
pub fn exif_tiff_without_gps() -> Vec<u8> {
    let mut buf = Vec::new();
    tiff_header(&mut buf);
    push_u16(&mut buf, 1);
    push_entry(&mut buf, TAG_ORIENTATION, TYPE_SHORT, 1, [1, 0, 0, 0]);
    push_u32(&mut buf, 0);
    buf
}

/// Wraps a TIFF structure in a JPEG APP1 segment.
pub fn jpeg_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut buf = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let segment_len = (2 + 6 + tiff.len()) as u16;
    buf.extend_from_slice(&segment_len.to_be_bytes());
    buf.extend_from_slice(b"Exif\0\0");
    buf.extend_from_slice(tiff);
    buf.extend_from_slice(&[0xFF, 0xD9]);
    buf
}

pub fn jpeg_with_gps(lat: f64, lon: f64) -> Vec<u8> {
    jpeg_with_exif(&exif_tiff_with_gps(lat, lon))
}

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// CRC-32 (IEEE) as used by PNG chunks.
fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in bytes {
        crc ^= u32::from(b);
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

fn push_png_chunk(buf: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    buf.extend_from_slice(&(data.len() as u32).to_be_bytes());
    let start = buf.len();
    buf.extend_from_slice(kind);
    buf.extend_from_slice(data);
    let crc = crc32(&buf[start..]);
    buf.extend_from_slice(&crc.to_be_bytes());
}

/// 1x1 grayscale PNG, with an `eXIf` chunk when `tiff` is given.
pub fn png_with_exif(tiff: Option<&[u8]>) -> Vec<u8> {
    let mut buf = PNG_SIGNATURE.to_vec();
    // width, height, bit depth 8, grayscale, deflate, no filter, no interlace
    let ihdr = [0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0];
    push_png_chunk(&mut buf, b"IHDR", &ihdr);
    if let Some(tiff) = tiff {
        push_png_chunk(&mut buf, b"eXIf", tiff);
    }
    push_png_chunk(&mut buf, b"IEND", &[]);
    buf
}

fn iso_box(kind: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(8 + payload.len());
    buf.extend_from_slice(&((8 + payload.len()) as u32).to_be_bytes());
    buf.extend_from_slice(kind);
    buf.extend_from_slice(payload);
    buf
}

/// Full box: version byte and 24-bit flags (always zero here) before the payload.
fn iso_full_box(kind: &[u8; 4], version: u8, payload: &[u8]) -> Vec<u8> {
    let mut body = vec![version, 0, 0, 0];
    body.extend_from_slice(payload);
    iso_box(kind, &body)
}

/// `meta` box with one `Exif` item (id 1) located at an absolute file offset.
fn heif_meta(exif_offset: u32, exif_len: u32) -> Vec<u8> {
    let mut hdlr = vec![0, 0, 0, 0];
    hdlr.extend_from_slice(b"pict");
    hdlr.extend_from_slice(&[0; 12]);
    hdlr.push(0);

    // infe v2: item_id, protection index, item type, empty name
    let mut infe = Vec::new();
    infe.extend_from_slice(&1u16.to_be_bytes());
    infe.extend_from_slice(&0u16.to_be_bytes());
    infe.extend_from_slice(b"Exif");
    infe.push(0);
    let mut iinf = 1u16.to_be_bytes().to_vec();
    iinf.extend(iso_full_box(b"infe", 2, &infe));

    // iloc v0: 4-byte offsets and lengths, no base offset
    let mut iloc = Vec::new();
    iloc.extend_from_slice(&0x4400u16.to_be_bytes());
    iloc.extend_from_slice(&1u16.to_be_bytes()); // item count
    iloc.extend_from_slice(&1u16.to_be_bytes()); // item id
    iloc.extend_from_slice(&0u16.to_be_bytes()); // data reference index
    iloc.extend_from_slice(&1u16.to_be_bytes()); // extent count
    iloc.extend_from_slice(&exif_offset.to_be_bytes());
    iloc.extend_from_slice(&exif_len.to_be_bytes());

    let mut meta = Vec::new();
    meta.extend(iso_full_box(b"hdlr", 0, &hdlr));
    meta.extend(iso_full_box(b"iinf", 0, &iinf));
    meta.extend(iso_full_box(b"iloc", 0, &iloc));
    iso_full_box(b"meta", 0, &meta)
}

/// HEIF file whose only item is the `Exif` block wrapping `tiff`.
pub fn heic_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut ftyp = Vec::new();
    ftyp.extend_from_slice(b"heic");
    ftyp.extend_from_slice(&0u32.to_be_bytes());
    ftyp.extend_from_slice(b"mif1");
    ftyp.extend_from_slice(b"heic");
    let ftyp = iso_box(b"ftyp", &ftyp);

    // Exif item: 4-byte offset to the TIFF header, then "Exif\0\0" and TIFF
    let mut item = 6u32.to_be_bytes().to_vec();
    item.extend_from_slice(b"Exif\0\0");
    item.extend_from_slice(tiff);

    let meta_len = heif_meta(0, 0).len();
    let exif_offset = (ftyp.len() + meta_len + 8) as u32;
    let meta = heif_meta(exif_offset, item.len() as u32);
    assert_eq!(meta.len(), meta_len);

    let mut buf = ftyp;
    buf.extend(meta);
    buf.extend(iso_box(b"mdat", &item));
    buf
}

/// Writes `bytes` at `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, bytes: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Lines of a text file, empty when the file does not exist.
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Counts occurrences of an opening `<tag` (followed by `>`, `/` or space).
pub fn count_elements(xml: &str, tag: &str) -> usize {
    let open = format!("<{}", tag);
    xml.match_indices(&open)
        .filter(|(i, _)| {
            matches!(
                xml[i + open.len()..].chars().next(),
                Some('>') | Some(' ') | Some('/')
            )
        })
        .count()
}
