//! GPX 1.1 serialization of the waypoint sequence.
//!
//! Each (real, offset) waypoint pair becomes one `<trk>` with a single
//! two-point `<trkseg>`:
//!
//! ```text
//! <gpx version="1.1" creator="PhotoToGPX" xmlns="http://www.topografix.com/GPX/1/1">
//!   <trk>
//!     <name>IMG_0001.jpg</name>
//!     <trkseg>
//!       <trkpt lat="37.100000" lon="-122.100000"/>
//!       <trkpt lat="37.100010" lon="-122.100000"/>
//!     </trkseg>
//!   </trk>
//! </gpx>
//! ```

use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::constants::{GPX_CREATOR, GPX_NAMESPACE, GPX_VERSION};
use crate::error::GpxError;
use crate::waypoint::{track_name, Waypoint};

fn write_trkpt(w: &mut Writer<Vec<u8>>, point: &Waypoint) -> Result<(), GpxError> {
    let mut trkpt = BytesStart::new("trkpt");
    trkpt.push_attribute(("lat", format!("{:.6}", point.latitude).as_str()));
    trkpt.push_attribute(("lon", format!("{:.6}", point.longitude).as_str()));
    w.write_event(Event::Empty(trkpt))?;
    Ok(())
}

/// Renders the whole document in memory. Fails on an odd-length sequence.
pub fn render_gpx(waypoints: &[Waypoint]) -> Result<Vec<u8>, GpxError> {
    if waypoints.len() % 2 != 0 {
        return Err(GpxError::UnpairedWaypoints(waypoints.len()));
    }

    let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut gpx = BytesStart::new("gpx");
    gpx.push_attribute(("version", GPX_VERSION));
    gpx.push_attribute(("creator", GPX_CREATOR));
    gpx.push_attribute(("xmlns", GPX_NAMESPACE));
    w.write_event(Event::Start(gpx.borrow()))?;

    for pair in waypoints.chunks_exact(2) {
        let trk = BytesStart::new("trk");
        w.write_event(Event::Start(trk.borrow()))?;

        let name = BytesStart::new("name");
        w.write_event(Event::Start(name.borrow()))?;
        w.write_event(Event::Text(BytesText::new(track_name(&pair[0].name))))?;
        w.write_event(Event::End(name.to_end()))?;

        let trkseg = BytesStart::new("trkseg");
        w.write_event(Event::Start(trkseg.borrow()))?;
        write_trkpt(&mut w, &pair[0])?;
        write_trkpt(&mut w, &pair[1])?;
        w.write_event(Event::End(trkseg.to_end()))?;

        w.write_event(Event::End(trk.to_end()))?;
    }

    w.write_event(Event::End(gpx.to_end()))?;

    let mut data = w.into_inner();
    data.push(b'\n');
    Ok(data)
}

/// Writes the document to `path` through a temp file in the same directory,
/// so an interrupted write never leaves a half-written GPX behind.
pub fn write_gpx(path: &Path, waypoints: &[Waypoint]) -> Result<(), GpxError> {
    let data = render_gpx(waypoints)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}
