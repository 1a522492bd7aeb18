/// Image export: turn a built chart into PNG bytes.
///
/// The chart data is rendered to a deterministic SVG string, rasterized with
/// resvg into a tiny-skia pixmap, and PNG-encoded. The same `ChartData` that
/// feeds the live egui plot feeds the exporter, so the saved image shows what
/// the screen shows.

mod svg;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use crate::charts::ChartData;

/// Non-fatal export failure: the on-screen chart stays, only the download
/// affordance reports the error.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("generated SVG did not parse: {0}")]
    Svg(String),
    #[error("cannot rasterize a {width}x{height} image")]
    ZeroSize { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Png(String),
}

/// A rasterized chart ready to save, keyed by its deterministic file name.
#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub filename: String,
    pub png: Vec<u8>,
}

impl ExportedImage {
    /// Base64 data-URI form, usable as an embedded download link target.
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

/// Rasterize a chart to PNG. Pure with respect to the artifact.
pub fn export_chart(chart: &ChartData, year: i32) -> Result<ExportedImage, ExportError> {
    let kind = chart.kind();
    let svg_text = svg::render(chart, &kind.title(year));

    let tree = resvg::usvg::Tree::from_str(&svg_text, &resvg::usvg::Options::default())
        .map_err(|e| ExportError::Svg(e.to_string()))?;

    let size = tree.size();
    let (width, height) = (size.width() as u32, size.height() as u32);
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(ExportError::ZeroSize { width, height })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| ExportError::Png(e.to_string()))?;

    Ok(ExportedImage {
        filename: format!("{}.png", kind.file_stem()),
        png,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartChoice, render};
    use crate::data::filter::filter_by_year;
    use crate::data::model::tests::record;
    use crate::data::model::FireDataset;

    fn dataset() -> FireDataset {
        FireDataset::new(vec![
            record(2015, "CA", 10.0),
            record(2015, "CA", 5.0),
            record(2015, "TX", 20.0),
        ])
    }

    #[test]
    fn every_chart_kind_exports_a_png() {
        let ds = dataset();
        let view = filter_by_year(&ds, 2015);
        for (kind, result) in render(ChartChoice::All, &ds, &view, 2015) {
            let chart = result.unwrap_or_else(|e| panic!("{kind:?} failed to build: {e}"));
            let image = export_chart(&chart, 2015)
                .unwrap_or_else(|e| panic!("{kind:?} failed to export: {e}"));
            assert_eq!(image.filename, format!("{}.png", kind.file_stem()));
            // PNG signature.
            assert_eq!(&image.png[..8], b"\x89PNG\r\n\x1a\n");
        }
    }

    #[test]
    fn data_uri_embeds_base64_png() {
        let ds = dataset();
        let view = filter_by_year(&ds, 2015);
        let chart = crate::charts::build(crate::charts::ChartKind::Bar, &ds, &view, 2015).unwrap();
        let image = export_chart(&chart, 2015).unwrap();
        let uri = image.data_uri();
        assert!(uri.starts_with("data:image/png;base64,"));
        // The PNG signature survives the base64 round trip.
        let body = uri.strip_prefix("data:image/png;base64,").unwrap();
        let decoded = STANDARD.decode(body).unwrap();
        assert_eq!(decoded, image.png);
    }

    #[test]
    fn empty_view_charts_still_export() {
        let ds = dataset();
        let empty: Vec<usize> = Vec::new();
        for kind in [
            crate::charts::ChartKind::Bar,
            crate::charts::ChartKind::Pie,
            crate::charts::ChartKind::Violin,
        ] {
            let chart = crate::charts::build(kind, &ds, &empty, 1999).unwrap();
            assert!(export_chart(&chart, 1999).is_ok(), "{kind:?}");
        }
    }
}
