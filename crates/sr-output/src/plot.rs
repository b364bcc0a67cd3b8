//! Diagnostic trace plot.
//!
//! One SVG polyline per observed actor through its valid `(x, y)` samples,
//! labelled `car_i`, `ped_i`, `cyc_i` … where `i` counts actors of that type
//! in row order.  Record `y` points up; SVG `y` points down, so the plot
//! flips it back.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use sr_core::ActorType;

use crate::{MotionRecord, OutputError, OutputResult};

const SIZE:   f64 = 800.0;
const MARGIN: f64 = 40.0;

fn colour(t: ActorType) -> &'static str {
    match t {
        ActorType::Vehicle    => "#1f77b4",
        ActorType::Pedestrian => "#2ca02c",
        ActorType::Cyclist    => "#d62728",
        ActorType::Unset      => "#7f7f7f",
        ActorType::Other      => "#9467bd",
    }
}

struct Trace {
    label:  String,
    colour: &'static str,
    points: Vec<(f64, f64)>,
}

/// Collect the labelled traces of every observed actor in `record`.
fn traces(record: &MotionRecord) -> OutputResult<Vec<Trace>> {
    let field = |name: &str| {
        record.float(name).ok_or_else(|| OutputError::MissingField(name.to_owned()))
    };
    let ids   = field("state/id")?;
    let types = field("state/type")?;
    let xs    = field("state/x")?;
    let ys    = field("state/y")?;
    let valid = field("state/valid")?;

    let mut counts = [0usize; 5];
    let mut out = Vec::new();
    for row in 0..ids.rows() {
        if ids.row(row)[0] < 0.0 {
            continue;
        }
        let actor_type = ActorType::from_code(types.row(row)[0]).unwrap_or(ActorType::Unset);
        let n = &mut counts[actor_type as usize];
        let label = format!("{}_{}", actor_type.short_label(), *n);
        *n += 1;

        let points = valid
            .row(row)
            .iter()
            .zip(xs.row(row).iter().zip(ys.row(row)))
            .filter(|(v, _)| **v > 0.0)
            .map(|(_, (&x, &y))| (x, y))
            .collect();
        out.push(Trace { label, colour: colour(actor_type), points });
    }
    Ok(out)
}

/// Render the trace plot of `record` as an SVG document.
pub fn render_svg(record: &MotionRecord) -> OutputResult<String> {
    let traces = traces(record)?;

    let all = traces.iter().flat_map(|t| t.points.iter().copied());
    let (mut x0, mut y0, mut x1, mut y1) = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
    for (x, y) in all {
        x0 = x0.min(x);
        y0 = y0.min(y);
        x1 = x1.max(x);
        y1 = y1.max(y);
    }
    if x0 > x1 {
        (x0, y0, x1, y1) = (0.0, 0.0, 1.0, 1.0);
    }
    // Equal scale on both axes.
    let span  = (x1 - x0).max(y1 - y0).max(1e-6);
    let scale = (SIZE - 2.0 * MARGIN) / span;
    let px = |x: f64| MARGIN + (x - x0) * scale;
    let py = |y: f64| SIZE - MARGIN - (y - y0) * scale;

    let title = record.text("scenario/id").unwrap_or("");
    let mut svg = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SIZE}" height="{SIZE}" viewBox="0 0 {SIZE} {SIZE}">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(svg, r#"<text x="{MARGIN}" y="24" font-size="16">{}</text>"#, escape(title));

    for t in &traces {
        let Some(&(lx, ly)) = t.points.last() else { continue };
        let pts: Vec<String> = t.points.iter().map(|&(x, y)| format!("{:.2},{:.2}", px(x), py(y))).collect();
        let _ = writeln!(
            svg,
            r#"<polyline fill="none" stroke="{}" stroke-width="2" points="{}"/>"#,
            t.colour,
            pts.join(" ")
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" font-size="12" fill="{}">{}</text>"#,
            px(lx) + 4.0,
            py(ly) - 4.0,
            t.colour,
            t.label
        );
    }
    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Render and write the trace plot of `record` to `path`.
pub fn write_plot(record: &MotionRecord, path: &Path) -> OutputResult<()> {
    fs::write(path, render_svg(record)?)?;
    Ok(())
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
