// File: crates/chart-core/src/svg.rs
// Summary: SVG serialization of a DrawingModel, with SMIL entry animation when planned.

use std::fmt::Write as _;
use std::path::Path as FsPath;

use anyhow::{Context, Result};

use crate::animation::Phase;
use crate::geometry::fmt_num;
use crate::model::{DrawingModel, Label, Segment};

impl DrawingModel {
    /// Serialize to a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let (w, h) = (self.surface.width, self.surface.height);
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" style="overflow: visible">"#
        );
        out.push_str("<g>\n");

        if let Some(axes) = &self.axes {
            for s in axes.gridlines.iter().chain(&axes.axis_lines).chain(&axes.tick_marks) {
                write_segment(&mut out, s);
            }
            for l in &axes.labels {
                write_label(&mut out, l);
            }
        }

        let plan = self.animation.as_ref();

        if let Some(area) = &self.area {
            let _ = write!(
                out,
                r#"<path d="{}" fill="{}" fill-opacity="{}" stroke="none""#,
                area.path.to_svg_d(),
                area.color,
                fmt_num(area.opacity)
            );
            match plan {
                Some(p) => {
                    out.push_str(" opacity=\"0\">");
                    write_fade(&mut out, &p.area_fade);
                    out.push_str("</path>\n");
                }
                None => out.push_str("/>\n"),
            }
        }

        if let Some(line) = &self.line {
            let _ = write!(
                out,
                r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round""#,
                line.path.to_svg_d(),
                line.color,
                fmt_num(line.width)
            );
            match plan {
                Some(p) => {
                    let len = fmt_num(line.length);
                    let _ = write!(out, r#" stroke-dasharray="{len}" stroke-dashoffset="{len}" opacity="0">"#);
                    let _ = write!(
                        out,
                        r#"<animate attributeName="stroke-dashoffset" from="{len}" to="0" begin="{}s" dur="{}s" fill="freeze"/>"#,
                        fmt_num(p.line_draw.begin),
                        fmt_num(p.line_draw.duration)
                    );
                    write_fade(&mut out, &p.line_fade);
                    out.push_str("</path>\n");
                }
                None => out.push_str("/>\n"),
            }
        }

        for m in &self.markers {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}""#,
                fmt_num(m.center.x),
                fmt_num(m.center.y),
                fmt_num(m.radius),
                m.fill,
                m.stroke,
                fmt_num(m.stroke_width)
            );
            match plan {
                Some(p) => {
                    out.push_str(" opacity=\"0\">");
                    write_fade(&mut out, &p.marker_fade);
                    out.push_str("</circle>\n");
                }
                None => out.push_str("/>\n"),
            }
        }

        out.push_str("</g>\n</svg>\n");
        out
    }

    /// Write the SVG document to `path`, creating parent directories.
    pub fn write_svg(&self, path: impl AsRef<FsPath>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, self.to_svg()).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn write_segment(out: &mut String, s: &Segment) {
    let _ = writeln!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        fmt_num(s.from.x),
        fmt_num(s.from.y),
        fmt_num(s.to.x),
        fmt_num(s.to.y),
        s.color,
        fmt_num(s.width)
    );
}

fn write_label(out: &mut String, l: &Label) {
    let _ = writeln!(
        out,
        r#"<text x="{}" y="{}" text-anchor="{}" font-size="{}" fill="{}">{}</text>"#,
        fmt_num(l.at.x),
        fmt_num(l.at.y),
        l.anchor.as_svg(),
        fmt_num(l.size),
        l.color,
        escape(&l.text)
    );
}

fn write_fade(out: &mut String, phase: &Phase) {
    let _ = write!(
        out,
        r#"<animate attributeName="opacity" from="0" to="1" begin="{}s" dur="{}s" fill="freeze"/>"#,
        fmt_num(phase.begin),
        fmt_num(phase.duration)
    );
}

fn escape(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            _ => s.push(c),
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
    }
}
