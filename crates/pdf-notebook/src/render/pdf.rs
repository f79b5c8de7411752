//! printpdf backend
//!
//! Turns canvas calls into printpdf operations and assembles the final
//! document.

use crate::font::{FontHandle, LoadedFont};
use crate::layout::{Ink, PageLayout, Point, Rect, StrokeStyle};
use printpdf::{
    Color, LineJoinStyle, LinePoint, Mm, Op, PaintMode, PdfDocument, PdfPage, PdfSaveOptions,
    Polygon, PolygonRing, Pt, Rgb, TextItem, TextMatrix, WindingOrder,
};

use super::{Canvas, replay};

/// Canvas collecting printpdf operations for one page
pub struct PdfCanvas {
    ops: Vec<Op>,
    font: FontHandle,
}

impl PdfCanvas {
    pub fn new(font: FontHandle) -> Self {
        Self {
            ops: Vec::new(),
            font,
        }
    }

    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }
}

fn color(ink: Ink) -> Color {
    match ink {
        Ink::Black => Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)),
        Ink::Gray => Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None)),
    }
}

fn line_point(p: Point) -> LinePoint {
    LinePoint {
        p: printpdf::Point {
            x: Pt(p.x),
            y: Pt(p.y),
        },
        bezier: false,
    }
}

fn rect_ring(rect: &Rect) -> PolygonRing {
    PolygonRing {
        points: vec![
            line_point(Point::new(rect.left(), rect.bottom())),
            line_point(Point::new(rect.right(), rect.bottom())),
            line_point(Point::new(rect.right(), rect.top())),
            line_point(Point::new(rect.left(), rect.top())),
        ],
    }
}

impl PdfCanvas {
    fn paint_rects(&mut self, rects: &[Rect], mode: PaintMode) {
        if rects.is_empty() {
            return;
        }
        self.ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: rects.iter().map(rect_ring).collect(),
                mode,
                winding_order: WindingOrder::NonZero,
            },
        });
    }
}

impl Canvas for PdfCanvas {
    fn save_state(&mut self) {
        self.ops.push(Op::SaveGraphicsState);
    }

    fn restore_state(&mut self) {
        self.ops.push(Op::RestoreGraphicsState);
    }

    fn set_stroke(&mut self, style: StrokeStyle) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(style.width) });
        self.ops.push(Op::SetOutlineColor {
            col: color(style.ink),
        });
        self.ops.push(Op::SetLineJoinStyle {
            join: LineJoinStyle::Miter,
        });
    }

    fn set_fill(&mut self, ink: Ink) {
        self.ops.push(Op::SetFillColor { col: color(ink) });
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.ops.push(Op::DrawLine {
            line: printpdf::Line {
                points: vec![line_point(from), line_point(to)],
                is_closed: false,
            },
        });
    }

    fn fill_stroke_rects(&mut self, rects: &[Rect]) {
        self.paint_rects(rects, PaintMode::FillStroke);
    }

    fn stroke_rects(&mut self, rects: &[Rect]) {
        self.paint_rects(rects, PaintMode::Stroke);
    }

    fn draw_text(&mut self, anchor: Point, text: &str, size: f32) {
        let items = vec![TextItem::Text(text.to_string())];

        self.ops.push(Op::StartTextSection);
        match &self.font {
            FontHandle::Builtin(font) => {
                self.ops.push(Op::SetFontSizeBuiltinFont {
                    font: *font,
                    size: Pt(size),
                });
                self.ops.push(Op::SetTextCursor {
                    pos: printpdf::Point {
                        x: Pt(anchor.x),
                        y: Pt(anchor.y),
                    },
                });
                self.ops.push(Op::WriteTextBuiltinFont { items, font: *font });
            }
            FontHandle::Embedded(font_id) => {
                self.ops.push(Op::SetFontSize {
                    font: font_id.clone(),
                    size: Pt(size),
                });
                self.ops.push(Op::SetTextMatrix {
                    matrix: TextMatrix::Translate(Pt(anchor.x), Pt(anchor.y)),
                });
                self.ops.push(Op::WriteText {
                    items,
                    font: font_id.clone(),
                });
            }
        }
        self.ops.push(Op::EndTextSection);
    }
}

/// Serialize laid out pages into a PDF document
pub fn render_document(title: &str, pages: &[PageLayout], font: &LoadedFont) -> Vec<u8> {
    let mut doc = PdfDocument::new(title);
    let handle = font.register(&mut doc);

    for page in pages {
        let mut canvas = PdfCanvas::new(handle.clone());
        replay(&page.instructions, &mut canvas);

        doc.pages.push(PdfPage::new(
            Mm::from(Pt(page.geometry.width)),
            Mm::from(Pt(page.geometry.height)),
            canvas.into_ops(),
        ));
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::debug!("PDF writer reported {} warnings", warnings.len());
    }

    bytes
}
