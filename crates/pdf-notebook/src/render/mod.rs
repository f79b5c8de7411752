//! Rendering of laid out pages
//!
//! Layout produces backend-neutral [`DrawInstruction`]s. This module replays
//! them onto a [`Canvas`]:
//! - `replay` turns instructions into canvas calls with scoped state
//! - `PdfCanvas` implements the canvas over printpdf operations

mod pdf;

pub use pdf::{PdfCanvas, render_document};

use crate::layout::{DrawInstruction, Ink, Point, Rect, StrokeStyle};

/// Drawing capabilities a backend provides.
///
/// A canvas belongs to one page and is driven by one replay at a time.
pub trait Canvas {
    fn save_state(&mut self);
    fn restore_state(&mut self);
    /// Line width and colour for subsequent strokes
    fn set_stroke(&mut self, style: StrokeStyle);
    fn set_fill(&mut self, ink: Ink);
    fn stroke_line(&mut self, from: Point, to: Point);
    /// Fill and outline every rectangle in one paint operation
    fn fill_stroke_rects(&mut self, rects: &[Rect]);
    /// Outline every rectangle in one paint operation
    fn stroke_rects(&mut self, rects: &[Rect]);
    fn draw_text(&mut self, anchor: Point, text: &str, size: f32);
}

/// Replay a page's instructions in order.
///
/// Runs of lines sharing a style are drawn inside one saved state; every
/// rectangle batch gets its own state scope.
pub fn replay(instructions: &[DrawInstruction], canvas: &mut impl Canvas) {
    let mut line_style: Option<StrokeStyle> = None;

    for instruction in instructions {
        match instruction {
            DrawInstruction::Line { from, to, style } => {
                if line_style != Some(*style) {
                    end_line_run(&mut line_style, canvas);
                    canvas.save_state();
                    canvas.set_stroke(*style);
                    line_style = Some(*style);
                }
                canvas.stroke_line(*from, *to);
            }
            DrawInstruction::FilledRects(rects) => {
                end_line_run(&mut line_style, canvas);
                canvas.save_state();
                canvas.set_fill(Ink::Black);
                canvas.set_stroke(StrokeStyle::MARKER);
                canvas.fill_stroke_rects(rects);
                canvas.restore_state();
            }
            DrawInstruction::StrokedRects { rects, style } => {
                end_line_run(&mut line_style, canvas);
                canvas.save_state();
                canvas.set_stroke(*style);
                canvas.stroke_rects(rects);
                canvas.restore_state();
            }
            DrawInstruction::Text(run) => {
                end_line_run(&mut line_style, canvas);
                canvas.draw_text(run.anchor, &run.text, run.size);
            }
        }
    }

    end_line_run(&mut line_style, canvas);
}

fn end_line_run(line_style: &mut Option<StrokeStyle>, canvas: &mut impl Canvas) {
    if line_style.take().is_some() {
        canvas.restore_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LabelRole, TextRun};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        depth: i32,
    }

    impl Canvas for Recorder {
        fn save_state(&mut self) {
            self.depth += 1;
            self.calls.push("save".into());
        }
        fn restore_state(&mut self) {
            self.depth -= 1;
            self.calls.push("restore".into());
        }
        fn set_stroke(&mut self, style: StrokeStyle) {
            self.calls.push(format!("stroke {}", style.width));
        }
        fn set_fill(&mut self, _ink: Ink) {
            self.calls.push("fill".into());
        }
        fn stroke_line(&mut self, _from: Point, _to: Point) {
            self.calls.push("line".into());
        }
        fn fill_stroke_rects(&mut self, rects: &[Rect]) {
            self.calls.push(format!("fill_stroke {}", rects.len()));
        }
        fn stroke_rects(&mut self, rects: &[Rect]) {
            self.calls.push(format!("outline {}", rects.len()));
        }
        fn draw_text(&mut self, _anchor: Point, text: &str, _size: f32) {
            self.calls.push(format!("text {text}"));
        }
    }

    fn line(style: StrokeStyle) -> DrawInstruction {
        DrawInstruction::line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), style)
    }

    #[test]
    fn test_line_runs_share_state() {
        let ops = vec![
            line(StrokeStyle::GRID),
            line(StrokeStyle::GRID),
            line(StrokeStyle::CORNELL),
        ];
        let mut canvas = Recorder::default();
        replay(&ops, &mut canvas);

        assert_eq!(
            canvas.calls,
            vec![
                "save", "stroke 0.1", "line", "line", "restore", "save", "stroke 1", "line",
                "restore"
            ]
        );
        assert_eq!(canvas.depth, 0);
    }

    #[test]
    fn test_markers_paint_once() {
        let ops = vec![
            line(StrokeStyle::GRID),
            DrawInstruction::FilledRects(vec![Rect::default(); 4]),
            DrawInstruction::Text(TextRun {
                anchor: Point::default(),
                text: "hi".to_string(),
                size: 8.0,
                role: LabelRole::BottomLeft,
            }),
        ];
        let mut canvas = Recorder::default();
        replay(&ops, &mut canvas);

        assert_eq!(
            canvas
                .calls
                .iter()
                .filter(|c| c.starts_with("fill_stroke"))
                .collect::<Vec<_>>(),
            vec!["fill_stroke 4"]
        );
        assert_eq!(canvas.calls.last().map(String::as_str), Some("text hi"));
        assert_eq!(canvas.depth, 0);
    }
}
