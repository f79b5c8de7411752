//! Corner registration markers

use super::{DrawInstruction, Rect};

/// Marker squares for the four corners of `target`.
///
/// Order is bottom-left, bottom-right, top-left, top-right. Bottom markers
/// sit inside the area; top markers sit on top of its upper edge.
pub fn compute_markers(target: &Rect, marker_side: f32) -> [Rect; 4] {
    [
        Rect::square(target.left(), target.bottom(), marker_side),
        Rect::square(target.right() - marker_side, target.bottom(), marker_side),
        Rect::square(target.left(), target.top(), marker_side),
        Rect::square(target.right() - marker_side, target.top(), marker_side),
    ]
}

/// All four markers as a single fill-and-stroke instruction
pub fn marker_instruction(target: &Rect, marker_side: f32) -> DrawInstruction {
    DrawInstruction::FilledRects(compute_markers(target, marker_side).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn test_marker_centers_track_corners() {
        let side = 14.0;
        let half = side / 2.0;

        for target in [
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(20.0, 30.0, 566.9, 782.5),
            Rect::new(-5.0, 12.5, 42.0, 17.0),
        ] {
            let [bl, br, tl, tr] = compute_markers(&target, side);

            assert_close(bl.center_x(), target.left() + half);
            assert_close(bl.center_y(), target.bottom() + half);
            assert_close(br.center_x(), target.right() - half);
            assert_close(br.center_y(), target.bottom() + half);
            assert_close(tl.center_x(), target.left() + half);
            assert_close(tl.center_y(), target.top() + half);
            assert_close(tr.center_x(), target.right() - half);
            assert_close(tr.center_y(), target.top() + half);
        }
    }

    #[test]
    fn test_markers_are_one_batch() {
        let target = Rect::new(10.0, 10.0, 200.0, 300.0);
        match marker_instruction(&target, 5.0) {
            DrawInstruction::FilledRects(rects) => {
                assert_eq!(rects.len(), 4);
                assert!(rects.iter().all(|r| r.width == 5.0 && r.height == 5.0));
            }
            other => panic!("Expected FilledRects, got {other:?}"),
        }
    }
}
