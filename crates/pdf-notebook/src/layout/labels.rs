//! Label placement
//!
//! Computes where each text string of the template starts. Right-aligned and
//! centered labels need the rendered width of their text, which comes from
//! the font through [`TextMetrics`].

use crate::constants::*;
use crate::font::TextMetrics;
use crate::options::BrandVariant;
use crate::types::PageMetadata;

use super::{DrawInstruction, LabelRole, PageGeometry, Point, Rect, TextRun};

/// The four corner labels of a ruled page
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSet {
    pub top_left: TextRun,
    pub top_right: TextRun,
    pub bottom_left: TextRun,
    pub bottom_right: TextRun,
}

impl LabelSet {
    pub fn into_instructions(self) -> Vec<DrawInstruction> {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
        .into_iter()
        .map(DrawInstruction::Text)
        .collect()
    }
}

/// Brand text shown at the top-left of ruled pages
pub fn title_row(brand: BrandVariant, metadata: &PageMetadata) -> String {
    let brand_name = match brand {
        BrandVariant::Digital => BRAND_DIGITAL,
        BrandVariant::SubjectDependent if metadata.subject_name.is_empty() => BRAND_PAPER,
        BrandVariant::SubjectDependent => BRAND_DIGITAL,
    };

    if metadata.author_name.is_empty() {
        brand_name.to_string()
    } else {
        format!("{}: {}", brand_name, metadata.author_name)
    }
}

/// `{subject}, {course}`, or the course alone when there is no subject
pub fn subject_row(metadata: &PageMetadata) -> String {
    if metadata.subject_name.is_empty() {
        metadata.course_name.clone()
    } else {
        format!("{}, {}", metadata.subject_name, metadata.course_name)
    }
}

/// X coordinate that centers `text` on a page of the given width
pub fn centered_x(page_width: f32, text: &str, size: f32, metrics: &impl TextMetrics) -> f32 {
    (page_width - metrics.text_width(text, size)) / 2.0
}

/// Corner labels for a ruled page.
///
/// The top row sits on the upper edge of `target`, the bottom row on its
/// lower edge. With `reserve_marker_space` the top labels keep clear of the
/// corner markers.
pub fn compute_labels(
    target: &Rect,
    reserve_marker_space: bool,
    marker_side: f32,
    brand: BrandVariant,
    metadata: &PageMetadata,
    metrics: &impl TextMetrics,
) -> LabelSet {
    let marker_clearance = if reserve_marker_space {
        marker_side + MARKER_LABEL_GAP
    } else {
        0.0
    };

    let top_y = target.top();
    let bottom_y = target.bottom();

    let top_left = TextRun {
        anchor: Point::new(target.left() + marker_clearance, top_y),
        text: title_row(brand, metadata),
        size: TOP_LABEL_FONT_SIZE,
        role: LabelRole::TopLeft,
    };

    let top_right_text = subject_row(metadata);
    let top_right_width = metrics.text_width(&top_right_text, TOP_LABEL_FONT_SIZE);
    let top_right = TextRun {
        anchor: Point::new(target.right() - marker_clearance - top_right_width, top_y),
        text: top_right_text,
        size: TOP_LABEL_FONT_SIZE,
        role: LabelRole::TopRight,
    };

    let bottom_left = TextRun {
        anchor: Point::new(target.left(), bottom_y),
        text: metadata.copyright_line(),
        size: BOTTOM_LABEL_FONT_SIZE,
        role: LabelRole::BottomLeft,
    };

    let contacts_width = metrics.text_width(&metadata.contacts, BOTTOM_LABEL_FONT_SIZE);
    let bottom_right = TextRun {
        anchor: Point::new(target.right() - contacts_width, bottom_y),
        text: metadata.contacts.clone(),
        size: BOTTOM_LABEL_FONT_SIZE,
        role: LabelRole::BottomRight,
    };

    LabelSet {
        top_left,
        top_right,
        bottom_left,
        bottom_right,
    }
}

/// The six centered strings of the title page, top to bottom
pub fn compute_title_page_labels(
    page: PageGeometry,
    metadata: &PageMetadata,
    metrics: &impl TextMetrics,
) -> Vec<TextRun> {
    let top = page.height;
    let bottom = 0.0;

    let entries = [
        (
            LabelRole::TitleBrand,
            BRAND_DIGITAL.to_string(),
            TITLE_BRAND_FONT_SIZE,
            top - TITLE_BRAND_OFFSET_FROM_TOP,
        ),
        (
            LabelRole::TitleCourse,
            metadata.course_name.clone(),
            TITLE_COURSE_FONT_SIZE,
            top - TITLE_COURSE_OFFSET_FROM_TOP,
        ),
        (
            LabelRole::TitleSubject,
            metadata.subject_name.clone(),
            TITLE_SUBJECT_FONT_SIZE,
            top - TITLE_SUBJECT_OFFSET_FROM_TOP,
        ),
        (
            LabelRole::TitleAuthor,
            metadata.author_name.clone(),
            TITLE_AUTHOR_FONT_SIZE,
            bottom + TITLE_AUTHOR_OFFSET_FROM_BOTTOM,
        ),
        (
            LabelRole::TitleContacts,
            metadata.contacts.clone(),
            TITLE_CONTACTS_FONT_SIZE,
            bottom + TITLE_CONTACTS_OFFSET_FROM_BOTTOM,
        ),
        (
            LabelRole::TitleCopyright,
            metadata.copyright_line(),
            TITLE_COPYRIGHT_FONT_SIZE,
            bottom + TITLE_COPYRIGHT_OFFSET_FROM_BOTTOM,
        ),
    ];

    entries
        .into_iter()
        .map(|(role, text, size, y)| TextRun {
            anchor: Point::new(centered_x(page.width, &text, size, metrics), y),
            text,
            size,
            role,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is half the font size wide
    struct HalfEm;

    impl TextMetrics for HalfEm {
        fn text_width(&self, text: &str, size: f32) -> f32 {
            text.chars().count() as f32 * size * 0.5
        }
    }

    fn metadata() -> PageMetadata {
        PageMetadata {
            author_name: "Ada".to_string(),
            subject_name: "Algebra".to_string(),
            course_name: "Year 1".to_string(),
            copyright: "Example School".to_string(),
            contacts: "ada@example.com".to_string(),
            academic_year: "2024-2025".to_string(),
        }
    }

    #[test]
    fn test_title_row_variants() {
        let mut meta = metadata();
        assert_eq!(
            title_row(BrandVariant::SubjectDependent, &meta),
            "Edustor Digital: Ada"
        );

        meta.subject_name.clear();
        assert_eq!(
            title_row(BrandVariant::SubjectDependent, &meta),
            "Edustor Paper: Ada"
        );
        assert_eq!(title_row(BrandVariant::Digital, &meta), "Edustor Digital: Ada");

        meta.author_name.clear();
        assert_eq!(title_row(BrandVariant::SubjectDependent, &meta), "Edustor Paper");
    }

    #[test]
    fn test_subject_row() {
        let mut meta = metadata();
        assert_eq!(subject_row(&meta), "Algebra, Year 1");
        meta.subject_name.clear();
        assert_eq!(subject_row(&meta), "Year 1");
    }

    #[test]
    fn test_right_alignment_without_reservation() {
        let target = Rect::new(20.0, 20.0, 500.0, 700.0);
        let labels = compute_labels(
            &target,
            false,
            14.0,
            BrandVariant::SubjectDependent,
            &metadata(),
            &HalfEm,
        );

        let tr = &labels.top_right;
        let br = &labels.bottom_right;
        assert!((tr.anchor.x + HalfEm.text_width(&tr.text, tr.size) - target.right()).abs() < 1e-4);
        assert!((br.anchor.x + HalfEm.text_width(&br.text, br.size) - target.right()).abs() < 1e-4);
        assert_eq!(labels.top_left.anchor, Point::new(20.0, 720.0));
    }

    #[test]
    fn test_marker_reservation() {
        let target = Rect::new(20.0, 20.0, 500.0, 700.0);
        let labels = compute_labels(
            &target,
            true,
            14.0,
            BrandVariant::SubjectDependent,
            &metadata(),
            &HalfEm,
        );

        assert_eq!(labels.top_left.anchor.x, 37.0);
        let tr = &labels.top_right;
        let right_edge = tr.anchor.x + HalfEm.text_width(&tr.text, tr.size);
        assert!((right_edge - (target.right() - 17.0)).abs() < 1e-4);

        // Bottom row ignores the markers
        assert_eq!(labels.bottom_left.anchor, Point::new(20.0, 20.0));
        assert_eq!(labels.bottom_left.text, "© Example School 2024-2025");
    }

    #[test]
    fn test_title_page_labels_are_centered() {
        let page = PageGeometry::new(600.0, 800.0);
        let labels = compute_title_page_labels(page, &metadata(), &HalfEm);

        assert_eq!(labels.len(), 6);
        for label in &labels {
            let width = HalfEm.text_width(&label.text, label.size);
            let left_gap = label.anchor.x;
            let right_gap = page.width - (label.anchor.x + width);
            assert!((left_gap - right_gap).abs() < 1e-3);
        }

        let ys: Vec<f32> = labels.iter().map(|l| l.anchor.y).collect();
        assert_eq!(ys, vec![750.0, 435.0, 400.0, 100.0, 80.0, 20.0]);
        assert_eq!(labels[0].text, "Edustor Digital");
        assert_eq!(labels[5].text, "© Example School 2024-2025");
    }
}
