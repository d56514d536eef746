//! Rectangle-set union stored as y-sorted bands of x-sorted spans.
//!
//! Each band covers `[top, bottom)` vertically and holds disjoint, sorted,
//! non-touching horizontal spans `[start, end)`. Adjacent bands never carry
//! identical spans, so two regions covering the same pixels compare equal.

use hudkit_common::Rect;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Band {
    top: i32,
    bottom: i32,
    spans: Vec<(i32, i32)>,
}

/// A set of pixels expressed as a union of rectangles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    bands: Vec<Band>,
}

impl Region {
    /// The empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Union of the given rectangles. Zero- and negative-area rectangles
    /// contribute nothing.
    pub fn from_rects<I>(rects: I) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        let rects: Vec<Rect> = rects.into_iter().filter(|r| !r.is_empty()).collect();
        if rects.is_empty() {
            return Self::new();
        }

        let mut edges: Vec<i32> = rects.iter().flat_map(|r| [r.y, r.bottom()]).collect();
        edges.sort_unstable();
        edges.dedup();

        let mut bands: Vec<Band> = Vec::new();
        for pair in edges.windows(2) {
            let (top, bottom) = (pair[0], pair[1]);
            let mut spans: Vec<(i32, i32)> = rects
                .iter()
                .filter(|r| r.y <= top && r.bottom() >= bottom)
                .map(|r| (r.x, r.right()))
                .collect();
            spans.sort_unstable();
            let spans = merge_spans(spans);
            if spans.is_empty() {
                continue;
            }

            match bands.last_mut() {
                Some(prev) if prev.bottom == top && prev.spans == spans => prev.bottom = bottom,
                _ => bands.push(Band {
                    top,
                    bottom,
                    spans,
                }),
            }
        }

        Self { bands }
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Number of covered pixels.
    pub fn area(&self) -> i64 {
        self.bands
            .iter()
            .map(|band| {
                let height = band.bottom as i64 - band.top as i64;
                let width: i64 = band
                    .spans
                    .iter()
                    .map(|&(start, end)| end as i64 - start as i64)
                    .sum();
                width * height
            })
            .sum()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.bands
            .iter()
            .find(|band| y >= band.top && y < band.bottom)
            .is_some_and(|band| band.spans.iter().any(|&(start, end)| x >= start && x < end))
    }

    /// Disjoint rectangles covering exactly this region, top to bottom and
    /// left to right.
    pub fn rects(&self) -> Vec<Rect> {
        self.bands
            .iter()
            .flat_map(|band| {
                band.spans.iter().map(move |&(start, end)| {
                    Rect::new(
                        start,
                        band.top,
                        end.saturating_sub(start),
                        band.bottom.saturating_sub(band.top),
                    )
                })
            })
            .collect()
    }
}

/// Merge sorted spans, joining overlapping and touching ones.
fn merge_spans(sorted: Vec<(i32, i32)>) -> Vec<(i32, i32)> {
    let mut merged: Vec<(i32, i32)> = Vec::with_capacity(sorted.len());
    for (start, end) in sorted {
        if end <= start {
            continue;
        }
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_region() {
        let region = Region::new();
        assert!(region.is_empty());
        assert_eq!(region.area(), 0);
        assert!(region.rects().is_empty());
        assert!(!region.contains(0, 0));
    }

    #[test]
    fn overlapping_squares_union() {
        let region = Region::from_rects([Rect::new(0, 0, 10, 10), Rect::new(5, 5, 10, 10)]);
        assert_eq!(region.area(), 175);
        assert!(region.contains(0, 0));
        assert!(region.contains(14, 14));
        assert!(region.contains(7, 7));
        assert!(!region.contains(12, 2));
        assert!(!region.contains(2, 12));
        assert!(!region.contains(50, 50));
    }

    #[test]
    fn degenerate_rects_contribute_nothing() {
        let region = Region::from_rects([
            Rect::ZERO,
            Rect::new(10, 10, 0, 50),
            Rect::new(10, 10, 50, -5),
        ]);
        assert!(region.is_empty());
    }

    #[test]
    fn touching_rects_coalesce() {
        let region = Region::from_rects([Rect::new(0, 0, 10, 10), Rect::new(10, 0, 10, 10)]);
        assert_eq!(region.rects(), vec![Rect::new(0, 0, 20, 10)]);

        let stacked = Region::from_rects([Rect::new(0, 0, 10, 10), Rect::new(0, 10, 10, 10)]);
        assert_eq!(stacked.rects(), vec![Rect::new(0, 0, 10, 20)]);
    }

    #[test]
    fn duplicate_rects_count_once() {
        let r = Rect::new(3, 4, 20, 30);
        let region = Region::from_rects([r, r, r]);
        assert_eq!(region.area(), r.area());
        assert_eq!(region.rects(), vec![r]);
    }

    #[test]
    fn disjoint_rects_keep_gap() {
        let region = Region::from_rects([Rect::new(0, 0, 5, 5), Rect::new(100, 200, 5, 5)]);
        assert_eq!(region.area(), 50);
        assert!(!region.contains(50, 100));
        assert_eq!(region.rects().len(), 2);
    }

    #[test]
    fn negative_coordinates() {
        let region = Region::from_rects([Rect::new(-20, -20, 10, 10)]);
        assert!(region.contains(-20, -20));
        assert!(!region.contains(-10, -10));
        assert_eq!(region.area(), 100);
    }

    #[test]
    fn rect_order_does_not_matter() {
        let rects = [
            Rect::new(0, 0, 30, 5),
            Rect::new(10, 0, 5, 40),
            Rect::new(20, 20, 30, 30),
        ];
        let mut reversed = rects;
        reversed.reverse();
        let a = Region::from_rects(rects);
        assert_eq!(a, Region::from_rects(reversed));
        assert_eq!(a.area(), 150 + 200 - 25 + 900);
    }

    #[test]
    fn rects_are_disjoint_and_cover_area() {
        let region = Region::from_rects([
            Rect::new(0, 0, 40, 40),
            Rect::new(20, 20, 40, 40),
            Rect::new(-10, 30, 15, 5),
        ]);
        let rects = region.rects();
        let total: i64 = rects.iter().map(Rect::area).sum();
        assert_eq!(total, region.area());
        assert_eq!(Region::from_rects(rects), region);
    }
}
