//! # Border Cycle
//!
//! The display border is a small round-robin state machine advanced by the
//! joystick button. Each state is a list of insets; every inset becomes one
//! unfilled rectangle drawn from the screen edge inward.

use crate::io::Rect;

/// One state of a border cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyle {
    /// User-facing parameter for this state: a thickness or a style number.
    pub param: u8,
    /// Distance of each outline from the screen edge.
    pub insets: &'static [u8],
}

/// A fixed, non-empty cycle of border states.
#[derive(Debug, PartialEq, Eq)]
pub struct BorderCycle {
    styles: &'static [BorderStyle],
}

/// Solid border alternating between 2 and 4 pixels thick.
pub static THICKNESS: BorderCycle = BorderCycle::new(&[
    BorderStyle { param: 2, insets: &[0, 1] },
    BorderStyle { param: 4, insets: &[0, 1, 2, 3] },
]);

/// Thin, double-line and thick borders.
pub static STYLES: BorderCycle = BorderCycle::new(&[
    BorderStyle { param: 0, insets: &[0] },
    BorderStyle { param: 1, insets: &[0, 3] },
    BorderStyle { param: 2, insets: &[0, 1, 2] },
]);

impl BorderCycle {
    /// # Panics
    ///
    /// Panics (at compile time for statics) if `styles` is empty or longer
    /// than `u8::MAX` states.
    pub const fn new(styles: &'static [BorderStyle]) -> Self {
        assert!(!styles.is_empty() && styles.len() <= u8::MAX as usize);
        Self { styles }
    }

    pub const fn len(&self) -> u8 {
        self.styles.len() as u8
    }

    /// Always false; cycles have at least one state.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// State following `index`, wrapping to the first after the last.
    pub const fn next(&self, index: u8) -> u8 {
        let next = index as usize + 1;
        if next >= self.styles.len() {
            0
        } else {
            next as u8
        }
    }

    /// Style at `index`; out-of-range indices wrap.
    pub fn style(&self, index: u8) -> &BorderStyle {
        &self.styles[index as usize % self.styles.len()]
    }

    /// The outlines to draw for state `index` on a `width` x `height` screen.
    ///
    /// Insets that would leave no room on either axis are skipped.
    pub fn outlines(&self, index: u8, width: u8, height: u8) -> impl Iterator<Item = Rect> + '_ {
        self.style(index).insets.iter().filter_map(move |&inset| {
            let w = width.checked_sub(inset.checked_mul(2)?)?;
            let h = height.checked_sub(inset.checked_mul(2)?)?;
            (w > 0 && h > 0).then_some(Rect::new(inset, inset, w, h))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(cycle: &BorderCycle, index: u8) -> Vec<Rect> {
        cycle.outlines(index, 128, 64).collect()
    }

    #[test]
    fn thickness_cycle_alternates_two_and_four() {
        assert_eq!(THICKNESS.style(0).param, 2);
        assert_eq!(THICKNESS.next(0), 1);
        assert_eq!(THICKNESS.style(1).param, 4);
        assert_eq!(THICKNESS.next(1), 0);
    }

    #[test]
    fn style_cycle_wraps_after_three() {
        let mut index = 0;
        let mut seen = Vec::new();
        for _ in 0..STYLES.len() {
            seen.push(STYLES.style(index).param);
            index = STYLES.next(index);
        }
        assert_eq!(seen, [0, 1, 2]);
        assert_eq!(index, 0);
    }

    #[test]
    fn thickness_draws_nested_outlines() {
        assert_eq!(
            collect(&THICKNESS, 0),
            [Rect::new(0, 0, 128, 64), Rect::new(1, 1, 126, 62)]
        );
        let thick = collect(&THICKNESS, 1);
        assert_eq!(thick.len(), 4);
        assert_eq!(thick[3], Rect::new(3, 3, 122, 58));
    }

    #[test]
    fn double_line_style_leaves_a_gap() {
        assert_eq!(
            collect(&STYLES, 1),
            [Rect::new(0, 0, 128, 64), Rect::new(3, 3, 122, 58)]
        );
    }

    #[test]
    fn degenerate_outlines_are_dropped() {
        let outlines: Vec<_> = THICKNESS.outlines(1, 4, 4).collect();
        assert_eq!(outlines, [Rect::new(0, 0, 4, 4), Rect::new(1, 1, 2, 2)]);
    }
}
