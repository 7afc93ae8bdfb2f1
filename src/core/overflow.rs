//! Overflow redistribution.
//!
//! Decides which entries stay inline and which collapse into the "More"
//! slot so the bar fits on one line. The pass runs against a [`NavSurface`]
//! so it can be driven by the live document or by a test double.
//!
//! # Algorithm
//!
//! 1. Restore every contained entry inline (maximal layout).
//! 2. `available = bar - (logo + cta + fixed_buffer)`.
//! 3. On wide viewports, cap the link list's max width (rendering hint only).
//! 4. `used = sum(entry widths) + (count - 1) * gap`.
//! 5. While `used > available`, evict the last inline entry.
//! 6. Keep at least one entry inline.
//! 7. Close the slot if it ended up empty.

use crate::config::LayoutConfig;
use crate::models::NavBar;

/// Widths read from the surface after the restore step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    pub bar_width: f64,
    pub logo_width: f64,
    pub cta_width: f64,
    /// Widths of the inline entries, in bar order.
    pub entry_widths: Vec<f64>,
    /// Gap reported by the live layout, if any.
    pub gap: Option<f64>,
}

/// Where a [`NavBar`] is rendered and measured.
pub trait NavSurface {
    fn viewport_width(&self) -> f64;

    /// Reflect the bar's current partition.
    fn apply(&mut self, bar: &NavBar);

    /// Measure the surface as currently applied.
    fn measure(&self, bar: &NavBar) -> Measurements;

    /// Set (or clear) the link list's maximum width.
    fn set_max_width(&mut self, max_width: Option<f64>);
}

/// Result of a redistribution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// Narrow viewport; the mobile menu applies instead.
    Skipped,
    Fitted { visible: usize, overflowed: usize },
}

/// Space left for entries once the logo and call-to-action are reserved.
pub fn available_width(m: &Measurements, layout: &LayoutConfig) -> f64 {
    m.bar_width - (m.logo_width + m.cta_width + layout.fixed_buffer)
}

/// Max width for the link list on wide viewports, `None` to clear it.
pub fn width_cap(viewport_width: f64, m: &Measurements, layout: &LayoutConfig) -> Option<f64> {
    if viewport_width >= layout.wide_breakpoint && m.cta_width > 0.0 {
        Some(m.bar_width - (m.cta_width + layout.fixed_margin) - m.logo_width)
    } else {
        None
    }
}

/// Total width of `widths` laid out with `gap` between neighbours.
pub fn used_width(widths: &[f64], gap: f64) -> f64 {
    let gaps = widths.len().saturating_sub(1) as f64;
    widths.iter().sum::<f64>() + gaps * gap
}

/// Run one redistribution pass over `bar`.
///
/// Idempotent: a second pass over an unchanged surface produces the same
/// partition.
pub fn redistribute<S: NavSurface>(
    bar: &mut NavBar,
    surface: &mut S,
    layout: &LayoutConfig,
) -> PassOutcome {
    let viewport = surface.viewport_width();
    if viewport <= layout.narrow_breakpoint {
        return PassOutcome::Skipped;
    }

    bar.restore_all();
    surface.apply(bar);

    let measured = surface.measure(bar);
    let available = available_width(&measured, layout);
    surface.set_max_width(width_cap(viewport, &measured, layout));

    let gap = measured.gap.unwrap_or(layout.default_gap);
    let mut widths = measured.entry_widths;
    let mut used = used_width(&widths, gap);

    while used > available {
        let Some(width) = widths.pop() else { break };
        bar.evict_last();
        used -= width;
        if !widths.is_empty() {
            used -= gap;
        }
    }

    if bar.visible_indices().is_empty() {
        bar.restore_one();
    }

    bar.overflow_mut().settle();
    surface.apply(bar);

    PassOutcome::Fitted {
        visible: bar.visible_indices().len(),
        overflowed: bar.overflow().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::build_nav_bar;
    use crate::models::NavLink;

    /// In-memory surface with fixed per-entry widths.
    struct FakeSurface {
        viewport: f64,
        bar_width: f64,
        logo_width: f64,
        cta_width: f64,
        widths: Vec<f64>,
        gap: Option<f64>,
        max_width: Option<f64>,
        applied: Vec<(Vec<usize>, Vec<usize>)>,
    }

    impl FakeSurface {
        /// Surface whose available width is exactly `available` under
        /// [`layout`].
        fn with_available(widths: &[f64], available: f64) -> Self {
            let logo_width = 100.0;
            let cta_width = 60.0;
            Self {
                viewport: 1000.0,
                bar_width: available + logo_width + cta_width + layout().fixed_buffer,
                logo_width,
                cta_width,
                widths: widths.to_vec(),
                gap: Some(18.0),
                max_width: None,
                applied: Vec::new(),
            }
        }

        fn set_available(&mut self, available: f64) {
            self.bar_width = available + self.logo_width + self.cta_width + layout().fixed_buffer;
        }
    }

    impl NavSurface for FakeSurface {
        fn viewport_width(&self) -> f64 {
            self.viewport
        }

        fn apply(&mut self, bar: &NavBar) {
            self.applied.push((
                bar.visible_indices().to_vec(),
                bar.overflow().contained().to_vec(),
            ));
        }

        fn measure(&self, bar: &NavBar) -> Measurements {
            Measurements {
                bar_width: self.bar_width,
                logo_width: self.logo_width,
                cta_width: self.cta_width,
                entry_widths: bar.visible_indices().iter().map(|&i| self.widths[i]).collect(),
                gap: self.gap,
            }
        }

        fn set_max_width(&mut self, max_width: Option<f64>) {
            self.max_width = max_width;
        }
    }

    fn layout() -> LayoutConfig {
        LayoutConfig::default()
    }

    fn nav_bar(count: usize) -> NavBar {
        let links: Vec<_> = (0..count)
            .map(|i| NavLink::new(format!("Item {i}"), format!("item{i}.html")))
            .collect();
        build_nav_bar(&links, &NavLink::new("Donate", "donate.html"), "item0.html", None)
    }

    fn partition(bar: &NavBar) -> (Vec<usize>, Vec<usize>) {
        (
            bar.visible_indices().to_vec(),
            bar.overflow().contained().to_vec(),
        )
    }

    #[test]
    fn test_reference_scenario() {
        let widths = [80.0, 120.0, 100.0, 90.0, 70.0];
        let mut bar = nav_bar(5);
        let mut surface = FakeSurface::with_available(&widths, 300.0);

        let outcome = redistribute(&mut bar, &mut surface, &layout());

        assert_eq!(outcome, PassOutcome::Fitted { visible: 2, overflowed: 3 });
        assert_eq!(bar.visible_indices(), &[0, 1]);
        assert_eq!(bar.overflow().contained(), &[2, 3, 4]);
        assert_eq!(bar.overflow().count_label(), "(3)");
        assert!(!bar.overflow().is_hidden());
        // DOM sees the maximal layout first, then the final partition
        assert_eq!(surface.applied.first(), Some(&(vec![0, 1, 2, 3, 4], vec![])));
        assert_eq!(surface.applied.last(), Some(&(vec![0, 1], vec![2, 3, 4])));
    }

    #[test]
    fn test_exact_fit_does_not_evict() {
        // 80 + 120 + 18 = 218
        let mut bar = nav_bar(2);
        let mut surface = FakeSurface::with_available(&[80.0, 120.0], 218.0);

        redistribute(&mut bar, &mut surface, &layout());

        assert_eq!(partition(&bar), (vec![0, 1], vec![]));
        assert!(bar.overflow().is_hidden());
    }

    #[test]
    fn test_idempotent() {
        let widths = [80.0, 120.0, 100.0, 90.0, 70.0];
        let mut bar = nav_bar(5);
        let mut surface = FakeSurface::with_available(&widths, 300.0);

        redistribute(&mut bar, &mut surface, &layout());
        let first = partition(&bar);
        redistribute(&mut bar, &mut surface, &layout());

        assert_eq!(partition(&bar), first);
    }

    #[test]
    fn test_widening_restores_original_order() {
        let widths = [80.0, 120.0, 100.0, 90.0, 70.0];
        let mut bar = nav_bar(5);
        let mut surface = FakeSurface::with_available(&widths, 250.0);

        redistribute(&mut bar, &mut surface, &layout());
        assert!(!bar.overflow().is_empty());
        bar.overflow_mut().open();

        surface.set_available(1000.0);
        redistribute(&mut bar, &mut surface, &layout());

        assert_eq!(partition(&bar), (vec![0, 1, 2, 3, 4], vec![]));
        assert!(!bar.overflow().is_open());
    }

    #[test]
    fn test_never_empties_bar() {
        let mut bar = nav_bar(3);
        let mut surface = FakeSurface::with_available(&[200.0, 200.0, 200.0], 50.0);

        let outcome = redistribute(&mut bar, &mut surface, &layout());

        assert_eq!(outcome, PassOutcome::Fitted { visible: 1, overflowed: 2 });
        assert_eq!(partition(&bar), (vec![0], vec![1, 2]));
    }

    #[test]
    fn test_negative_available_keeps_one() {
        let mut bar = nav_bar(2);
        let mut surface = FakeSurface::with_available(&[80.0, 80.0], -40.0);

        redistribute(&mut bar, &mut surface, &layout());

        assert_eq!(bar.visible_indices().len(), 1);
        assert_eq!(bar.overflow().len(), 1);
    }

    #[test]
    fn test_empty_bar() {
        let mut bar = nav_bar(0);
        let mut surface = FakeSurface::with_available(&[], 100.0);

        let outcome = redistribute(&mut bar, &mut surface, &layout());

        assert_eq!(outcome, PassOutcome::Fitted { visible: 0, overflowed: 0 });
    }

    #[test]
    fn test_narrow_viewport_is_noop() {
        let widths = [80.0, 120.0, 100.0, 90.0, 70.0];
        let mut bar = nav_bar(5);
        let mut surface = FakeSurface::with_available(&widths, 300.0);
        redistribute(&mut bar, &mut surface, &layout());
        let before = partition(&bar);
        let applied = surface.applied.len();

        for viewport in [900.0, 600.0, 320.0] {
            surface.viewport = viewport;
            surface.set_available(10.0);
            assert_eq!(redistribute(&mut bar, &mut surface, &layout()), PassOutcome::Skipped);
        }

        assert_eq!(partition(&bar), before);
        assert_eq!(surface.applied.len(), applied);
    }

    #[test]
    fn test_default_gap_when_unmeasured() {
        // 100 + 100 + 18 (default) = 218 > 210
        let mut bar = nav_bar(2);
        let mut surface = FakeSurface::with_available(&[100.0, 100.0], 210.0);
        surface.gap = None;

        redistribute(&mut bar, &mut surface, &layout());
        assert_eq!(partition(&bar), (vec![0], vec![1]));

        // Same widths with a measured zero gap fit
        let mut bar = nav_bar(2);
        surface.gap = Some(0.0);
        redistribute(&mut bar, &mut surface, &layout());
        assert_eq!(partition(&bar), (vec![0, 1], vec![]));
    }

    #[test]
    fn test_width_cap_on_wide_viewport() {
        let mut bar = nav_bar(2);
        let mut surface = FakeSurface::with_available(&[50.0, 50.0], 500.0);
        surface.viewport = 1300.0;

        redistribute(&mut bar, &mut surface, &layout());

        let expected = surface.bar_width - (60.0 + layout().fixed_margin) - 100.0;
        assert_eq!(surface.max_width, Some(expected));
    }

    #[test]
    fn test_width_cap_cleared() {
        let mut bar = nav_bar(2);
        let mut surface = FakeSurface::with_available(&[50.0, 50.0], 500.0);
        surface.max_width = Some(123.0);

        // Below the wide breakpoint
        redistribute(&mut bar, &mut surface, &layout());
        assert_eq!(surface.max_width, None);

        // Wide, but no call-to-action rendered
        surface.viewport = 1300.0;
        surface.cta_width = 0.0;
        redistribute(&mut bar, &mut surface, &layout());
        assert_eq!(surface.max_width, None);
    }

    #[test]
    fn test_cap_does_not_change_fit() {
        let widths = [80.0, 120.0, 100.0, 90.0, 70.0];
        let mut narrow_bar = nav_bar(5);
        let mut wide_bar = nav_bar(5);
        let mut surface = FakeSurface::with_available(&widths, 300.0);

        redistribute(&mut narrow_bar, &mut surface, &layout());
        surface.viewport = 1400.0;
        redistribute(&mut wide_bar, &mut surface, &layout());

        assert_eq!(partition(&narrow_bar), partition(&wide_bar));
    }

    #[test]
    fn test_partition_covers_every_entry() {
        let widths = [60.0, 75.0, 90.0, 110.0, 45.0, 130.0, 80.0];
        for available in [0.0, 100.0, 250.0, 400.0, 575.0, 800.0] {
            let mut bar = nav_bar(widths.len());
            let mut surface = FakeSurface::with_available(&widths, available);
            redistribute(&mut bar, &mut surface, &layout());

            let (visible, contained) = partition(&bar);
            let mut all: Vec<_> = visible.iter().chain(&contained).copied().collect();
            all.sort_unstable();
            assert_eq!(all, (0..widths.len()).collect::<Vec<_>>(), "available {available}");
            assert!(!visible.is_empty());
            assert_eq!(bar.cta().href(), "donate.html");

            // Inline entries fit unless only the guard entry remains
            if visible.len() > 1 {
                let inline: Vec<f64> = visible.iter().map(|&i| widths[i]).collect();
                assert!(used_width(&inline, 18.0) <= available);
            }
        }
    }

    #[test]
    fn test_used_width() {
        assert_eq!(used_width(&[], 18.0), 0.0);
        assert_eq!(used_width(&[80.0], 18.0), 80.0);
        assert_eq!(used_width(&[80.0, 120.0, 100.0], 18.0), 336.0);
    }
}
