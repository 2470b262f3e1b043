//! Convenience extensions over the view tree.

use crate::{Color, GradientLayer, View};

/// Convenience operations on a [`View`].
///
/// Both methods are thin wrappers over the view-tree primitives; they perform
/// no validation and have no failure modes of their own.
pub trait ViewExt {
    /// Add one or more subviews in a single call.
    ///
    /// Each subview is switched into manual-layout mode
    /// ([`View::set_autoresizing_constraints`] set to `false`) and then
    /// appended to the child list, in the order given, after any existing
    /// children. After the call, all of them are ready for explicit
    /// Auto-Layout-style constraints. An empty batch is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use uiforge::{View, ViewExt};
    /// use uiforge::kurbo::Rect;
    ///
    /// let mut view = View::new(Rect::new(0.0, 0.0, 320.0, 480.0));
    /// let title = View::new(Rect::new(0.0, 0.0, 200.0, 40.0));
    /// let button = View::new(Rect::new(0.0, 0.0, 120.0, 44.0));
    ///
    /// view.add_subviews([title, button]);
    /// assert_eq!(view.subviews().len(), 2);
    /// assert!(!view.subviews()[0].uses_autoresizing_constraints());
    /// ```
    fn add_subviews(&mut self, subviews: impl IntoIterator<Item = View>);

    /// Add a vertical gradient layer filling the view's current bounds.
    ///
    /// The layer is created with the bounds as of this call (later bounds
    /// changes do not resize it), renders `colors` in order from top to
    /// bottom with stop locations fixed at `[0.0, 1.0]`, and is appended to
    /// the sublayer stack above any existing layers. The color list is passed
    /// through unmodified, including empty and single-element lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use uiforge::{Color, View, ViewExt};
    /// use uiforge::kurbo::Rect;
    ///
    /// let mut view = View::new(Rect::new(0.0, 0.0, 320.0, 480.0));
    /// view.add_vertical_gradient_layer(&[Color::WHITE, Color::BLACK]);
    ///
    /// let layer = &view.sublayers()[0];
    /// assert_eq!(layer.frame, view.bounds());
    /// assert_eq!(layer.locations, vec![0.0, 1.0]);
    /// ```
    fn add_vertical_gradient_layer(&mut self, colors: &[Color]);
}

impl ViewExt for View {
    fn add_subviews(&mut self, subviews: impl IntoIterator<Item = View>) {
        for mut subview in subviews {
            subview.set_autoresizing_constraints(false);
            self.add_subview(subview);
        }
    }

    fn add_vertical_gradient_layer(&mut self, colors: &[Color]) {
        self.add_sublayer(GradientLayer::vertical(self.bounds(), colors));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Rect};

    fn view(w: f64, h: f64) -> View {
        View::new(Rect::new(0.0, 0.0, w, h))
    }

    fn child_widths(parent: &View) -> Vec<f64> {
        parent.subviews().iter().map(|v| v.bounds().width()).collect()
    }

    #[test]
    fn batch_attach_appends_in_order_with_manual_layout() {
        let mut parent = view(100.0, 100.0);
        parent.add_subview(view(1.0, 1.0)); // pre-existing child, untouched

        parent.add_subviews([view(2.0, 2.0), view(3.0, 3.0)]);

        assert_eq!(child_widths(&parent), vec![1.0, 2.0, 3.0]);
        assert!(parent.subviews()[0].uses_autoresizing_constraints());
        assert!(!parent.subviews()[1].uses_autoresizing_constraints());
        assert!(!parent.subviews()[2].uses_autoresizing_constraints());
    }

    #[test]
    fn batch_attach_is_append_only_across_calls() {
        let mut parent = view(100.0, 100.0);
        parent.add_subviews([view(1.0, 1.0), view(2.0, 2.0)]);
        parent.add_subviews([view(3.0, 3.0)]);
        assert_eq!(child_widths(&parent), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn batch_attach_empty_is_a_noop() {
        let mut parent = view(100.0, 100.0);
        parent.add_subviews([]);
        assert!(parent.subviews().is_empty());
    }

    #[test]
    fn gradient_with_no_colors() {
        let mut v = view(100.0, 50.0);
        v.add_vertical_gradient_layer(&[]);

        assert_eq!(v.sublayers().len(), 1);
        let layer = &v.sublayers()[0];
        assert_eq!(layer.frame, Rect::new(0.0, 0.0, 100.0, 50.0));
        assert!(layer.colors.is_empty());
        assert_eq!(layer.locations, vec![0.0, 1.0]);
    }

    #[test]
    fn gradient_with_one_color_keeps_two_stops() {
        let mut v = view(100.0, 50.0);
        v.add_vertical_gradient_layer(&[Color::WHITE]);

        let layer = &v.sublayers()[0];
        assert_eq!(layer.colors, vec![Color::WHITE]);
        assert_eq!(layer.locations, vec![0.0, 1.0]);
    }

    #[test]
    fn gradient_runs_top_to_bottom() {
        let mut v = view(100.0, 50.0);
        v.add_vertical_gradient_layer(&[Color::WHITE, Color::BLACK]);

        let layer = &v.sublayers()[0];
        assert_eq!(layer.colors, vec![Color::WHITE, Color::BLACK]);
        assert_eq!(layer.start_point(), Point::new(0.0, 0.0));
        assert_eq!(layer.end_point(), Point::new(0.0, 50.0));
        assert_eq!(layer.locations, vec![0.0, 1.0]);
    }

    #[test]
    fn repeated_gradient_calls_stack_independent_layers() {
        let mut v = view(100.0, 50.0);
        v.add_vertical_gradient_layer(&[Color::WHITE]);
        v.add_vertical_gradient_layer(&[Color::BLACK]);

        assert_eq!(v.sublayers().len(), 2);
        assert_eq!(v.sublayers()[0].colors, vec![Color::WHITE]);
        assert_eq!(v.sublayers()[1].colors, vec![Color::BLACK]);
    }

    #[test]
    fn gradient_frame_snapshots_bounds_at_call_time() {
        let mut v = view(100.0, 50.0);
        v.add_vertical_gradient_layer(&[Color::WHITE]);
        v.set_bounds(Rect::new(0.0, 0.0, 200.0, 200.0));

        assert_eq!(v.sublayers()[0].frame, Rect::new(0.0, 0.0, 100.0, 50.0));
        v.add_vertical_gradient_layer(&[Color::BLACK]);
        assert_eq!(v.sublayers()[1].frame, Rect::new(0.0, 0.0, 200.0, 200.0));
    }
}
