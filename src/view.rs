//! A retained view tree with ordered children and sublayers.

use kurbo::Rect;

use crate::GradientLayer;

/// A node in a view hierarchy.
///
/// A view owns its children and its sublayer stack, both ordered by
/// insertion. Layout of a child is either derived from its autoresizing mask
/// (the default) or governed by explicit constraints once
/// [`set_autoresizing_constraints`] switches it to manual-layout mode.
///
/// Mutating the tree takes `&mut self`, so the usual exclusive-access rules
/// apply; there is no interior mutability and no synchronization.
///
/// [`set_autoresizing_constraints`]: View::set_autoresizing_constraints
#[derive(Debug)]
pub struct View {
    bounds: Rect,
    autoresizing_constraints: bool,
    children: Vec<View>,
    sublayers: Vec<GradientLayer>,
}

impl View {
    /// Create a view with the given bounds, no children, and no sublayers.
    pub fn new(bounds: Rect) -> View {
        View {
            bounds,
            autoresizing_constraints: true,
            children: Vec::new(),
            sublayers: Vec::new(),
        }
    }

    /// The view's current bounds rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Set the view's bounds rectangle.
    ///
    /// Sublayers added earlier keep the frame they were created with; nothing
    /// observes bounds changes.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Whether layout constraints are derived from the autoresizing mask.
    ///
    /// `false` means the view is in manual-layout mode and is positioned by
    /// explicit constraints.
    pub fn uses_autoresizing_constraints(&self) -> bool {
        self.autoresizing_constraints
    }

    /// Switch between autoresizing-derived and manual (explicit-constraint)
    /// layout.
    pub fn set_autoresizing_constraints(&mut self, autoresizing: bool) {
        self.autoresizing_constraints = autoresizing;
    }

    /// Append a child to the end of the child list.
    pub fn add_subview(&mut self, subview: View) {
        self.children.push(subview);
    }

    /// The view's children, in insertion order.
    pub fn subviews(&self) -> &[View] {
        &self.children
    }

    /// Append a layer to the end of the sublayer stack.
    ///
    /// Later layers draw above earlier ones.
    pub fn add_sublayer(&mut self, layer: GradientLayer) {
        self.sublayers.push(layer);
    }

    /// The view's sublayer stack, bottom to top.
    pub fn sublayers(&self) -> &[GradientLayer] {
        &self.sublayers
    }
}

impl Default for View {
    fn default() -> View {
        View::new(Rect::ZERO)
    }
}
