//! Layer stack result types.

// Layer counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

use crate::layer::{Layer, LayerStats};
use crate::params::SliceParams;

/// Result of building a sandwich: the layers plus run metadata.
#[derive(Debug, Clone)]
pub struct LayerStack {
    /// Individual layers from bottom to top.
    pub layers: Vec<Layer>,

    /// Total height of the stack in mm.
    pub total_height: f64,

    /// Number of slices before merging.
    pub slice_count: usize,

    /// Slice parameters used.
    pub params: SliceParams,
}

impl LayerStack {
    /// Create an empty stack.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::new() is not const
    pub fn empty(params: SliceParams) -> Self {
        Self {
            layers: Vec::new(),
            total_height: 0.0,
            slice_count: 0,
            params,
        }
    }

    /// Check if the stack has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Calculate layer statistics for all layers.
    #[must_use]
    pub fn stats(&self) -> LayerStats {
        if self.layers.is_empty() {
            return LayerStats::default();
        }

        let mut min_thickness = f64::INFINITY;
        let mut max_thickness: f64 = 0.0;
        let mut sum_thickness: f64 = 0.0;
        let mut empty_layers = 0;
        let mut max_placements = 0;

        for layer in &self.layers {
            let thickness = layer.thickness();
            min_thickness = min_thickness.min(thickness);
            max_thickness = max_thickness.max(thickness);
            sum_thickness += thickness;
            if layer.is_empty() {
                empty_layers += 1;
            }
            max_placements = max_placements.max(layer.placement_count());
        }

        LayerStats {
            min_thickness,
            max_thickness,
            avg_thickness: sum_thickness / self.layers.len() as f64,
            empty_layers,
            max_placements,
        }
    }

    /// Get a specific layer by index.
    #[must_use]
    pub fn get_layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Get the layer covering a specific Z height.
    ///
    /// The top of the stack belongs to the last layer.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn layer_at_height(&self, z: f64) -> Option<&Layer> {
        let idx = self.layers.partition_point(|l| l.z_max <= z);
        match self.layers.get(idx) {
            Some(layer) if layer.contains_height(z) => Some(layer),
            _ => self.layers.last().filter(|l| z == l.z_max),
        }
    }

    /// Iterate over layers that carry at least one placement.
    pub fn non_empty_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|l| !l.is_empty())
    }
}

impl std::fmt::Display for LayerStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LayerStack: {} layers from {} slices, {:.1}mm height",
            self.layers.len(),
            self.slice_count,
            self.total_height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sandwich_types::{CrossSection, Placement2D};

    fn stack() -> LayerStack {
        let ring: CrossSection = vec![Placement2D::new("ring.svg", 0.0, 0.0)].into();
        LayerStack {
            layers: vec![
                Layer {
                    index: 0,
                    z_min: 0.0,
                    z_max: 1.0,
                    slice_count: 2,
                    cross_section: ring.clone(),
                },
                Layer {
                    index: 1,
                    z_min: 1.0,
                    z_max: 1.5,
                    slice_count: 1,
                    cross_section: CrossSection::new(),
                },
                Layer {
                    index: 2,
                    z_min: 1.5,
                    z_max: 3.0,
                    slice_count: 3,
                    cross_section: ring,
                },
            ],
            total_height: 3.0,
            slice_count: 6,
            params: SliceParams::default(),
        }
    }

    #[test]
    fn test_empty_stack() {
        let stack = LayerStack::empty(SliceParams::default());
        assert!(stack.is_empty());
        assert_eq!(stack.layer_count(), 0);
        assert!(stack.layer_at_height(0.0).is_none());
        assert_eq!(stack.stats().empty_layers, 0);
    }

    #[test]
    fn test_stats() {
        let stats = stack().stats();
        assert_relative_eq!(stats.min_thickness, 0.5);
        assert_relative_eq!(stats.max_thickness, 1.5);
        assert_relative_eq!(stats.avg_thickness, 1.0);
        assert_eq!(stats.empty_layers, 1);
        assert_eq!(stats.max_placements, 1);
    }

    #[test]
    fn test_layer_at_height() {
        let stack = stack();
        assert_eq!(stack.layer_at_height(0.0).map(|l| l.index), Some(0));
        assert_eq!(stack.layer_at_height(1.0).map(|l| l.index), Some(1));
        assert_eq!(stack.layer_at_height(2.9).map(|l| l.index), Some(2));
        assert_eq!(stack.layer_at_height(3.0).map(|l| l.index), Some(2));
        assert!(stack.layer_at_height(3.1).is_none());
        assert!(stack.layer_at_height(-0.1).is_none());
    }

    #[test]
    fn test_get_layer() {
        let stack = stack();
        assert_eq!(stack.get_layer(1).map(Layer::is_empty), Some(true));
        assert_eq!(stack.get_layer(2).map(|l| l.slice_count), Some(3));
        assert!(stack.get_layer(3).is_none());
    }

    #[test]
    fn test_non_empty_layers() {
        let stack = stack();
        let indices: Vec<usize> = stack.non_empty_layers().map(|l| l.index).collect();
        assert_eq!(indices, [0, 2]);
    }

    #[test]
    fn test_display() {
        let display = format!("{}", stack());
        assert!(display.contains("3 layers"));
        assert!(display.contains("6 slices"));
        assert!(display.contains("3.0mm"));
    }
}
