//! Drawer props and their defaults.

use slideout_animation::{SpringSpec, TweenSpec};

use crate::error::DrawerConfigError;

/// Releases with less travel than this never count as a swipe, whatever their
/// velocity.
pub const SWIPE_DISTANCE_MINIMUM: f32 = 15.0;

/// Travel (px) past which a release is decisive.
pub const SWIPE_DISTANCE_THRESHOLD_DEFAULT: f32 = 120.0;

/// Release speed (px/s) past which a release is decisive.
pub const SWIPE_VELOCITY_THRESHOLD_DEFAULT: f32 = 1000.0;

/// Width of the strip next to the panel that still grabs the drawer.
pub const SWIPE_EDGE_WIDTH_DEFAULT: f32 = 32.0;

/// Screen edge the drawer is attached to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerAlignment {
    /// Left edge; the panel opens by moving right.
    #[default]
    Leading,
    /// Right edge; the panel opens by moving left.
    Trailing,
}

impl DrawerAlignment {
    /// `+1` for leading, `-1` for trailing.
    pub fn sign(self) -> f32 {
        match self {
            DrawerAlignment::Leading => 1.0,
            DrawerAlignment::Trailing => -1.0,
        }
    }

    pub fn is_trailing(self) -> bool {
        self == DrawerAlignment::Trailing
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    /// Alignment a drawer gets when the owner does not pick one.
    pub fn default_alignment(self) -> DrawerAlignment {
        match self {
            LayoutDirection::Ltr => DrawerAlignment::Leading,
            LayoutDirection::Rtl => DrawerAlignment::Trailing,
        }
    }
}

/// Everything the owner controls. Copied into the drawer on every
/// [`Drawer::set_props`](crate::Drawer::set_props).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerProps {
    pub open: bool,
    pub alignment: DrawerAlignment,
    pub locked: bool,
    pub swipe_edge_width: f32,
    /// `None` uses [`SWIPE_DISTANCE_THRESHOLD_DEFAULT`].
    pub swipe_distance_threshold: Option<f32>,
    pub swipe_velocity_threshold: f32,
    pub layout_direction: LayoutDirection,
    /// Model for gesture releases.
    pub spring: SpringSpec,
    /// Model for programmatic toggles.
    pub tween: TweenSpec,
}

impl Default for DrawerProps {
    fn default() -> Self {
        Self::for_direction(LayoutDirection::Ltr)
    }
}

impl DrawerProps {
    /// Defaults for the given layout direction. Right-to-left layouts attach
    /// the drawer to the trailing edge.
    pub fn for_direction(layout_direction: LayoutDirection) -> Self {
        Self {
            open: false,
            alignment: layout_direction.default_alignment(),
            locked: false,
            swipe_edge_width: SWIPE_EDGE_WIDTH_DEFAULT,
            swipe_distance_threshold: None,
            swipe_velocity_threshold: SWIPE_VELOCITY_THRESHOLD_DEFAULT,
            layout_direction,
            spring: SpringSpec::drawer(),
            tween: TweenSpec::default(),
        }
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn with_alignment(mut self, alignment: DrawerAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn with_swipe_edge_width(mut self, width: f32) -> Self {
        self.swipe_edge_width = width;
        self
    }

    pub fn with_swipe_distance_threshold(mut self, threshold: f32) -> Self {
        self.swipe_distance_threshold = Some(threshold);
        self
    }

    pub fn with_swipe_velocity_threshold(mut self, threshold: f32) -> Self {
        self.swipe_velocity_threshold = threshold;
        self
    }

    pub fn with_layout_direction(mut self, layout_direction: LayoutDirection) -> Self {
        self.layout_direction = layout_direction;
        self
    }

    pub fn with_spring(mut self, spring: SpringSpec) -> Self {
        self.spring = spring;
        self
    }

    pub fn with_tween(mut self, tween: TweenSpec) -> Self {
        self.tween = tween;
        self
    }

    pub fn distance_threshold(&self) -> f32 {
        self.swipe_distance_threshold
            .unwrap_or(SWIPE_DISTANCE_THRESHOLD_DEFAULT)
    }

    /// Rejects values the engine cannot animate with.
    pub fn validate(&self) -> Result<(), DrawerConfigError> {
        if !is_non_negative(self.swipe_edge_width) {
            return Err(DrawerConfigError::InvalidEdgeWidth(self.swipe_edge_width));
        }
        if let Some(threshold) = self.swipe_distance_threshold {
            if !is_non_negative(threshold) {
                return Err(DrawerConfigError::InvalidDistanceThreshold(threshold));
            }
        }
        if !is_non_negative(self.swipe_velocity_threshold) {
            return Err(DrawerConfigError::InvalidVelocityThreshold(
                self.swipe_velocity_threshold,
            ));
        }

        let spring = &self.spring;
        let spring_fields = [
            ("damping", spring.damping, is_non_negative(spring.damping)),
            ("mass", spring.mass, spring.mass.is_finite() && spring.mass > 0.0),
            ("stiffness", spring.stiffness, is_non_negative(spring.stiffness)),
            (
                "rest_speed_threshold",
                spring.rest_speed_threshold,
                is_non_negative(spring.rest_speed_threshold),
            ),
            (
                "rest_displacement_threshold",
                spring.rest_displacement_threshold,
                is_non_negative(spring.rest_displacement_threshold),
            ),
        ];
        for (field, value, valid) in spring_fields {
            if !valid {
                return Err(DrawerConfigError::InvalidSpring { field, value });
            }
        }
        Ok(())
    }
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
