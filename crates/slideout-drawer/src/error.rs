#[derive(Debug, Clone, PartialEq)]
pub enum DrawerConfigError {
    InvalidEdgeWidth(f32),
    InvalidDistanceThreshold(f32),
    InvalidVelocityThreshold(f32),
    InvalidSpring { field: &'static str, value: f32 },
}

impl std::fmt::Display for DrawerConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawerConfigError::InvalidEdgeWidth(value) => {
                write!(f, "swipe edge width must be finite and >= 0, got {value}")
            }
            DrawerConfigError::InvalidDistanceThreshold(value) => {
                write!(f, "swipe distance threshold must be finite and >= 0, got {value}")
            }
            DrawerConfigError::InvalidVelocityThreshold(value) => {
                write!(f, "swipe velocity threshold must be finite and >= 0, got {value}")
            }
            DrawerConfigError::InvalidSpring { field, value } => {
                write!(f, "invalid spring {field}: {value}")
            }
        }
    }
}

impl std::error::Error for DrawerConfigError {}
