//! Testing utilities and harness for slideout drawers

pub mod assertions;
pub mod testing;

pub use assertions::{assert_approx_eq, assert_rect_approx_eq};
pub use testing::*;

pub mod prelude {
    pub use crate::assertions::{assert_approx_eq, assert_rect_approx_eq};
    pub use crate::testing::*;
}
