use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::state::State;

/// One slot (major, minor or patch) of an extended version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionComponent {
    /// Numeric value. Expected to be non-negative, but not enforced
    pub value: i64,
    /// Maturity of this component
    #[serde(default)]
    pub state: State,
}

impl VersionComponent {
    /// Create a component with an explicit state
    pub const fn new(value: i64, state: State) -> Self {
        Self { value, state }
    }

    /// Create a stable component
    pub const fn stable(value: i64) -> Self {
        Self::new(value, State::Stable)
    }
}

impl fmt::Display for VersionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.value, self.state)
    }
}

/// Accepted input shapes for a single version slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentSpec {
    /// Plain integer, always stable
    Value(i64),
    /// Integer plus a free-form state descriptor
    Pair(i64, String),
    /// Already-built component, passed through unchanged
    Component(VersionComponent),
}

impl ComponentSpec {
    /// Normalize this input into a component
    pub fn normalize(self) -> VersionComponent {
        match self {
            ComponentSpec::Value(value) => VersionComponent::stable(value),
            ComponentSpec::Pair(value, descriptor) => {
                VersionComponent::new(value, State::from_descriptor(&descriptor))
            }
            ComponentSpec::Component(component) => component,
        }
    }
}

// i32 is included so bare integer literals resolve
macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ComponentSpec {
                fn from(value: $ty) -> Self {
                    ComponentSpec::Value(i64::from(value))
                }
            }

            impl From<($ty, &str)> for ComponentSpec {
                fn from((value, descriptor): ($ty, &str)) -> Self {
                    ComponentSpec::Pair(i64::from(value), descriptor.to_string())
                }
            }

            impl From<($ty, String)> for ComponentSpec {
                fn from((value, descriptor): ($ty, String)) -> Self {
                    ComponentSpec::Pair(i64::from(value), descriptor)
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, i8, i16, i32, i64);

impl From<VersionComponent> for ComponentSpec {
    fn from(component: VersionComponent) -> Self {
        ComponentSpec::Component(component)
    }
}
