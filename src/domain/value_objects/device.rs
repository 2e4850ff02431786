//! Device handle value object

use std::fmt;

/// The device a program is run on.
///
/// Device discovery is the runner's business; the watch loop only carries the
/// selection through. `Device::Default` lets the runner pick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Device {
    #[default]
    Default,
    Named(String),
}

impl Device {
    /// Build from an optional CLI/config selection
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection.map(str::trim) {
            Some(name) if !name.is_empty() => Device::Named(name.to_string()),
            _ => Device::Default,
        }
    }

    /// The selected name, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            Device::Default => None,
            Device::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Default => write!(f, "default"),
            Device::Named(name) => write!(f, "{}", name),
        }
    }
}
