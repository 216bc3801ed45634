#[derive(Debug, Clone, PartialEq)]
pub enum DrawerError {
    /// A configuration value is out of range.
    InvalidConfig { field: &'static str, value: f32 },
    /// The focused route has no descriptor.
    MissingDescriptor { route: String },
    /// A label callback produced no label.
    InvalidLabel { route: String },
}

impl std::fmt::Display for DrawerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawerError::InvalidConfig { field, value } => {
                write!(f, "invalid drawer config: {field} = {value}")
            }
            DrawerError::MissingDescriptor { route } => {
                write!(f, "no descriptor for route {route}")
            }
            DrawerError::InvalidLabel { route } => {
                write!(f, "drawer label for route {route} did not produce text")
            }
        }
    }
}

impl std::error::Error for DrawerError {}
