use serde::{Deserialize, Serialize};

/// A color resource, exposed by the service under `/colors` (also aliased
/// as `/unknown`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Identity of the color.
    pub id: u32,
    /// Color name, such as `"cerulean"`.
    pub name: String,
    /// Year the color was featured.
    pub year: u16,
    /// Hex code, such as `"#98B2D1"`.
    pub color: String,
    /// Pantone reference, such as `"15-4020"`.
    pub pantone_value: String,
}
