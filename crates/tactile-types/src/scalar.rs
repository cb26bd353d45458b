//! Length unit used for all page and mesh coordinates.

/// A length in millimetres.
///
/// STL has no unit field; slicers read the coordinates as millimetres,
/// so every page, dot, and vertex coordinate is expressed in this unit.
pub type Millimeters = f32;
