//! Shapes supported by riposte.

pub use self::hexahedron::Hexahedron;
pub use self::plane::Plane;
pub use self::segment::{Segment, SegmentPointLocation};
pub use self::triangle::Triangle;

pub(crate) use self::quadrilateral::Quadrilateral;

mod hexahedron;
mod plane;
mod quadrilateral;
mod segment;
mod triangle;
