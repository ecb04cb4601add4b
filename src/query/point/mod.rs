//! Point containment tests dedicated to specific shapes.

pub use self::point_hexahedron::point_in_hexahedron;
pub use self::point_triangle::point_in_triangle;

pub(crate) use self::point_quadrilateral::{point_in_convex_polygon, point_in_quadrilateral};

mod point_hexahedron;
mod point_quadrilateral;
mod point_triangle;
