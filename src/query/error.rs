/// Error indicating that a geometric query was given a degenerate shape.
///
/// Queries that need the supporting plane or the barycentric coordinates of a
/// polygon return this error when the polygon's vertices are (almost)
/// collinear or coincident, since no unique plane exists through them. The
/// degeneracy is detected with the crate-wide tolerance,
/// [`crate::utils::TOLERANCE`].
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("the query was given a degenerate shape (coincident or collinear vertices)")]
pub struct DegenerateShape;
