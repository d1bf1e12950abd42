/// Upper bound on how many root vertices a `MultipleRoots` error lists.
pub const MAX_REPORTED_ROOTS: usize = 8;

/// Distance marker for a vertex not yet reached in the current search.
pub const UNVISITED: u32 = u32::MAX;
