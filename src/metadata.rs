#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMetadata {
    /// Cells moved to the closed set, start included.
    pub num_nodes_visited: usize,
    /// Movement cost of the goal along the returned route.
    pub cost: u32,
    /// Number of steps from start to goal.
    pub length: usize,
}
