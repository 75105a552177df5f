use crate::cost::CostModel;

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub costs: CostModel,
    /// Number of cells the solver may expand before giving up with
    /// `Error::ExpansionLimitReached`.
    pub max_expansions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            costs: CostModel::default(),
            max_expansions: ::std::usize::MAX,
        }
    }
}
