use super::parse::parse_weight;
use clap::Args;
use grafo_core::graph::{MstOptions, UnweightedPolicy, Weight};

/// Options shared by the minimum spanning tree commands
#[derive(Args, Debug, Clone, Default)]
pub struct MstArgs {
    /// Fail on edges without a weight instead of assuming a default
    #[arg(long, conflicts_with = "default_weight")]
    pub reject_unweighted: bool,

    /// Weight assumed for edges without one
    #[arg(long, value_parser = parse_weight)]
    pub default_weight: Option<Weight>,
}

impl MstArgs {
    /// Apply these flags on top of the configured options
    pub fn apply(&self, base: MstOptions) -> MstOptions {
        let unweighted = if self.reject_unweighted {
            UnweightedPolicy::Reject
        } else if let Some(w) = self.default_weight {
            UnweightedPolicy::Default(w)
        } else {
            base.unweighted
        };
        MstOptions { unweighted }
    }
}
