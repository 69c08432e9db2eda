//! Domain-level command and query types.
//!
//! These are used by the services inside the domain layer. The web layer maps
//! its form payloads onto them.

pub mod goal {
    /// Input for changing the daily goal.
    #[derive(Debug, Clone)]
    pub struct SetGoalCommand {
        pub goal_ml: u32,
    }

    /// Result of changing the daily goal.
    #[derive(Debug, Clone)]
    pub struct SetGoalResult {
        pub goal_ml: u32,
        pub success_message: String,
    }
}

pub mod entries {
    use shared::Entry;

    /// Input for logging consumption.
    #[derive(Debug, Clone)]
    pub struct AddEntryCommand {
        pub amount_ml: f64,
    }

    /// Result of logging consumption.
    #[derive(Debug, Clone)]
    pub struct AddEntryResult {
        pub entry: Entry,
        pub success_message: String,
    }
}

pub mod history {
    use shared::HistoryRange;

    /// Query for the history chart.
    #[derive(Debug, Clone, Default)]
    pub struct RangeAggregateQuery {
        pub range: HistoryRange,
    }
}
