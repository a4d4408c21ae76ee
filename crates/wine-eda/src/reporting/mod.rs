//! Console reporting for the computed summaries.

mod console;

pub use console::{
    print_class_balance, print_completion, print_correlation_block, print_feature_summaries,
    print_overview,
};
