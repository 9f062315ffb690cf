pub mod charts;
pub mod format;
pub mod metrics;
pub mod panels;
pub mod table;
