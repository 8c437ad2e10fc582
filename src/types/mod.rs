pub mod air_quality;
pub mod columns;
pub mod compass;
pub mod granularity;
pub mod tables;
