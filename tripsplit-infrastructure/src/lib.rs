#![warn(clippy::uninlined_format_args)]

pub mod trip_source;

pub use trip_source::JsonTripSource;
