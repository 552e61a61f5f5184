//! Calendar arithmetic over world time.
//!
//! World time is a flat count of in-game seconds. This crate maps it
//! onto the structured dates of an [`almanack_domain::CalendarDefinition`]
//! and back, exactly, in both directions: variable month lengths, leap
//! rules, intercalary days, weekday cycles, weeks, canonical hours,
//! moons, and seasons all fall out of one shared year layout.
//!
//! The entry point is [`CalendarEngine`]. Construction normalizes the
//! calendar so that every query afterwards is total; malformed input
//! degrades to documented fallbacks with a single warning per cause
//! instead of failing.

mod arithmetic;
mod canonical;
mod convert;
mod diagnostics;
mod engine;
mod leap;
mod moons;
mod normalize;
mod seasons;
mod segments;
mod weekday;
mod weeks;
mod year_math;

pub use canonical::find_canonical_hour;
pub use engine::CalendarEngine;
