//! This module defines the REST API's routes and their handlers.

pub mod category;
pub mod endpoints;
pub mod expense;
pub mod report;

use std::ops::RangeInclusive;

use time::Date;

/// Build an inclusive date range from optional bounds.
///
/// Returns `None` when neither bound is given. A missing bound is widened to
/// the earliest or latest representable date.
pub(crate) fn date_range_from_bounds(
    from: Option<Date>,
    to: Option<Date>,
) -> Option<RangeInclusive<Date>> {
    if from.is_none() && to.is_none() {
        return None;
    }

    Some(from.unwrap_or(Date::MIN)..=to.unwrap_or(Date::MAX))
}
