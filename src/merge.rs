use tracing::debug;

use crate::model::ride::RideStatus;
use crate::model::schedule::{ScheduleTable, TimeBlock};
use crate::wait_times::OPERATING_STATUS;

/// Inject today's opening hours from the joined schedule table.
///
/// `today` is the `YYYY-MM-DD` key for the park's current local date. Rides with
/// no table entry, no entry for today, or no "Operating" block are left untouched.
pub fn merge(mut rides: Vec<RideStatus>, table: &ScheduleTable, today: &str) -> Vec<RideStatus> {
    let mut enriched = 0usize;
    for ride in rides.iter_mut() {
        let block = table
            .get(&ride.id)
            .and_then(|entity| entity.times.get(today))
            .and_then(|blocks| operating_block(blocks));
        if let Some((opening, closing)) = block.and_then(TimeBlock::hours) {
            ride.opening_time = Some(opening.to_string());
            ride.closing_time = Some(closing.to_string());
            enriched += 1;
        }
    }
    debug!(today, enriched, total = rides.len(), "Merged ride opening times");
    rides
}

/// First "Operating" block of the day that has both times; special events,
/// closures, and blocks with missing hours are skipped.
pub fn operating_block(blocks: &[TimeBlock]) -> Option<&TimeBlock> {
    blocks
        .iter()
        .find(|b| b.type_field.as_deref() == Some(OPERATING_STATUS) && b.hours().is_some())
}
