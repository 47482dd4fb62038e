use crate::models::{EntryType, Zone};

/// Applies one logged event to a zone and recomputes its available space.
pub fn apply_event(zone: &mut Zone, entry_type: EntryType, car_count: u32) {
    match entry_type {
        EntryType::In => zone.cars_in = zone.cars_in.saturating_add(car_count),
        EntryType::Out => zone.cars_out = zone.cars_out.saturating_add(car_count),
    }
    zone.available_space = available_space(zone.capacity, zone.cars_in, zone.cars_out);
}

/// `capacity - (cars_in - cars_out)`, clamped to `capacity` from above.
///
/// A negative result also yields `capacity`, not zero: an over-subscribed
/// zone reports itself as empty. The sheet relies on this value, so it is
/// kept as-is.
pub fn available_space(capacity: u32, cars_in: u32, cars_out: u32) -> i64 {
    let capacity = i64::from(capacity);
    let raw = capacity - (i64::from(cars_in) - i64::from(cars_out));
    if raw > capacity || raw < 0 {
        capacity
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(capacity: u32, cars_in: u32, cars_out: u32) -> Zone {
        Zone {
            cars_in,
            cars_out,
            available_space: available_space(capacity, cars_in, cars_out),
            ..Zone::new("Red", capacity)
        }
    }

    #[test]
    fn in_event_only_touches_cars_in() {
        let mut z = zone(50, 5, 2);
        apply_event(&mut z, EntryType::In, 4);
        assert_eq!(z.cars_in, 9);
        assert_eq!(z.cars_out, 2);
        assert_eq!(z.available_space, 43);
    }

    #[test]
    fn out_event_only_touches_cars_out() {
        let mut z = zone(50, 5, 0);
        apply_event(&mut z, EntryType::Out, 3);
        assert_eq!(z.cars_in, 5);
        assert_eq!(z.cars_out, 3);
        assert_eq!(z.available_space, 48);
    }

    #[test]
    fn overfull_zone_resets_to_capacity() {
        let mut z = zone(100, 10, 0);
        apply_event(&mut z, EntryType::In, 95);
        assert_eq!(z.cars_in, 105);
        assert_eq!(z.available_space, 100);
    }

    #[test]
    fn more_out_than_in_clamps_to_capacity() {
        let mut z = zone(20, 1, 0);
        apply_event(&mut z, EntryType::Out, 6);
        assert_eq!(z.cars_out, 6);
        assert_eq!(z.available_space, 20);
    }

    #[test]
    fn available_space_stays_within_bounds() {
        for capacity in [0u32, 1, 7, 100] {
            for cars_in in 0..120u32 {
                for cars_out in (0..120u32).step_by(7) {
                    let space = available_space(capacity, cars_in, cars_out);
                    assert!((0..=i64::from(capacity)).contains(&space));
                }
            }
        }
    }

    #[test]
    fn counters_saturate() {
        let mut z = zone(10, u32::MAX - 1, 0);
        apply_event(&mut z, EntryType::In, 5);
        assert_eq!(z.cars_in, u32::MAX);
        assert_eq!(z.available_space, 10);
    }
}
