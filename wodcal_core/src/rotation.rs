//! Week-by-week rotation of the workout cycle.
//!
//! The rotation is a pure function of the title cycle, a starting offset and
//! a week index. It is recomputed at every week boundary; no rotation state
//! is ever persisted.

use crate::{Error, Result};

/// Rotate the workout cycle for a given week, stepping forward one title
/// per week.
pub fn generate_weekly_workouts(
    titles: &[String],
    start_offset: usize,
    week_index: u32,
) -> Result<Vec<String>> {
    rotate_cycle(titles, start_offset, week_index, 1)
}

/// Generalized rotation with an explicit step direction.
///
/// The output has the same length as `titles`: it reads the cycle starting
/// at `(start_offset + direction * week_index) mod len`, wrapping
/// circularly and preserving source order within the wrap.
///
/// Fails with [`Error::InvalidOffset`] when `start_offset` lies past the
/// end of the cycle, which includes the empty-cycle case.
pub fn rotate_cycle(
    titles: &[String],
    start_offset: usize,
    week_index: u32,
    direction: i64,
) -> Result<Vec<String>> {
    if titles.is_empty() || start_offset > titles.len() - 1 {
        return Err(Error::InvalidOffset {
            offset: start_offset,
            cycle_len: titles.len(),
        });
    }

    let len = titles.len();
    let pivot =
        (start_offset as i64 + direction * i64::from(week_index)).rem_euclid(len as i64) as usize;

    Ok((0..len).map(|i| titles[(pivot + i) % len].clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> Vec<String> {
        vec!["a".into(), "b".into(), "c".into(), "d".into()]
    }

    #[test]
    fn test_week_zero_rotates_left_by_offset() {
        let titles = cycle();
        assert_eq!(
            generate_weekly_workouts(&titles, 0, 0).unwrap(),
            vec!["a", "b", "c", "d"]
        );
        assert_eq!(
            generate_weekly_workouts(&titles, 2, 0).unwrap(),
            vec!["c", "d", "a", "b"]
        );
    }

    #[test]
    fn test_each_week_advances_one_step() {
        let titles = cycle();
        assert_eq!(
            generate_weekly_workouts(&titles, 0, 1).unwrap(),
            vec!["b", "c", "d", "a"]
        );
        assert_eq!(
            generate_weekly_workouts(&titles, 1, 2).unwrap(),
            vec!["d", "a", "b", "c"]
        );
    }

    #[test]
    fn test_offset_past_cycle_end_fails() {
        let titles = cycle();
        let result = generate_weekly_workouts(&titles, 4, 0);
        assert!(matches!(
            result,
            Err(Error::InvalidOffset {
                offset: 4,
                cycle_len: 4
            })
        ));
    }

    #[test]
    fn test_empty_cycle_fails() {
        let result = generate_weekly_workouts(&[], 0, 0);
        assert!(matches!(result, Err(Error::InvalidOffset { .. })));
    }

    #[test]
    fn test_periodic_in_week_index() {
        let titles = cycle();
        for offset in 0..titles.len() {
            for week in 0..8u32 {
                assert_eq!(
                    generate_weekly_workouts(&titles, offset, week).unwrap(),
                    generate_weekly_workouts(&titles, offset, week + titles.len() as u32).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_week_index_far_larger_than_cycle() {
        let titles = cycle();
        assert_eq!(
            generate_weekly_workouts(&titles, 0, 1001).unwrap(),
            generate_weekly_workouts(&titles, 0, 1).unwrap()
        );
    }

    #[test]
    fn test_rotation_matches_modular_indexing() {
        let titles = cycle();
        for offset in 0..titles.len() {
            let rotated = generate_weekly_workouts(&titles, offset, 0).unwrap();
            for (i, title) in rotated.iter().enumerate() {
                assert_eq!(*title, titles[(offset + i) % titles.len()]);
            }
        }
    }

    #[test]
    fn test_negative_direction_steps_backwards() {
        let titles = cycle();
        assert_eq!(
            rotate_cycle(&titles, 0, 1, -1).unwrap(),
            vec!["d", "a", "b", "c"]
        );
        assert_eq!(
            rotate_cycle(&titles, 0, 5, -1).unwrap(),
            rotate_cycle(&titles, 0, 1, -1).unwrap()
        );
    }

    #[test]
    fn test_rotation_is_deterministic() {
        let titles = cycle();
        let first = generate_weekly_workouts(&titles, 1, 3).unwrap();
        let second = generate_weekly_workouts(&titles, 1, 3).unwrap();
        assert_eq!(first, second);
    }
}
