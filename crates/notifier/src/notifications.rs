use median::SlidingMedianTracker;

use crate::error::NotifierError;

/// Counts the days whose spending is at least the sum of the two central values
/// of the previous `window` days. Days before the window has filled never notify.
pub fn activity_notifications(expenditure: &[i64], window: usize) -> Result<usize, NotifierError> {
    let mut tracker = SlidingMedianTracker::new(window)?;
    let mut notifications = 0;

    for &spending in expenditure {
        if tracker.num_samples() == window {
            let (first, second) = tracker.medians()?;
            let threshold = i128::from(*first) + i128::from(*second);
            if i128::from(spending) >= threshold {
                notifications += 1;
                tracing::trace!(spending, %threshold, "Notification triggered");
            }
        }
        tracker.add(spending)?;
    }

    Ok(notifications)
}

#[cfg(test)]
mod tests {
    use super::activity_notifications;
    use crate::error::NotifierError;
    use median::TrackerError;

    #[test]
    fn test_reference_case() {
        let expenditure = [2, 3, 4, 2, 3, 6, 8, 4, 5];
        assert_eq!(activity_notifications(&expenditure, 5).unwrap(), 2);
    }

    #[test]
    fn test_no_notifications() {
        let expenditure = [1, 2, 3, 4, 4];
        assert_eq!(activity_notifications(&expenditure, 4).unwrap(), 0);
    }

    #[test]
    fn test_window_of_one() {
        // 2 >= 1 + 1 notifies, 3 >= 2 + 2 does not
        assert_eq!(activity_notifications(&[1, 2, 3], 1).unwrap(), 1);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // Medians of [10, 20] are 10 and 20, so 30 is exactly on the threshold
        assert_eq!(activity_notifications(&[10, 20, 30], 2).unwrap(), 1);
        assert_eq!(activity_notifications(&[10, 20, 29], 2).unwrap(), 0);
    }

    #[test]
    fn test_threshold_uses_sum_not_double_median() {
        // Window [1, 2, 3, 9]: central values 2 and 3 sum to 5
        assert_eq!(activity_notifications(&[1, 2, 3, 9, 5], 4).unwrap(), 1);
    }

    #[test]
    fn test_window_longer_than_input() {
        assert_eq!(activity_notifications(&[100, 200], 5).unwrap(), 0);
        assert_eq!(activity_notifications(&[], 3).unwrap(), 0);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let expenditure = [i64::MAX, i64::MAX, i64::MAX];
        assert_eq!(activity_notifications(&expenditure, 2).unwrap(), 0);
    }

    #[test]
    fn test_zero_window() {
        let result = activity_notifications(&[1, 2], 0);
        assert!(matches!(
            result,
            Err(NotifierError::Tracker(TrackerError::InvalidWindow))
        ));
    }
}
