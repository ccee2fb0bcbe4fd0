use chrono::{Duration, NaiveTime};

/// Start/completion timestamps extracted for one operation in one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationTiming {
    pub begin: NaiveTime,
    pub end: NaiveTime,
}

impl OperationTiming {
    /// Elapsed whole seconds between the start and completion markers.
    ///
    /// The timestamps carry no date, so an end earlier than the begin means
    /// the run crossed midnight and the delta wraps by one day.
    pub fn duration_seconds(&self) -> i64 {
        let mut elapsed = self.end.signed_duration_since(self.begin);
        if elapsed < Duration::zero() {
            elapsed = elapsed + Duration::days(1);
        }
        elapsed.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn duration_is_end_minus_begin() {
        let timing = OperationTiming {
            begin: hms(13, 58, 12),
            end: hms(14, 12, 3),
        };
        assert_eq!(timing.duration_seconds(), 13 * 60 + 51);
    }

    #[test]
    fn duration_of_an_instant_pair_is_zero() {
        let timing = OperationTiming {
            begin: hms(8, 0, 0),
            end: hms(8, 0, 0),
        };
        assert_eq!(timing.duration_seconds(), 0);
    }

    #[test]
    fn midnight_crossing_wraps_by_one_day() {
        let timing = OperationTiming {
            begin: hms(23, 59, 30),
            end: hms(0, 0, 30),
        };
        assert_eq!(timing.duration_seconds(), 60);
    }
}
