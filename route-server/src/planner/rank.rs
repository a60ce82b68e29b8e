//! Itinerary ranking.
//!
//! The same ordering is used by the search frontier and by callers that want
//! to re-sort a finished result set by the other criterion.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, TimeOfDay};

/// Which cumulative metric ranks itineraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Sum of leg costs
    Cost,
    /// Wait, flight and layover time from the query time
    Duration,
}

/// Error returned when parsing an unknown criterion name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown criterion {0:?}: expected \"cost\" or \"duration\"")]
pub struct InvalidCriterion(String);

impl FromStr for Criterion {
    type Err = InvalidCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cost" => Ok(Criterion::Cost),
            "duration" => Ok(Criterion::Duration),
            _ => Err(InvalidCriterion(s.to_string())),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Cost => f.write_str("cost"),
            Criterion::Duration => f.write_str("duration"),
        }
    }
}

/// The value an itinerary is ranked by.
///
/// Costs compare with `f64::total_cmp`, so the ordering is total. Values of
/// different kinds are never compared within one search; costs sort first.
#[derive(Debug, Clone, Copy)]
pub enum Metric {
    Cost(f64),
    Duration(Duration),
}

impl Metric {
    /// Select the metric for `criterion` from both running totals.
    pub fn select(criterion: Criterion, cost: f64, duration: Duration) -> Self {
        match criterion {
            Criterion::Cost => Metric::Cost(cost),
            Criterion::Duration => Metric::Duration(duration),
        }
    }

    /// Compute the metric of a finished itinerary.
    pub fn of(itinerary: &Itinerary, criterion: Criterion, query_time: TimeOfDay) -> Self {
        match criterion {
            Criterion::Cost => Metric::Cost(itinerary.total_cost()),
            Criterion::Duration => Metric::Duration(itinerary.total_duration(query_time)),
        }
    }
}

impl Ord for Metric {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Metric::Cost(a), Metric::Cost(b)) => a.total_cmp(b),
            (Metric::Duration(a), Metric::Duration(b)) => a.cmp(b),
            (Metric::Cost(_), Metric::Duration(_)) => Ordering::Less,
            (Metric::Duration(_), Metric::Cost(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Metric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Metric {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Metric {}

/// Compare two itineraries by `criterion`, then by route key.
pub fn compare_itineraries(
    a: &Itinerary,
    b: &Itinerary,
    criterion: Criterion,
    query_time: TimeOfDay,
) -> Ordering {
    Metric::of(a, criterion, query_time)
        .cmp(&Metric::of(b, criterion, query_time))
        .then_with(|| a.route_key().cmp(&b.route_key()))
}

/// Rank itineraries best-first by `criterion`.
///
/// The sort is stable: itineraries with equal metric and route key keep
/// their input order.
pub fn rank_itineraries(
    mut itineraries: Vec<Itinerary>,
    criterion: Criterion,
    query_time: TimeOfDay,
) -> Vec<Itinerary> {
    itineraries.sort_by(|a, b| compare_itineraries(a, b, criterion, query_time));
    itineraries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::leg::test_support::*;

    fn itinerary(legs: Vec<crate::domain::Leg>) -> Itinerary {
        Itinerary::new(legs).unwrap()
    }

    #[test]
    fn parse_criterion() {
        assert_eq!("cost".parse::<Criterion>(), Ok(Criterion::Cost));
        assert_eq!(" Duration ".parse::<Criterion>(), Ok(Criterion::Duration));
        assert_eq!("COST".parse::<Criterion>(), Ok(Criterion::Cost));
        assert!("price".parse::<Criterion>().is_err());
    }

    #[test]
    fn criterion_display_and_serde() {
        assert_eq!(Criterion::Cost.to_string(), "cost");
        assert_eq!(Criterion::Duration.to_string(), "duration");
        assert_eq!(serde_json::to_string(&Criterion::Duration).unwrap(), "\"duration\"");
        let parsed: Criterion = serde_json::from_str("\"cost\"").unwrap();
        assert_eq!(parsed, Criterion::Cost);
    }

    #[test]
    fn invalid_criterion_message() {
        let err = "fastest".parse::<Criterion>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown criterion \"fastest\": expected \"cost\" or \"duration\""
        );
    }

    #[test]
    fn metric_ordering() {
        assert!(Metric::Cost(1.0) < Metric::Cost(2.0));
        assert_eq!(Metric::Cost(2.0), Metric::Cost(2.0));
        assert!(Metric::Duration(Duration::minutes(5)) < Metric::Duration(Duration::hours(1)));
        assert_eq!(
            Metric::select(Criterion::Cost, 3.0, Duration::hours(1)),
            Metric::Cost(3.0)
        );
        assert_eq!(
            Metric::select(Criterion::Duration, 3.0, Duration::hours(1)),
            Metric::Duration(Duration::hours(1))
        );
    }

    #[test]
    fn rank_by_cost() {
        let cheap = itinerary(vec![
            leg("A", "B", 100.0, "08:00", "10:00"),
            leg("B", "C", 50.0, "11:00", "12:00"),
        ]);
        let pricey = itinerary(vec![leg("A", "C", 200.0, "09:00", "11:00")]);

        let ranked = rank_itineraries(
            vec![pricey.clone(), cheap.clone()],
            Criterion::Cost,
            time("06:00"),
        );
        assert_eq!(ranked, vec![cheap, pricey]);
    }

    #[test]
    fn rank_by_duration() {
        let cheap = itinerary(vec![
            leg("A", "B", 100.0, "08:00", "10:00"),
            leg("B", "C", 50.0, "11:00", "12:00"),
        ]);
        let fast = itinerary(vec![leg("A", "C", 200.0, "09:00", "11:00")]);

        // cheap: 2h wait + 2h + 1h + 1h = 6h; fast: 3h wait + 2h = 5h
        let ranked = rank_itineraries(
            vec![cheap.clone(), fast.clone()],
            Criterion::Duration,
            time("06:00"),
        );
        assert_eq!(ranked, vec![fast, cheap]);
    }

    #[test]
    fn duration_rank_depends_on_query_time() {
        let early = itinerary(vec![leg("A", "C", 10.0, "08:00", "09:00")]);
        let late = itinerary(vec![leg("A", "C", 10.0, "12:00", "13:00")]);

        let ranked = rank_itineraries(
            vec![late.clone(), early.clone()],
            Criterion::Duration,
            time("07:00"),
        );
        assert_eq!(ranked, vec![early.clone(), late.clone()]);

        // After 08:00 the early flight means waiting until tomorrow
        let ranked = rank_itineraries(
            vec![early.clone(), late.clone()],
            Criterion::Duration,
            time("10:00"),
        );
        assert_eq!(ranked, vec![late, early]);
    }

    #[test]
    fn ties_break_by_route_key() {
        let via_c = itinerary(vec![
            leg("A", "C", 50.0, "08:00", "09:00"),
            leg("C", "D", 50.0, "10:00", "11:00"),
        ]);
        let via_b = itinerary(vec![
            leg("A", "B", 50.0, "08:00", "09:00"),
            leg("B", "D", 50.0, "10:00", "11:00"),
        ]);

        let ranked = rank_itineraries(
            vec![via_c.clone(), via_b.clone()],
            Criterion::Cost,
            time("07:00"),
        );
        assert_eq!(ranked, vec![via_b, via_c]);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let first = itinerary(vec![leg("A", "B", 50.0, "08:00", "09:00")]);
        let second = itinerary(vec![leg("A", "B", 50.0, "12:00", "13:00")]);

        let ranked = rank_itineraries(
            vec![first.clone(), second.clone()],
            Criterion::Cost,
            time("07:00"),
        );
        assert_eq!(ranked, vec![first.clone(), second.clone()]);

        let ranked = rank_itineraries(
            vec![second.clone(), first.clone()],
            Criterion::Cost,
            time("07:00"),
        );
        assert_eq!(ranked, vec![second, first]);
    }

    #[test]
    fn rank_empty() {
        assert!(rank_itineraries(vec![], Criterion::Cost, time("07:00")).is_empty());
    }
}
