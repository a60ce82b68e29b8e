//! Best-first itinerary search.
//!
//! Explores partial itineraries in order of their cumulative metric (cost or
//! duration), extending each one with connecting legs that respect the
//! layover window, until enough complete itineraries have been found.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use chrono::Duration;
use tracing::{debug, trace, warn};

use crate::catalog::Catalog;
use crate::domain::{Itinerary, Leg, LocationCode, TimeOfDay, cost_step, duration_step, layover};

use super::config::{RevisitPolicy, SearchConfig};
use super::index::GraphIndex;
use super::rank::{Criterion, Metric};

/// Error from itinerary search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The query can't be answered against this catalog
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

/// Request for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Where the traveller starts.
    pub origin: LocationCode,

    /// Where the traveller wants to end up.
    pub destination: LocationCode,

    /// Which metric ranks the results.
    pub criterion: Criterion,

    /// When the traveller is ready to leave.
    pub query_time: TimeOfDay,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(
        origin: LocationCode,
        destination: LocationCode,
        criterion: Criterion,
        query_time: TimeOfDay,
    ) -> Self {
        Self {
            origin,
            destination,
            criterion,
            query_time,
        }
    }

    /// Validate the request against a catalog.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), SearchError> {
        if self.origin == self.destination {
            return Err(SearchError::InvalidQuery(format!(
                "origin and destination are both {}",
                self.origin
            )));
        }

        if catalog.is_empty() {
            return Err(SearchError::InvalidQuery("catalog has no legs".to_string()));
        }

        if !catalog.contains(&self.origin) {
            return Err(SearchError::InvalidQuery(format!(
                "unknown origin {}",
                self.origin
            )));
        }

        if !catalog.contains(&self.destination) {
            return Err(SearchError::InvalidQuery(format!(
                "unknown destination {}",
                self.destination
            )));
        }

        Ok(())
    }
}

/// Result of itinerary search.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Found itineraries, in the order they were accepted (best first).
    pub itineraries: Vec<Itinerary>,

    /// Number of partial itineraries taken off the frontier.
    pub paths_explored: usize,

    /// True if the search hit `max_expansions` before finishing.
    pub truncated: bool,
}

/// Plans itineraries against a catalog.
pub struct Planner<'a> {
    catalog: &'a Catalog,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(catalog: &'a Catalog, config: &'a SearchConfig) -> Self {
        Self { catalog, config }
    }

    /// Validate the request and search for itineraries.
    ///
    /// An empty result means no itinerary exists within the configured
    /// bounds; it is not an error.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate(self.catalog)?;

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            criterion = %request.criterion,
            query_time = %request.query_time,
            "Starting itinerary search"
        );

        let result = explore(
            self.catalog.legs(),
            &request.origin,
            &request.destination,
            request.criterion,
            request.query_time,
            self.config,
        );

        debug!(
            itineraries = result.itineraries.len(),
            paths_explored = result.paths_explored,
            truncated = result.truncated,
            "Itinerary search complete"
        );

        Ok(result)
    }
}

/// Find up to `config.max_routes` itineraries from `origin` to `destination`.
///
/// Performs no validation of the query: an origin equal to the destination or
/// a location absent from `legs` simply yields whatever the search finds,
/// usually nothing. Use [`Planner::search`] for a validated entry point.
pub fn find_itineraries(
    legs: &[Leg],
    origin: &LocationCode,
    destination: &LocationCode,
    criterion: Criterion,
    query_time: TimeOfDay,
    config: &SearchConfig,
) -> Vec<Itinerary> {
    explore(legs, origin, destination, criterion, query_time, config).itineraries
}

/// A partial itinerary, stored in the arena by reference to its parent.
#[derive(Debug)]
struct PathNode {
    /// Catalog position of the last leg.
    leg: usize,
    parent: Option<usize>,
    depth: usize,
    cost: f64,
    duration: Duration,
}

/// A frontier handle, ordered so that `BinaryHeap` pops the smallest metric.
#[derive(Debug)]
struct FrontierEntry {
    metric: Metric,
    route_key: String,
    seq: usize,
    node: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .metric
            .cmp(&self.metric)
            .then_with(|| other.route_key.cmp(&self.route_key))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Search state local to one call: the node arena and the frontier heap.
struct Frontier<'a> {
    index: &'a GraphIndex<'a>,
    criterion: Criterion,
    query_time: TimeOfDay,
    nodes: Vec<PathNode>,
    heap: BinaryHeap<FrontierEntry>,
    next_seq: usize,
}

impl<'a> Frontier<'a> {
    fn new(index: &'a GraphIndex<'a>, criterion: Criterion, query_time: TimeOfDay) -> Self {
        Self {
            index,
            criterion,
            query_time,
            nodes: Vec::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Push `leg` as an extension of `parent` (or as a first leg).
    fn push(&mut self, parent: Option<usize>, parent_key: &str, leg: usize) {
        let next = self.index.leg(leg);
        let (depth, cost, duration, previous) = match parent {
            Some(p) => {
                let node = &self.nodes[p];
                (
                    node.depth + 1,
                    node.cost,
                    node.duration,
                    Some(self.index.leg(node.leg)),
                )
            }
            None => (1, 0.0, Duration::zero(), None),
        };

        let cost = cost_step(cost, next);
        let duration = duration_step(duration, previous, next, self.query_time);

        let node = self.nodes.len();
        self.nodes.push(PathNode {
            leg,
            parent,
            depth,
            cost,
            duration,
        });

        let route_key = format!("{}-{}", parent_key, next.destination_code());
        self.heap.push(FrontierEntry {
            metric: Metric::select(self.criterion, cost, duration),
            route_key,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Catalog positions of the legs on the path ending at `node`, first leg first.
    fn path(&self, node: usize) -> Vec<usize> {
        let mut legs = Vec::with_capacity(self.nodes[node].depth);
        let mut current = Some(node);
        while let Some(idx) = current {
            legs.push(self.nodes[idx].leg);
            current = self.nodes[idx].parent;
        }
        legs.reverse();
        legs
    }

    /// True if the path ending at `node` already arrives at `code`.
    fn visits(&self, node: usize, code: &LocationCode) -> bool {
        let mut current = Some(node);
        while let Some(idx) = current {
            if self.index.leg(self.nodes[idx].leg).destination_code() == code {
                return true;
            }
            current = self.nodes[idx].parent;
        }
        false
    }
}

/// Run the best-first search.
fn explore(
    legs: &[Leg],
    origin: &LocationCode,
    destination: &LocationCode,
    criterion: Criterion,
    query_time: TimeOfDay,
    config: &SearchConfig,
) -> SearchResult {
    let index = GraphIndex::build(legs);
    let mut frontier = Frontier::new(&index, criterion, query_time);
    let mut result = SearchResult::default();

    for &leg in index.departures_from(origin) {
        frontier.push(None, origin.as_str(), leg);
    }

    while result.itineraries.len() < config.max_routes {
        if result.paths_explored >= config.max_expansions {
            // Only a non-empty frontier means work was cut short
            if !frontier.is_empty() {
                warn!(
                    max_expansions = config.max_expansions,
                    found = result.itineraries.len(),
                    "Search stopped at expansion limit"
                );
                result.truncated = true;
            }
            break;
        }

        let Some(entry) = frontier.pop() else {
            break;
        };
        result.paths_explored += 1;

        let node = &frontier.nodes[entry.node];
        let last = index.leg(node.leg);
        let depth = node.depth;

        if last.destination_code() == destination {
            trace!(route = %entry.route_key, metric = ?entry.metric, "Accepted itinerary");
            let path: Vec<Leg> = frontier
                .path(entry.node)
                .into_iter()
                .map(|idx| index.leg(idx).clone())
                .collect();
            match Itinerary::new(path) {
                Ok(itinerary) => result.itineraries.push(itinerary),
                Err(e) => warn!(route = %entry.route_key, error = %e, "Dropped malformed path"),
            }
            continue;
        }

        if depth >= config.max_legs() {
            continue;
        }

        for &candidate in index.departures_from(last.destination_code()) {
            let next = index.leg(candidate);

            if !config.layover_allowed(layover(last, next)) {
                continue;
            }

            let revisits = match config.revisit {
                RevisitPolicy::OriginOnly => next.destination_code() == origin,
                RevisitPolicy::NoRepeat => {
                    next.destination_code() == origin
                        || frontier.visits(entry.node, next.destination_code())
                }
            };
            if revisits {
                continue;
            }

            frontier.push(Some(entry.node), &entry.route_key, candidate);
        }
    }

    result
}
