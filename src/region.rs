// Copyright 2025 Lars Brubaker
// License: MIT
//
// Region bookkeeping for the relative-position sweep.
//
// A region is the stretch of the sweep column lying inside one polygon, bounded
// below and above by two of that polygon's segments. Regions are kept in a
// Vec-backed arena that lives for a single sweep; ids come from a plain
// counter and are never reused within that sweep.

use std::collections::HashMap;

/// Identifier of a region within one sweep.
pub type RegionId = u32;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegionStatus {
    /// Opened at the current stop.
    Starting,
    /// Present at the previous stop with the same bounding segments.
    Ongoing,
    /// Closed at the current stop.
    Ending,
}

#[derive(Clone, Debug)]
pub struct Region {
    pub id: RegionId,
    pub poly: usize,
    /// Segment ids bounding the region from below and above.
    pub lower: usize,
    pub upper: usize,
    /// Extent along the sweep line, evaluated at the slab midpoint.
    pub start: f64,
    pub end: f64,
    pub status: RegionStatus,
}

/// Per-sweep arena of regions.
pub struct RegionArena {
    items: Vec<Option<Region>>,
    by_bounds: HashMap<(usize, usize), RegionId>,
    next_id: RegionId,
}

impl RegionArena {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            by_bounds: HashMap::new(),
            next_id: 0,
        }
    }

    /// Replace the open regions with those of a new slab. Regions bounded by
    /// the same segment pair as before carry over as `Ongoing`; the others are
    /// allocated as `Starting`. Previously open regions that are not carried
    /// over are marked `Ending` and returned by id. They stay readable until
    /// the next update of the same polygon frees them.
    pub fn update(&mut self, poly: usize, spans: &[(usize, usize, f64, f64)]) -> Vec<RegionId> {
        let retired: Vec<RegionId> = self
            .items
            .iter()
            .flatten()
            .filter(|r| r.poly == poly && r.status == RegionStatus::Ending)
            .map(|r| r.id)
            .collect();
        for id in retired {
            self.free(id);
        }

        let mut seen: Vec<RegionId> = Vec::with_capacity(spans.len());
        for &(lower, upper, start, end) in spans {
            let carried = self
                .by_bounds
                .get(&(lower, upper))
                .copied()
                .filter(|&id| self.get(id).map_or(false, |r| r.poly == poly));
            let id = match carried {
                Some(id) => {
                    if let Some(region) = self.get_mut(id) {
                        region.start = start;
                        region.end = end;
                        region.status = RegionStatus::Ongoing;
                    }
                    id
                }
                None => self.alloc(Region {
                    id: 0,
                    poly,
                    lower,
                    upper,
                    start,
                    end,
                    status: RegionStatus::Starting,
                }),
            };
            seen.push(id);
        }

        let mut ended = Vec::new();
        for region in self.items.iter_mut().flatten() {
            if region.poly == poly && !seen.contains(&region.id) {
                region.status = RegionStatus::Ending;
                ended.push(region.id);
            }
        }
        ended
    }

    fn alloc(&mut self, mut region: Region) -> RegionId {
        let id = self.next_id;
        self.next_id += 1;
        region.id = id;
        self.by_bounds.insert((region.lower, region.upper), id);
        self.items.push(Some(region));
        id
    }

    /// Drop a region from the arena. Its id stays retired.
    fn free(&mut self, id: RegionId) {
        if let Some(slot) = self.items.get_mut(id as usize) {
            if let Some(region) = slot.take() {
                self.by_bounds.remove(&(region.lower, region.upper));
            }
        }
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.items.get(id as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.items.get_mut(id as usize)?.as_mut()
    }

    /// Open regions of `poly`, in the order they were last updated.
    pub fn open(&self, poly: usize) -> impl Iterator<Item = &Region> {
        self.items
            .iter()
            .flatten()
            .filter(move |r| r.poly == poly && r.status != RegionStatus::Ending)
    }

    /// Number of ids handed out so far.
    pub fn allocated(&self) -> u32 {
        self.next_id
    }
}

impl Default for RegionArena {
    fn default() -> Self {
        Self::new()
    }
}
