//! Moore-neighbor boundary tracing over an [`OpacityGrid`]

use crate::core::config::Winding;
use crate::foundation::math::Point2;
use super::mask::OpacityGrid;

/// Integer pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticePoint {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl LatticePoint {
    /// Creates a new lattice point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    
    /// Same coordinate as a float point
    pub fn to_point(self) -> Point2 {
        Point2::new(self.x as f32, self.y as f32)
    }
    
    fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Ordered boundary points; a closed trace ends on its start point
pub type Contour = Vec<LatticePoint>;

/// One of the 8 Moore neighbors, indexed clockwise from east (y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// +x
    East,
    /// +x +y
    SouthEast,
    /// +y
    South,
    /// -x +y
    SouthWest,
    /// -x
    West,
    /// -x -y
    NorthWest,
    /// -y
    North,
    /// +x -y
    NorthEast,
}

impl Direction {
    /// All directions in clockwise order starting at east
    pub const CLOCKWISE: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];
    
    /// Pixel offset for one step in this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
        }
    }
    
    fn index(self) -> usize {
        self as usize
    }
    
    /// Rotate by `notches` eighth-turns; positive is clockwise
    pub fn rotated(self, notches: i32) -> Self {
        let index = (self.index() as i32 + notches).rem_euclid(8);
        Self::CLOCKWISE[index as usize]
    }
}

impl Winding {
    fn step(self) -> i32 {
        match self {
            Winding::Clockwise => 1,
            Winding::CounterClockwise => -1,
        }
    }
    
    /// Arrival direction assumed at the start pixel, one notch before east
    pub fn initial_arrival(self) -> Direction {
        Direction::East.rotated(-self.step())
    }
}

/// How a trace stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEnd {
    /// Returned to the start point
    Closed,
    /// Reached a pixel with no solid neighbor
    Open,
    /// Hit the step bound before closing
    Truncated,
}

/// Result of tracing one boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// Visited points in order
    pub points: Contour,
    /// Why tracing stopped
    pub end: TraceEnd,
}

/// First solid pixel in raster order with a transparent or missing 4-neighbor
pub fn find_start(grid: &OpacityGrid) -> Option<LatticePoint> {
    const NEIGHBORS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
    
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if !grid.get(x, y) {
                continue;
            }
            if NEIGHBORS.iter().any(|&(dx, dy)| !grid.get(x + dx, y + dy)) {
                return Some(LatticePoint::new(x, y));
            }
        }
    }
    None
}

/// Walk the outer boundary that passes through `start`
///
/// Each step scans the neighbors in `winding` order, beginning two notches
/// back from the direction the tracer arrived from, and moves to the first
/// solid one. Stops on returning to `start`, on a dead end, or once more
/// than `max_steps` moves have been made.
pub fn trace_contour(grid: &OpacityGrid, start: LatticePoint, winding: Winding, max_steps: usize) -> Trace {
    let step = winding.step();
    let mut current = start;
    let mut arrival = winding.initial_arrival();
    let mut points = Vec::new();
    let mut steps = 0usize;
    
    loop {
        points.push(current);
        
        let scan_from = arrival.rotated(-2 * step);
        let next = (0..8)
            .map(|i| scan_from.rotated(i * step))
            .map(|direction| (current.offset(direction), direction))
            .find(|(candidate, _)| grid.get(candidate.x, candidate.y));
        
        let Some((next, direction)) = next else {
            return Trace { points, end: TraceEnd::Open };
        };
        current = next;
        arrival = direction;
        steps += 1;
        
        if current == start && points.len() > 1 {
            points.push(start);
            return Trace { points, end: TraceEnd::Closed };
        }
        if steps > max_steps {
            log::warn!(
                "Boundary trace from ({}, {}) hit the {} step bound, keeping {} points",
                start.x, start.y, max_steps, points.len()
            );
            return Trace { points, end: TraceEnd::Truncated };
        }
    }
}
