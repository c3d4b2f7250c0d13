use beaconcore::Coordinate;

/// A pluggable producer of location fixes, standing in for the browser
/// geolocation, map-center, and query-parameter acquisition paths of the
/// legacy prototype pages.
pub trait LocationSource {
    fn next_fix(&mut self) -> Option<Coordinate>;
}

/// Yields a single literal fix, then runs dry.
pub struct FixedSource {
    fix: Option<Coordinate>,
}

impl FixedSource {
    pub fn new(fix: Coordinate) -> Self {
        Self { fix: Some(fix) }
    }
}

impl LocationSource for FixedSource {
    fn next_fix(&mut self) -> Option<Coordinate> {
        self.fix.take()
    }
}

/// Replays a pre-built track, e.g. from the walk generator.
pub struct TrackSource {
    fixes: std::vec::IntoIter<Coordinate>,
}

impl TrackSource {
    pub fn new(track: Vec<Coordinate>) -> Self {
        Self {
            fixes: track.into_iter(),
        }
    }
}

impl LocationSource for TrackSource {
    fn next_fix(&mut self) -> Option<Coordinate> {
        self.fixes.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_source_yields_exactly_once() {
        let fix = Coordinate::new(50.6874, 4.2606).unwrap();
        let mut source = FixedSource::new(fix);
        assert_eq!(source.next_fix(), Some(fix));
        assert_eq!(source.next_fix(), None);
    }

    #[test]
    fn track_source_preserves_order() {
        let a = Coordinate::new(50.0, 4.0).unwrap();
        let b = Coordinate::new(51.0, 4.1).unwrap();
        let mut source = TrackSource::new(vec![a, b]);
        assert_eq!(source.next_fix(), Some(a));
        assert_eq!(source.next_fix(), Some(b));
        assert_eq!(source.next_fix(), None);
    }
}
