//! Connector geometry for the choice grid.
//!
//! After layout settles the UI measures each card's icon and hands the
//! anchors to [`compute_connectors`], which returns the dashed segments to
//! draw between consecutive cards along the snake path. Cards in the same row
//! get a straight segment; a row change gets a vertical drop from the first
//! card's anchor to the next card's row. Nothing here touches a rendering
//! surface, so the whole redraw is a pure function of the measured anchors.

use crate::catalog::GridPos;

/// Segments shorter than this are not drawn (px)
pub const MIN_LINE_LENGTH: f64 = 2.0;

/// Fade-in stagger between consecutive segments (ms)
pub const LINE_STAGGER_MS: u64 = 80;

/// Settle delay between mount (or resize) and measuring anchors (ms)
pub const SETTLE_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Centre of `item` relative to the top-left corner of `container`.
pub fn anchor_center(item: Rect, container: Rect) -> Point {
    Point::new(
        item.x - container.x + item.width / 2.0,
        item.y - container.y + item.height / 2.0,
    )
}

/// A measured card anchor together with its grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSample {
    pub center: Point,
    pub grid: GridPos,
}

/// One segment to render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorLine {
    /// Index of the pair along the path; drives the stagger delay
    pub sequence: usize,
    pub from: Point,
    pub to: Point,
}

impl ConnectorLine {
    pub fn length(&self) -> f64 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }

    /// Rotation around `from`, in degrees clockwise from +x (screen space)
    pub fn angle_degrees(&self) -> f64 {
        (self.to.y - self.from.y)
            .atan2(self.to.x - self.from.x)
            .to_degrees()
    }

    pub fn delay_ms(&self) -> u64 {
        self.sequence as u64 * LINE_STAGGER_MS
    }

    /// Inline style positioning a rotated dashed bar from `from` to `to`.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}px; top: {:.2}px; width: {:.2}px; transform: rotate({:.4}deg) translateY(-50%); animation-delay: {}ms, {}ms;",
            self.from.x,
            self.from.y,
            self.length(),
            self.angle_degrees(),
            self.delay_ms(),
            self.delay_ms(),
        )
    }
}

/// Segments between every consecutive pair of measured anchors.
///
/// `anchors[i]` is `None` when card `i` has not been measured yet; any pair
/// touching such a card is skipped. Sequence numbers follow the pair index, so
/// a skipped pair leaves a gap in the stagger rather than shifting later lines.
pub fn compute_connectors(anchors: &[Option<AnchorSample>]) -> Vec<ConnectorLine> {
    anchors
        .windows(2)
        .enumerate()
        .filter_map(|(sequence, pair)| {
            let (start, end) = (pair[0]?, pair[1]?);
            let to = if start.grid.row == end.grid.row {
                end.center
            } else {
                Point::new(start.center.x, end.center.y)
            };
            let line = ConnectorLine {
                sequence,
                from: start.center,
                to,
            };
            (line.length() >= MIN_LINE_LENGTH).then_some(line)
        })
        .collect()
}
