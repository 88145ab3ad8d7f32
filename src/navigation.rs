//! Scroll-driven header state: the "scrolled" style flag and the active
//! section highlighted in the navigation.

pub const SCROLL_THRESHOLD: f64 = 20.0;
pub const BAND_TOP_LINE: f64 = 150.0;
pub const BAND_BOTTOM_LINE: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub const fn new(anchor: &'static str, label: &'static str) -> Self {
        Self { anchor, label }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink::new("home", "Home"),
    NavLink::new("pricing", "Pricing"),
    NavLink::new("portfolio", "Portfolio"),
    NavLink::new("services", "Services"),
    NavLink::new("about", "About"),
    NavLink::new("contact", "Contact"),
];

/// Top and bottom edge of a section, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionBand {
    pub top_line: f64,
    pub bottom_line: f64,
}

impl Default for DetectionBand {
    fn default() -> Self {
        Self {
            top_line: BAND_TOP_LINE,
            bottom_line: BAND_BOTTOM_LINE,
        }
    }
}

impl DetectionBand {
    pub fn contains(&self, bounds: SectionBounds) -> bool {
        bounds.top <= self.top_line && bounds.bottom >= self.bottom_line
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset_y: f64,
    pub is_past_threshold: bool,
}

impl ScrollState {
    pub fn at(offset_y: f64, threshold: f64) -> Self {
        Self {
            offset_y,
            is_past_threshold: offset_y > threshold,
        }
    }
}

/// Coalesces scroll notifications into at most one update per rendered frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    /// Returns `true` when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Read-only view of the page the resolver needs.
pub trait ViewportQuery {
    fn scroll_offset(&self) -> f64;

    /// `None` when no element carries the anchor as its id.
    fn section_bounds(&self, anchor: &str) -> Option<SectionBounds>;
}

/// Scans from the last link to the first and returns the first anchor whose
/// section spans the band. Anchors without an element are skipped.
pub fn resolve_active(
    links: &[NavLink],
    band: DetectionBand,
    viewport: &impl ViewportQuery,
) -> Option<&'static str> {
    links.iter().rev().find_map(|link| {
        let Some(bounds) = viewport.section_bounds(link.anchor) else {
            log::debug!("no section element for anchor #{}", link.anchor);
            return None;
        };
        band.contains(bounds).then_some(link.anchor)
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollEvent {
    Notified,
    FrameReady,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollEffect {
    Dropped,
    ScheduleFrame,
    Refreshed { changed: bool },
}

#[derive(Clone, Debug)]
pub struct NavigationState {
    links: &'static [NavLink],
    band: DetectionBand,
    threshold: f64,
    throttle: FrameThrottle,
    scroll: ScrollState,
    active: &'static str,
}

impl NavigationState {
    /// Starts with the first link active. Returns `None` for an empty list.
    pub fn new(links: &'static [NavLink]) -> Option<Self> {
        let first = links.first()?;
        Some(Self::starting_at(links, first.anchor))
    }

    /// State for the site header over [`NAV_LINKS`].
    pub fn for_site() -> Self {
        Self::starting_at(&NAV_LINKS, NAV_LINKS[0].anchor)
    }

    fn starting_at(links: &'static [NavLink], active: &'static str) -> Self {
        Self {
            links,
            band: DetectionBand::default(),
            threshold: SCROLL_THRESHOLD,
            throttle: FrameThrottle::default(),
            scroll: ScrollState::default(),
            active,
        }
    }

    #[cfg(test)]
    pub fn with_band(mut self, band: DetectionBand) -> Self {
        self.band = band;
        self
    }

    #[cfg(test)]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn links(&self) -> &'static [NavLink] {
        self.links
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    #[cfg(test)]
    pub fn frame_pending(&self) -> bool {
        self.throttle.is_pending()
    }

    /// Recomputes the scroll flag and the active anchor. The active anchor is
    /// kept when no section spans the band.
    pub fn refresh(&mut self, viewport: &impl ViewportQuery) -> bool {
        let scroll = ScrollState::at(viewport.scroll_offset(), self.threshold);
        let scrolled_changed = scroll.is_past_threshold != self.scroll.is_past_threshold;
        self.scroll = scroll;

        let mut active_changed = false;
        if let Some(anchor) = resolve_active(self.links, self.band, viewport) {
            active_changed = anchor != self.active;
            self.active = anchor;
        }

        scrolled_changed || active_changed
    }

    pub fn dispatch(&mut self, event: ScrollEvent, viewport: &impl ViewportQuery) -> ScrollEffect {
        match event {
            ScrollEvent::Notified => {
                if self.throttle.request() {
                    ScrollEffect::ScheduleFrame
                } else {
                    ScrollEffect::Dropped
                }
            }
            ScrollEvent::FrameReady => {
                self.throttle.complete();
                ScrollEffect::Refreshed {
                    changed: self.refresh(viewport),
                }
            }
        }
    }
}
