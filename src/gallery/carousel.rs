//! Testimonial carousel.
//!
//! The home page rotates through testimonials on a timer. Any manual
//! interaction (arrows or a dot) stops autoplay for good.

use super::lightbox::{step_index, Direction};
use crate::domain::NavigationError;
use std::time::Duration;

/// Carousel index with autoplay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
    autoplay: bool,
}

impl Carousel {
    /// Creates a carousel over `len` slides, showing the first and autoplaying.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::EmptyProjection`] if `len` is zero.
    pub const fn new(len: usize) -> Result<Self, NavigationError> {
        if len == 0 {
            return Err(NavigationError::EmptyProjection);
        }
        Ok(Self {
            len,
            active: 0,
            autoplay: true,
        })
    }

    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub const fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Timer tick: advances one slide while autoplay is on.
    ///
    /// Returns whether the active slide changed.
    pub fn tick(&mut self) -> bool {
        if !self.autoplay {
            return false;
        }
        self.shift(Direction::Next);
        self.len > 1
    }

    /// Applies the ticks due after `elapsed` at one tick per `interval`.
    ///
    /// A zero interval never ticks. Returns whether the active slide changed.
    pub fn elapse(&mut self, elapsed: Duration, interval: Duration) -> bool {
        if interval.is_zero() {
            return false;
        }
        let due = elapsed.as_millis() / interval.as_millis().max(1);
        // Whole laps land on the same slide.
        let steps = due % self.len as u128;
        let before = self.active;
        if self.autoplay {
            for _ in 0..steps {
                self.shift(Direction::Next);
            }
        }
        self.active != before
    }

    pub fn next(&mut self) {
        self.autoplay = false;
        self.shift(Direction::Next);
    }

    pub fn previous(&mut self) {
        self.autoplay = false;
        self.shift(Direction::Previous);
    }

    /// Jumps to slide `index` (dot click).
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::IndexOutOfRange`] if `index >= len`. Autoplay
    /// is left untouched on error.
    pub fn go_to(&mut self, index: usize) -> Result<(), NavigationError> {
        if index >= self.len {
            return Err(NavigationError::IndexOutOfRange { index, len: self.len });
        }
        self.autoplay = false;
        self.active = index;
        Ok(())
    }

    fn shift(&mut self, direction: Direction) {
        // `active < len` and `len > 0` hold by construction.
        if let Ok(next) = step_index(self.active, self.len, direction) {
            self.active = next;
        }
    }
}

/// A quote shown on the home page carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "S.C.E.A.R. has transformed how our students engage with Roman history. Their demonstrations bring the past to life in ways textbooks simply cannot.",
        author: "Dr. Maria Collins",
        role: "History Professor, University of Oxford",
    },
    Testimonial {
        quote: "Joining S.C.E.A.R. connected me with passionate individuals who share my love for Roman history. The training and events are meticulously researched and incredibly immersive.",
        author: "Thomas Harding",
        role: "Member since 2018",
    },
    Testimonial {
        quote: "Our museum exhibition on Roman military life was enhanced tremendously by S.C.E.A.R.'s contributions. Their attention to historical detail is unmatched.",
        author: "Jonathan Pierce",
        role: "Curator, National History Museum",
    },
    Testimonial {
        quote: "The educational workshops provided by S.C.E.A.R. were engaging and informative. Our students were captivated by the authentic demonstrations and hands-on activities.",
        author: "Sarah Mitchell",
        role: "Headteacher, Westfield Academy",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_wrap_while_autoplaying() {
        let mut carousel = Carousel::new(3).unwrap();
        assert!(carousel.tick());
        assert!(carousel.tick());
        assert!(carousel.tick());
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn elapsed_time_ticks_once_per_interval() {
        let interval = Duration::from_millis(5000);
        let mut carousel = Carousel::new(4).unwrap();

        assert!(!carousel.elapse(Duration::from_millis(4999), interval));
        assert!(carousel.elapse(Duration::from_millis(12_000), interval));
        assert_eq!(carousel.active(), 2);

        assert!(!carousel.elapse(Duration::from_secs(20), interval));
        assert!(!carousel.elapse(Duration::from_secs(60), Duration::ZERO));
        assert_eq!(carousel.active(), 2);

        carousel.next();
        assert!(!carousel.elapse(Duration::from_secs(10), interval));
        assert_eq!(carousel.active(), 3);
    }

    #[test]
    fn manual_navigation_stops_autoplay() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.previous();
        assert_eq!(carousel.active(), 3);
        assert!(!carousel.is_autoplaying());
        assert!(!carousel.tick());
        assert_eq!(carousel.active(), 3);
    }

    #[test]
    fn dot_click_validates_index() {
        let mut carousel = Carousel::new(4).unwrap();
        assert_eq!(
            carousel.go_to(4),
            Err(NavigationError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert!(carousel.is_autoplaying());
        carousel.go_to(2).unwrap();
        assert_eq!(carousel.active(), 2);
        assert!(!carousel.is_autoplaying());
    }

    #[test]
    fn empty_carousel_is_rejected() {
        assert_eq!(Carousel::new(0), Err(NavigationError::EmptyProjection));
    }

    #[test]
    fn single_slide_tick_reports_no_change() {
        let mut carousel = Carousel::new(1).unwrap();
        assert!(!carousel.tick());
        carousel.next();
        assert_eq!(carousel.active(), 0);
    }
}
