//! Testimonial slide and dot indicator.

use super::{centered, wrap};
use crate::gallery::{Carousel, Testimonial};

pub fn slide(out: &mut String, slide: &Testimonial, cols: usize) {
    for line in wrap(&format!("\u{201c}{}\u{201d}", slide.quote), cols) {
        out.push_str(&centered(&line, cols));
        out.push('\n');
    }
    out.push_str(&centered(slide.author, cols));
    out.push('\n');
    out.push_str(&centered(slide.role, cols));
    out.push('\n');
}

/// `●` for the active slide, `○` for the rest.
pub fn dots(out: &mut String, carousel: &Carousel) {
    let dots: Vec<&str> = (0..carousel.len())
        .map(|i| if i == carousel.active() { "●" } else { "○" })
        .collect();
    out.push_str(&dots.join(" "));
    out.push('\n');
}
