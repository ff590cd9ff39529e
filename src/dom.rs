use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{window, ScrollBehavior, ScrollToOptions};

use crate::config;

/// Page anchors the header and CTAs navigate between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Quote,
    Footer,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::Services, Section::Quote, Section::Footer];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Quote => "quote",
            Section::Footer => "footer",
        }
    }
}

/// Document offset to scroll to so the section clears the fixed header.
pub fn scroll_target(element_top: f64, page_offset: f64) -> f64 {
    (element_top + page_offset - config::HEADER_OFFSET).max(0.0)
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scrolls to the section; a missing element is a no-op.
pub fn scroll_to_section(section: Section) {
    let Some(window) = window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(section.id())) else {
        debug!("Section #{} not in document, skipping scroll", section.id());
        return;
    };
    let top = element.get_bounding_client_rect().top();
    let page_offset = window.page_y_offset().unwrap_or(0.0);
    smooth_scroll_to(scroll_target(top, page_offset));
}

/// Same as `scroll_to_section`, after `delay_ms` so closing overlays can settle.
/// `then` runs right after the scroll starts.
pub fn scroll_to_section_later<F>(section: Section, delay_ms: u32, then: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(delay_ms, move || {
        scroll_to_section(section);
        then();
    })
    .forget();
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Last section whose top has passed the upper third of the viewport.
pub fn active_section() -> Section {
    let Some(window) = window() else {
        return Section::Home;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let Some(document) = window.document() else {
        return Section::Home;
    };
    let tops: Vec<(Section, f64)> = Section::ALL
        .into_iter()
        .filter_map(|s| {
            document
                .get_element_by_id(s.id())
                .map(|el| (s, el.get_bounding_client_rect().top()))
        })
        .collect();
    pick_active(&tops, viewport * 0.3)
}

fn pick_active(tops: &[(Section, f64)], line: f64) -> Section {
    tops.iter()
        .filter(|(_, top)| *top <= line)
        .last()
        .map(|(section, _)| *section)
        .unwrap_or(Section::Home)
}

/// Stops the page behind an overlay from scrolling.
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let _ = body
        .style()
        .set_property("overflow", if locked { "hidden" } else { "" });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_leaves_room_for_header() {
        assert_eq!(scroll_target(640.0, 1200.0), 1740.0);
        assert_eq!(scroll_target(20.0, 0.0), 0.0);
    }

    #[test]
    fn active_section_follows_scroll_line() {
        let tops = [
            (Section::Home, -1500.0),
            (Section::Services, -300.0),
            (Section::Quote, 180.0),
            (Section::Footer, 1400.0),
        ];
        assert_eq!(pick_active(&tops, 240.0), Section::Quote);
        assert_eq!(pick_active(&tops, 100.0), Section::Services);
        assert_eq!(pick_active(&[], 100.0), Section::Home);
    }
}
