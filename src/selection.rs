use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;

use crate::services::Service;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    OverlayOpen(Service),
    QuotePending(Service),
}

/// Which service is open in the overlay and which one the quote form should preselect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub phase: Phase,
    pub selected_service: Option<Service>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            selected_service: None,
        }
    }
}

impl Selection {
    pub fn open_service(&self) -> Option<Service> {
        match self.phase {
            Phase::OverlayOpen(service) => Some(service),
            _ => None,
        }
    }

    pub fn quote_pending(&self) -> bool {
        matches!(self.phase, Phase::QuotePending(_))
    }

    /// Returns the next state, or `None` when the action does not apply.
    pub fn transition(&self, action: SelectionAction) -> Option<Selection> {
        let next = match (self.phase, action) {
            (_, SelectionAction::OpenService(service)) => Selection {
                phase: Phase::OverlayOpen(service),
                ..self.clone()
            },
            (Phase::OverlayOpen(_), SelectionAction::CloseOverlay) => Selection {
                phase: Phase::Idle,
                ..self.clone()
            },
            (_, SelectionAction::RequestQuote(service)) => Selection {
                phase: Phase::QuotePending(service),
                selected_service: Some(service),
            },
            (Phase::QuotePending(_), SelectionAction::QuoteShown) => Selection {
                phase: Phase::Idle,
                ..self.clone()
            },
            (_, SelectionAction::ClearSelection) if self.selected_service.is_some() => Selection {
                selected_service: None,
                ..self.clone()
            },
            _ => return None,
        };
        Some(next)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionAction {
    OpenService(Service),
    CloseOverlay,
    RequestQuote(Service),
    QuoteShown,
    ClearSelection,
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.transition(action) {
            Some(next) => {
                info!("Selection {:?} -> {:?}", self.phase, next.phase);
                Rc::new(next)
            }
            None => {
                debug!("Ignoring {:?} in {:?}", action, self.phase);
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[SelectionAction]) -> Selection {
        actions.iter().fold(Selection::default(), |state, action| {
            (*Rc::new(state).reduce(*action)).clone()
        })
    }

    #[test]
    fn card_click_opens_overlay() {
        let state = run(&[SelectionAction::OpenService(Service::SeaFreight)]);
        assert_eq!(state.open_service(), Some(Service::SeaFreight));
        assert_eq!(state.selected_service, None);
    }

    #[test]
    fn closing_overlay_returns_to_idle() {
        let state = run(&[
            SelectionAction::OpenService(Service::SeaFreight),
            SelectionAction::CloseOverlay,
        ]);
        assert_eq!(state, Selection::default());
    }

    #[test]
    fn get_quote_closes_overlay_and_preselects() {
        let state = run(&[
            SelectionAction::OpenService(Service::AirCharter),
            SelectionAction::RequestQuote(Service::AirCharter),
        ]);
        assert_eq!(state.open_service(), None);
        assert!(state.quote_pending());
        assert_eq!(state.selected_service, Some(Service::AirCharter));

        let shown = run(&[
            SelectionAction::OpenService(Service::AirCharter),
            SelectionAction::RequestQuote(Service::AirCharter),
            SelectionAction::QuoteShown,
        ]);
        assert_eq!(shown.phase, Phase::Idle);
        assert_eq!(shown.selected_service, Some(Service::AirCharter));
    }

    #[test]
    fn selection_survives_browsing_other_services() {
        let state = run(&[
            SelectionAction::RequestQuote(Service::Procurement),
            SelectionAction::QuoteShown,
            SelectionAction::OpenService(Service::HomeMoving),
            SelectionAction::CloseOverlay,
        ]);
        assert_eq!(state.selected_service, Some(Service::Procurement));
    }

    #[test]
    fn out_of_place_actions_are_ignored() {
        let idle = Selection::default();
        assert_eq!(idle.transition(SelectionAction::CloseOverlay), None);
        assert_eq!(idle.transition(SelectionAction::QuoteShown), None);
        assert_eq!(idle.transition(SelectionAction::ClearSelection), None);
    }

    #[test]
    fn clear_selection_drops_preselection() {
        let state = run(&[
            SelectionAction::RequestQuote(Service::LandFreight),
            SelectionAction::QuoteShown,
            SelectionAction::ClearSelection,
        ]);
        assert_eq!(state, Selection::default());
    }
}
