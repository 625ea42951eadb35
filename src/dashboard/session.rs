//! Per-client session
//!
//! Holds one client's current filter state and applies input events to it.
//! Each accepted event replaces the state wholesale.

use super::binding::InputId;
use crate::data::PayloadRange;
use crate::query::{FilterState, QueryResult, SiteSelection};

/// A user interaction with one of the input controls
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    SelectSite(String),
    SelectPayloadRange { min: f64, max: f64 },
}

impl InputEvent {
    /// The control this event comes from
    pub fn input(&self) -> InputId {
        match self {
            InputEvent::SelectSite(_) => InputId::SiteDropdown,
            InputEvent::SelectPayloadRange { .. } => InputId::PayloadSlider,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    state: FilterState,
}

impl Session {
    pub fn new(initial: FilterState) -> Self {
        Self { state: initial }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Apply an event and return the input that changed
    ///
    /// An inverted or non-finite payload range is rejected and the current
    /// state is kept.
    pub fn apply(&mut self, event: InputEvent) -> QueryResult<InputId> {
        let input = event.input();
        let next = match event {
            InputEvent::SelectSite(site) => self.state.with_site(SiteSelection::from(site)),
            InputEvent::SelectPayloadRange { min, max } => {
                self.state.with_payload(PayloadRange::new(min, max)?)
            }
        };
        self.state = next;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryError;

    fn session() -> Session {
        Session::new(FilterState {
            site: SiteSelection::All,
            payload: PayloadRange::new(0.0, 9600.0).unwrap(),
        })
    }

    #[test]
    fn test_select_site() {
        let mut session = session();
        let input = session
            .apply(InputEvent::SelectSite("KSC LC-39A".to_string()))
            .unwrap();

        assert_eq!(input, InputId::SiteDropdown);
        assert_eq!(
            session.state().site,
            SiteSelection::Site("KSC LC-39A".to_string())
        );
        assert_eq!(session.state().payload.max, 9600.0);
    }

    #[test]
    fn test_select_all_sentinel() {
        let mut session = session();
        session
            .apply(InputEvent::SelectSite("KSC LC-39A".to_string()))
            .unwrap();
        session.apply(InputEvent::SelectSite("ALL".to_string())).unwrap();
        assert!(session.state().site.is_all());
    }

    #[test]
    fn test_select_payload_range() {
        let mut session = session();
        let input = session
            .apply(InputEvent::SelectPayloadRange {
                min: 2000.0,
                max: 5000.0,
            })
            .unwrap();

        assert_eq!(input, InputId::PayloadSlider);
        assert_eq!(session.state().payload.as_array(), [2000.0, 5000.0]);
    }

    #[test]
    fn test_inverted_range_keeps_state() {
        let mut session = session();
        let result = session.apply(InputEvent::SelectPayloadRange {
            min: 5000.0,
            max: 2000.0,
        });

        assert!(matches!(result, Err(QueryError::InvalidRange { .. })));
        assert_eq!(session.state().payload.as_array(), [0.0, 9600.0]);
    }
}
