//! Outlet selector shown in the header

use crate::config::LocationSpec;

pub const ALL_LOCATIONS_ID: &str = "all";

const DEFAULT_OUTLETS: [(&str, &str); 6] = [
    ("gurgaon-mg", "Gurgaon - MG Road"),
    ("gurgaon-cyber", "Gurgaon - Cyber City"),
    ("gurgaon-sohna", "Gurgaon - Sohna Road"),
    ("delhi-cp", "Delhi - Connaught Place"),
    ("noida-sector18", "Noida - Sector 18"),
    ("faridabad-crown", "Faridabad - Crown Plaza"),
];

#[derive(Debug, Clone)]
pub struct LocationSelector {
    locations: Vec<LocationSpec>,
    index: usize,
}

impl Default for LocationSelector {
    fn default() -> Self {
        Self::from_outlets(
            DEFAULT_OUTLETS
                .iter()
                .map(|(id, name)| LocationSpec {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        )
    }
}

impl LocationSelector {
    /// Configured outlets, or the built-in list when none are configured.
    /// "All Locations" always comes first.
    pub fn from_config(outlets: &[LocationSpec]) -> Self {
        if outlets.is_empty() {
            return Self::default();
        }
        Self::from_outlets(outlets.to_vec())
    }

    fn from_outlets(outlets: Vec<LocationSpec>) -> Self {
        let mut locations = vec![LocationSpec {
            id: ALL_LOCATIONS_ID.to_string(),
            name: "All Locations".to_string(),
        }];
        locations.extend(
            outlets
                .into_iter()
                .filter(|spec| spec.id != ALL_LOCATIONS_ID && !spec.id.trim().is_empty()),
        );
        Self {
            locations,
            index: 0,
        }
    }

    pub fn current(&self) -> &LocationSpec {
        &self.locations[self.index]
    }

    pub fn locations(&self) -> &[LocationSpec] {
        &self.locations
    }

    pub fn cycle(&mut self, forward: bool) {
        let len = self.locations.len();
        self.index = if forward {
            (self.index + 1) % len
        } else {
            (self.index + len - 1) % len
        };
    }

    /// Selects by id. Returns false when the id is unknown.
    pub fn select(&mut self, id: &str) -> bool {
        match self
            .locations
            .iter()
            .position(|spec| spec.id.eq_ignore_ascii_case(id))
        {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Number of outlets the current selection covers
    pub fn outlet_count(&self) -> usize {
        if self.current().id == ALL_LOCATIONS_ID {
            self.locations.len() - 1
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_outlets() {
        let selector = LocationSelector::default();
        assert_eq!(selector.locations().len(), 7);
        assert_eq!(selector.current().name, "All Locations");
        assert_eq!(selector.outlet_count(), 6);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut selector = LocationSelector::default();
        selector.cycle(false);
        assert_eq!(selector.current().id, "faridabad-crown");
        selector.cycle(true);
        assert_eq!(selector.current().id, ALL_LOCATIONS_ID);
    }

    #[test]
    fn test_select_by_id() {
        let mut selector = LocationSelector::default();
        assert!(selector.select("DELHI-CP"));
        assert_eq!(selector.outlet_count(), 1);
        assert!(!selector.select("mumbai"));
        assert_eq!(selector.current().id, "delhi-cp");
    }

    #[test]
    fn test_configured_outlets_keep_all_first() {
        let selector = LocationSelector::from_config(&[
            LocationSpec {
                id: "all".to_string(),
                name: "Everything".to_string(),
            },
            LocationSpec {
                id: "pune-kp".to_string(),
                name: "Pune - Koregaon Park".to_string(),
            },
        ]);
        assert_eq!(selector.locations().len(), 2);
        assert_eq!(selector.current().name, "All Locations");
    }
}
