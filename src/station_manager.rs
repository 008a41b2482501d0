//! Ordered collection of kitchen stations. Keeps the most recently added or
//! moved station at the front and routes dish and ingredient operations to
//! stations by name.
use std::collections::VecDeque;

use log::{debug, info};

use crate::dish::{Dish, Ingredient};
use crate::kitchen_station::KitchenStation;

/// Owns every station it holds. Station names are expected to be unique by
/// convention; lookups return the first match from the front.
pub struct StationManager {
    stations: VecDeque<KitchenStation>,
}

impl StationManager {
    pub fn new() -> StationManager {
        StationManager {
            stations: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&KitchenStation> {
        self.stations.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KitchenStation> {
        self.stations.iter()
    }

    /// Adds a station at the front of the order.
    pub fn add_station(&mut self, station: KitchenStation) {
        debug!("[MANAGER] Added station {}", station.name());
        self.stations.push_front(station);
    }

    /// Removes and drops the first station with the given name.
    /// Returns false without modifying the collection if there is no match.
    pub fn remove_station(&mut self, station_name: &str) -> bool {
        let position = self
            .stations
            .iter()
            .position(|station| station.name() == station_name);
        match position {
            Some(index) => {
                self.stations.remove(index);
                info!("[MANAGER] Removed station {}", station_name);
                true
            }
            None => false,
        }
    }

    pub fn find_station(&self, station_name: &str) -> Option<&KitchenStation> {
        self.stations
            .iter()
            .find(|station| station.name() == station_name)
    }

    pub fn find_station_mut(&mut self, station_name: &str) -> Option<&mut KitchenStation> {
        self.stations
            .iter_mut()
            .find(|station| station.name() == station_name)
    }

    /// Moves the named station to the front of the order, keeping the
    /// relative order of the others. A station already at the front stays
    /// where it is and the move still counts as successful.
    pub fn move_station_to_front(&mut self, station_name: &str) -> bool {
        let position = self
            .stations
            .iter()
            .position(|station| station.name() == station_name);
        match position {
            Some(0) => true,
            Some(index) => {
                if let Some(station) = self.stations.remove(index) {
                    debug!("[MANAGER] Moved station {} to the front", station_name);
                    self.stations.push_front(station);
                }
                true
            }
            None => false,
        }
    }

    /// Merges the second station into the first: its stock is added to the
    /// first station's stock and its dishes are assigned there, dropping
    /// same-named duplicates. The second station is then removed. Returns
    /// false without modifying anything if either name is missing or both
    /// names resolve to the same station.
    pub fn merge_stations(&mut self, station_name1: &str, station_name2: &str) -> bool {
        let target = self
            .stations
            .iter()
            .position(|station| station.name() == station_name1);
        let source = self
            .stations
            .iter()
            .position(|station| station.name() == station_name2);
        let (mut target_index, source_index) = match (target, source) {
            (Some(target_index), Some(source_index)) if target_index != source_index => {
                (target_index, source_index)
            }
            _ => return false,
        };
        let absorbed = match self.stations.remove(source_index) {
            Some(station) => station,
            None => return false,
        };
        if source_index < target_index {
            target_index -= 1;
        }
        self.stations[target_index].absorb(absorbed);
        info!(
            "[MANAGER] Merged station {} into {}",
            station_name2, station_name1
        );
        true
    }

    /// Assigns a dish to the named station. False if the station does not
    /// exist or already has a dish with that name.
    pub fn assign_dish_to_station(&mut self, station_name: &str, dish: Dish) -> bool {
        match self.find_station_mut(station_name) {
            Some(station) => station.assign_dish(dish),
            None => false,
        }
    }

    /// Replenishes an ingredient at the named station. False if the station
    /// does not exist.
    pub fn replenish_ingredient_at_station(
        &mut self,
        station_name: &str,
        ingredient: Ingredient,
    ) -> bool {
        match self.find_station_mut(station_name) {
            Some(station) => {
                station.replenish_ingredients(ingredient);
                true
            }
            None => false,
        }
    }

    /// Checks if any station can complete an order for the dish.
    pub fn can_complete_order(&self, dish_name: &str) -> bool {
        self.stations
            .iter()
            .any(|station| station.can_complete_order(dish_name))
    }

    /// Prepares a dish at the named station. False if the station does not
    /// exist or cannot complete the order.
    pub fn prepare_dish_at_station(&mut self, station_name: &str, dish_name: &str) -> bool {
        match self.find_station_mut(station_name) {
            Some(station) => station.prepare_dish(dish_name),
            None => false,
        }
    }
}
