use crate::station_manager::StationManager;

/// Prints a one line summary of the kitchen: how many orders were processed
/// and, per station, how many dishes and stock records it holds.
pub fn print_statistics(manager: &StationManager, orders_processed: u64) {
    println!("{}", statistics_string(manager, orders_processed));
}

pub fn statistics_string(manager: &StationManager, orders_processed: u64) -> String {
    let mut statistics = format!(
        "[STATISTICS] Orders processed={} | Station=(dishes, stock records) |",
        orders_processed
    );
    add_stations_to_statistics_string(manager, &mut statistics);
    statistics
}

fn add_stations_to_statistics_string(manager: &StationManager, statistics: &mut String) {
    for station in manager.iter() {
        statistics.push_str(&format!(
            " {}=({},{}) ",
            station.name(),
            station.dishes().len(),
            station.ingredients_stock().len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dish::{Dish, Ingredient};
    use crate::kitchen_station::KitchenStation;

    #[test]
    fn should_report_the_processed_orders_and_every_station() {
        let mut manager = StationManager::new();
        let mut grill = KitchenStation::new("Grill");
        grill.assign_dish(Dish::new("Burger", vec![Ingredient::new("Bun", 0, 1)]));
        grill.replenish_ingredients(Ingredient::new("Bun", 2, 0));
        grill.replenish_ingredients(Ingredient::new("Patty", 1, 0));
        manager.add_station(grill);
        manager.add_station(KitchenStation::new("Fryer"));

        let statistics = statistics_string(&manager, 3);
        assert_eq!(true, statistics.contains("Orders processed=3"));
        assert_eq!(true, statistics.contains(" Grill=(1,2) "));
        assert_eq!(true, statistics.contains(" Fryer=(0,0) "));
    }
}
