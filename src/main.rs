use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use kitchen_stations::dish::{Dish, Ingredient};
use kitchen_stations::kitchen::Kitchen;
use kitchen_stations::kitchen_station::KitchenStation;
use kitchen_stations::station_manager::StationManager;
use kitchen_stations::statistics;

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .expect("Error starting the logger");

    let mut manager = StationManager::new();
    manager.add_station(grill_station());
    manager.add_station(fryer_station());

    let mut kitchen = Kitchen::new(manager);
    if let Err(err) = kitchen.load_orders("orders.json") {
        error!("[KITCHEN] Could not load the orders: {:?}", err);
        return;
    }
    if let Err(err) = kitchen.process_orders() {
        error!("[KITCHEN] Error while processing the orders: {:?}", err);
        return;
    }

    // End of shift: the fryer folds into the grill
    kitchen.manager_mut().merge_stations("Grill", "Fryer");
    statistics::print_statistics(kitchen.manager(), kitchen.orders_processed());
}

fn grill_station() -> KitchenStation {
    let mut station = KitchenStation::new("Grill");
    station.assign_dish(Dish::new(
        "Burger",
        vec![
            Ingredient::new("Bun", 0, 1),
            Ingredient::new("Patty", 0, 1),
        ],
    ));
    station.replenish_ingredients(Ingredient::new("Bun", 10, 0));
    station.replenish_ingredients(Ingredient::new("Patty", 8, 0));
    station
}

fn fryer_station() -> KitchenStation {
    let mut station = KitchenStation::new("Fryer");
    station.assign_dish(Dish::new(
        "Fries",
        vec![
            Ingredient::new("Potato", 0, 2),
            Ingredient::new("Oil", 0, 1),
        ],
    ));
    station.replenish_ingredients(Ingredient::new("Potato", 12, 0));
    station.replenish_ingredients(Ingredient::new("Oil", 4, 0));
    station
}
