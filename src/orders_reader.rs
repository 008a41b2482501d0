use log::{debug, error, info};
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::KitchenError;
use crate::order::Order;
use crate::orders_queue::OrdersQueue;

#[derive(Deserialize, Debug)]
struct JsonOrder {
    dish: String,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<JsonOrder>, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

fn add_orders_to_queue(json_orders: Vec<JsonOrder>, orders_queue: &mut OrdersQueue) {
    let mut id = 0;
    for order in json_orders {
        orders_queue.push(Order::new(id, &order.dish));
        debug!("[READER] Added order {}", id);
        id += 1;
    }
    info!("[READER] No more orders left");
}

/// Reads the orders file and appends every order to the queue.
/// The queue is left untouched when the file cannot be read or parsed.
pub fn read_and_add_orders<P: AsRef<Path>>(
    orders_queue: &mut OrdersQueue,
    path: P,
) -> Result<(), KitchenError> {
    match read_orders_from_file(path) {
        Ok(json_orders) => {
            add_orders_to_queue(json_orders, orders_queue);
            Ok(())
        }
        Err(err) => {
            error!("[READER] Could not read the orders file: {}", err);
            Err(KitchenError::FileReaderError)
        }
    }
}
