//! The kitchen. Owns the stations and the queue of pending orders, and
//! routes every order to a station that can complete it.
use std::path::Path;

use log::{debug, info};

use crate::errors::KitchenError;
use crate::order::Order;
use crate::orders_queue::OrdersQueue;
use crate::orders_reader::read_and_add_orders;
use crate::station_manager::StationManager;

pub struct Kitchen {
    manager: StationManager,
    orders: OrdersQueue,
    orders_processed: u64,
}

impl Kitchen {
    pub fn new(manager: StationManager) -> Kitchen {
        Kitchen {
            manager,
            orders: OrdersQueue::new(),
            orders_processed: 0,
        }
    }

    pub fn manager(&self) -> &StationManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut StationManager {
        &mut self.manager
    }

    pub fn orders_processed(&self) -> u64 {
        self.orders_processed
    }

    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Loads orders from a JSON file into the pending queue.
    pub fn load_orders<P: AsRef<Path>>(&mut self, path: P) -> Result<(), KitchenError> {
        read_and_add_orders(&mut self.orders, path)
    }

    /// Processes the pending orders in arrival order. Every order is routed
    /// to the first station that can complete it; orders no station can
    /// complete are skipped and not counted.
    pub fn process_orders(&mut self) -> Result<(), KitchenError> {
        while !self.orders.is_empty() {
            let order = self
                .orders
                .pop()
                .ok_or(KitchenError::EmptyQueueWhenNotExpected)?;
            debug!("[KITCHEN] Takes order {}", order.id);
            self.process_order(order);
        }
        Ok(())
    }

    fn process_order(&mut self, order: Order) -> bool {
        let station_name = self
            .manager
            .iter()
            .find(|station| station.can_complete_order(&order.dish_name))
            .map(|station| station.name().to_string());
        match station_name {
            Some(station_name) => {
                let prepared = self
                    .manager
                    .prepare_dish_at_station(&station_name, &order.dish_name);
                if prepared {
                    self.orders_processed += 1;
                    info!(
                        "[KITCHEN] Prepared order {} ({}) at station {}",
                        order.id, order.dish_name, station_name
                    );
                }
                prepared
            }
            None => {
                info!(
                    "[KITCHEN] Skipped order {}, no station can complete {}",
                    order.id, order.dish_name
                );
                false
            }
        }
    }
}
