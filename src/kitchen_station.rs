//! A kitchen station. Tracks the dishes it can produce and the ingredient
//! stock it holds, decides if an order is feasible, and consumes stock when a
//! dish is prepared.
use log::{debug, info};

use crate::dish::{Dish, Ingredient};

pub struct KitchenStation {
    name: String,
    dishes: Vec<Dish>,
    ingredients_stock: Vec<Ingredient>,
}

impl KitchenStation {
    pub fn new(name: &str) -> KitchenStation {
        KitchenStation {
            name: name.to_string(),
            dishes: Vec::new(),
            ingredients_stock: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn ingredients_stock(&self) -> &[Ingredient] {
        &self.ingredients_stock
    }

    /// Assigns a dish to the station, taking ownership of it.
    /// Returns false without modifying the station if a dish with the same
    /// name is already assigned.
    pub fn assign_dish(&mut self, dish: Dish) -> bool {
        if self.dishes.iter().any(|assigned| assigned.name() == dish.name()) {
            info!(
                "[STATION {}] Dish {} is already assigned",
                self.name,
                dish.name()
            );
            return false;
        }
        self.dishes.push(dish);
        true
    }

    /// Adds the incoming quantity to the same-named stock record, or stores
    /// the record as new stock. Stock never decreases here.
    pub fn replenish_ingredients(&mut self, ingredient: Ingredient) {
        let position = self
            .ingredients_stock
            .iter()
            .position(|in_stock| in_stock.name == ingredient.name);
        match position {
            Some(index) => {
                let in_stock = &mut self.ingredients_stock[index];
                in_stock.quantity += ingredient.quantity;
                debug!(
                    "[STATION {}] Replenished {} with {}, there is {}",
                    self.name, ingredient.name, ingredient.quantity, in_stock.quantity
                );
            }
            None => {
                debug!(
                    "[STATION {}] Stocked new ingredient {} with {}",
                    self.name, ingredient.name, ingredient.quantity
                );
                self.ingredients_stock.push(ingredient);
            }
        }
    }

    /// Checks if the station has the dish assigned and enough stock for every
    /// required ingredient. Never modifies the station.
    pub fn can_complete_order(&self, dish_name: &str) -> bool {
        let dish = match self.dishes.iter().find(|dish| dish.name() == dish_name) {
            Some(dish) => dish,
            None => return false,
        };
        dish.ingredients().iter().all(|required| {
            self.ingredients_stock.iter().any(|in_stock| {
                in_stock.name == required.name && in_stock.quantity >= required.required_quantity
            })
        })
    }

    /// Prepares a dish, consuming its required ingredients from stock.
    /// Feasibility is checked before anything is consumed; an infeasible
    /// order returns false and leaves the stock untouched. Stock records
    /// depleted to zero are removed.
    pub fn prepare_dish(&mut self, dish_name: &str) -> bool {
        if !self.can_complete_order(dish_name) {
            info!(
                "[STATION {}] Cannot prepare {}, dish not assigned or not enough stock",
                self.name, dish_name
            );
            return false;
        }
        let dish = match self.dishes.iter().find(|dish| dish.name() == dish_name) {
            Some(dish) => dish,
            None => return false,
        };
        for required in dish.ingredients() {
            consume_ingredient(&self.name, &mut self.ingredients_stock, required);
        }
        debug!("[STATION {}] Prepared {}", self.name, dish_name);
        true
    }

    /// Takes over another station's inventory: its stock is replenished into
    /// this station and its dishes are assigned here, keeping the first dish
    /// seen for every name. The absorbed station is consumed.
    pub fn absorb(&mut self, other: KitchenStation) {
        for ingredient in other.ingredients_stock {
            self.replenish_ingredients(ingredient);
        }
        for dish in other.dishes {
            self.assign_dish(dish);
        }
    }
}

fn consume_ingredient(station_name: &str, stock: &mut Vec<Ingredient>, required: &Ingredient) {
    let position = stock
        .iter()
        .position(|in_stock| in_stock.name == required.name);
    if let Some(index) = position {
        let in_stock = &mut stock[index];
        in_stock.quantity = in_stock.quantity.saturating_sub(required.required_quantity);
        debug!(
            "[STATION {}] Uses {} of {}, there remains {}",
            station_name, required.required_quantity, required.name, in_stock.quantity
        );
        if in_stock.quantity == 0 {
            stock.remove(index);
            debug!(
                "[STATION {}] Depleted {}, removing it from stock",
                station_name, required.name
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> Dish {
        Dish::new(
            "Burger",
            vec![
                Ingredient::new("Bun", 0, 1),
                Ingredient::new("Patty", 0, 1),
            ],
        )
    }

    #[test]
    fn should_create_an_empty_station() {
        let station = KitchenStation::new("Grill");
        assert_eq!("Grill", station.name());
        assert_eq!(true, station.dishes().is_empty());
        assert_eq!(true, station.ingredients_stock().is_empty());
    }

    #[test]
    fn should_rename_a_station() {
        let mut station = KitchenStation::new("Grill");
        station.set_name("Char Grill");
        assert_eq!("Char Grill", station.name());
    }

    #[test]
    fn should_assign_a_dish_to_the_station() {
        let mut station = KitchenStation::new("Grill");
        assert_eq!(true, station.assign_dish(burger()));
        assert_eq!(1, station.dishes().len());
    }

    #[test]
    fn should_reject_a_dish_with_a_duplicated_name() {
        let mut station = KitchenStation::new("Grill");
        assert_eq!(true, station.assign_dish(burger()));
        let same_name = Dish::new("Burger", vec![Ingredient::new("Brioche", 0, 1)]);
        assert_eq!(false, station.assign_dish(same_name));
        assert_eq!(1, station.dishes().len());
    }

    #[test]
    fn should_stock_a_new_ingredient() {
        let mut station = KitchenStation::new("Grill");
        station.replenish_ingredients(Ingredient::new("Bun", 5, 0));
        assert_eq!(1, station.ingredients_stock().len());
        assert_eq!(5, station.ingredients_stock()[0].quantity);
    }

    #[test]
    fn should_add_quantities_of_the_same_ingredient() {
        let mut station = KitchenStation::new("Grill");
        station.replenish_ingredients(Ingredient::new("Bun", 5, 0));
        station.replenish_ingredients(Ingredient::new("Bun", 3, 0));
        assert_eq!(1, station.ingredients_stock().len());
        assert_eq!(8, station.ingredients_stock()[0].quantity);
    }

    #[test]
    fn should_match_ingredient_names_case_sensitively() {
        let mut station = KitchenStation::new("Grill");
        station.replenish_ingredients(Ingredient::new("Bun", 5, 0));
        station.replenish_ingredients(Ingredient::new("bun", 3, 0));
        assert_eq!(2, station.ingredients_stock().len());
        assert_eq!(5, station.ingredients_stock()[0].quantity);
        assert_eq!(3, station.ingredients_stock()[1].quantity);
    }

    #[test]
    fn should_not_complete_an_order_for_an_unassigned_dish() {
        let mut station = KitchenStation::new("Grill");
        station.replenish_ingredients(Ingredient::new("Bun", 5, 0));
        assert_eq!(false, station.can_complete_order("Burger"));
    }

    #[test]
    fn should_not_complete_an_order_with_a_missing_ingredient() {
        let mut station = KitchenStation::new("Grill");
        station.assign_dish(burger());
        station.replenish_ingredients(Ingredient::new("Bun", 5, 0));
        assert_eq!(false, station.can_complete_order("Burger"));
    }

    #[test]
    fn should_not_complete_an_order_with_insufficient_stock() {
        let mut station = KitchenStation::new("Grill");
        station.assign_dish(Dish::new("Burger", vec![Ingredient::new("Bun", 0, 2)]));
        station.replenish_ingredients(Ingredient::new("Bun", 1, 0));
        assert_eq!(false, station.can_complete_order("Burger"));
    }

    #[test]
    fn should_complete_an_order_with_enough_stock() {
        let mut station = KitchenStation::new("Grill");
        station.assign_dish(burger());
        station.replenish_ingredients(Ingredient::new("Bun", 2, 0));
        station.replenish_ingredients(Ingredient::new("Patty", 1, 0));
        assert_eq!(true, station.can_complete_order("Burger"));
    }

    #[test]
    fn checking_an_order_should_not_change_the_station() {
        let mut station = KitchenStation::new("Grill");
        station.assign_dish(burger());
        station.replenish_ingredients(Ingredient::new("Bun", 2, 0));
        station.replenish_ingredients(Ingredient::new("Patty", 1, 0));
        station.can_complete_order("Burger");
        station.can_complete_order("Burger");
        assert_eq!(1, station.dishes().len());
        assert_eq!(2, station.ingredients_stock().len());
        assert_eq!(2, station.ingredients_stock()[0].quantity);
        assert_eq!(1, station.ingredients_stock()[1].quantity);
    }

    #[test]
    fn should_not_prepare_an_infeasible_dish() {
        let mut station = KitchenStation::new("Grill");
        station.assign_dish(burger());
        station.replenish_ingredients(Ingredient::new("Bun", 2, 0));
        assert_eq!(false, station.prepare_dish("Burger"));
        assert_eq!(1, station.ingredients_stock().len());
        assert_eq!(2, station.ingredients_stock()[0].quantity);
    }

    #[test]
    fn should_prepare_a_dish_and_remove_depleted_stock() {
        let mut station = KitchenStation::new("Grill");
        station.assign_dish(burger());
        station.replenish_ingredients(Ingredient::new("Bun", 2, 0));
        station.replenish_ingredients(Ingredient::new("Patty", 1, 0));
        assert_eq!(true, station.can_complete_order("Burger"));
        assert_eq!(true, station.prepare_dish("Burger"));
        assert_eq!(1, station.ingredients_stock().len());
        assert_eq!("Bun", station.ingredients_stock()[0].name);
        assert_eq!(1, station.ingredients_stock()[0].quantity);
    }

    #[test]
    fn should_absorb_another_station() {
        let mut grill = KitchenStation::new("Grill");
        grill.assign_dish(burger());
        grill.replenish_ingredients(Ingredient::new("Bun", 2, 0));

        let mut fryer = KitchenStation::new("Fryer");
        fryer.assign_dish(Dish::new("Fries", vec![Ingredient::new("Potato", 0, 2)]));
        fryer.assign_dish(Dish::new("Burger", vec![Ingredient::new("Brioche", 0, 1)]));
        fryer.replenish_ingredients(Ingredient::new("Bun", 3, 0));
        fryer.replenish_ingredients(Ingredient::new("Potato", 6, 0));

        grill.absorb(fryer);

        assert_eq!(2, grill.dishes().len());
        assert_eq!(2, grill.ingredients_stock().len());
        assert_eq!(5, grill.ingredients_stock()[0].quantity);
        assert_eq!("Potato", grill.ingredients_stock()[1].name);
    }
}
