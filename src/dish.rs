//! Dishes and the ingredients they are made of.

/// An ingredient record. The same type is used in two places: in a station's
/// stock (`quantity` is the amount on hand) and in a dish's recipe
/// (`required_quantity` is the amount one preparation consumes).
/// Two records refer to the same ingredient when their names are equal,
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: u64,
    pub required_quantity: u64,
}

impl Ingredient {
    pub fn new(name: &str, quantity: u64, required_quantity: u64) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            quantity,
            required_quantity,
        }
    }
}

/// A dish with the ordered list of ingredients it requires.
/// Stations read the recipe but never modify it.
#[derive(Debug)]
pub struct Dish {
    name: String,
    ingredients: Vec<Ingredient>,
}

impl Dish {
    pub fn new(name: &str, ingredients: Vec<Ingredient>) -> Dish {
        Dish {
            name: name.to_string(),
            ingredients,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }
}
