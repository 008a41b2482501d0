#[derive(Debug)]
pub struct Order {
    pub id: usize,
    pub dish_name: String,
}

impl Order {
    pub fn new(id: usize, dish_name: &str) -> Order {
        Order {
            id,
            dish_name: dish_name.to_string(),
        }
    }
}
