// Demo catalog data, split out of the binary so seeding stays testable and
// easy to switch off.

use crate::modules::coffees::core::coffee::Coffee;
use crate::modules::coffees::core::ports::{CoffeeRepository, StorageError};

pub const DEMO_COFFEES: [&str; 4] = [
    "Cafe Cereza",
    "Cafe Ganador",
    "Cafe Lareno",
    "Cafe Tres Pontas",
];

pub async fn seed_demo_coffees(coffees: &dyn CoffeeRepository) -> Result<(), StorageError> {
    for name in DEMO_COFFEES {
        coffees.create(Coffee::new(name)).await?;
    }
    tracing::info!("seeded demo coffees");
    Ok(())
}
