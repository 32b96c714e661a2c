//! Domain model: trains, trips, terminals, shunting distances, depot resources,
//! objective weights. Everything here is built once by the loader and is
//! read-only for the rest of the pipeline.

mod depot;
mod fleet;
mod next_day;
mod shunting;
mod terminal;
mod train;
mod trip;
mod weights;

pub use depot::DepotResources;
pub use fleet::{DomainModel, DISTANCE_SCALE, HORIZON_SEC};
pub use next_day::NextDayStarts;
pub use shunting::ShuntingMatrix;
pub use terminal::TerminalIndex;
pub use train::Train;
pub use trip::Trip;
pub use weights::ObjectiveWeights;
