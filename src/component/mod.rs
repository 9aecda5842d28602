//! Chart component types the builder instantiates and wires together.
//!
//! Every component keeps a typed field for each published option and an
//! `extras` table for options the type does not model, so unknown values
//! survive a build instead of being dropped.

mod axis;
mod caption;
mod chart;
mod configurable;
mod instance;
mod legend;
mod padding;
mod series;

pub use axis::{AxisComponent, AxisPosition};
pub use caption::CaptionComponent;
pub use chart::ChartComponent;
pub use configurable::Configurable;
pub use instance::Instance;
pub use legend::{LegendComponent, LegendPosition};
pub use padding::PaddingComponent;
pub use series::SeriesComponent;
