mod load;
mod types;

pub use load::{get_chartops_data_dir, load};
pub use types::{
    AppConfig, ChartJob, LoggingConfig, PaletteColor, RunnerConfig, RunnerKind, StatusConfig,
    ValidateConfig,
};
