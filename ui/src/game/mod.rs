//! Session game data: the typed rows served by the monitor endpoint, the
//! sortable table and the round/action scatter plot built from them.

mod data;
pub use data::{fetch_game_data, Column, GameDataRow, GamePayload};

mod table;
pub use table::{sort_rows, DataTable, TableModel, TableRow};

mod scatter;
pub use scatter::{action_points, extent, ActionPoint, LinearScale, ScatterModel, ScatterPlot};
