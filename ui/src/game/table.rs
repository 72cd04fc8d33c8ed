use std::cmp::Ordering;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use super::data::{Column, GameDataRow};

/// Sort in place after a click on `column`'s header.
///
/// `player_id` sorts ascending; every other column sorts descending by its
/// numeric value. Rows without a numeric value (null, empty or unparseable)
/// keep their relative order at the bottom, below zero rather than tied with
/// it, so a blank `action` never reads as a zero contribution. The sort is
/// stable, so successive clicks compose.
pub fn sort_rows(rows: &mut [GameDataRow], column: Column) {
    match column {
        Column::PlayerId => rows.sort_by(|a, b| a.player_id.cmp(&b.player_id)),
        other => rows.sort_by(|a, b| descending(a.numeric(other), b.numeric(other))),
    }
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: i64,
    pub cells: Vec<String>,
}

/// Header labels plus one row of cell text per record, in record order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    pub header: Vec<&'static str>,
    pub body: Vec<TableRow>,
}

impl TableModel {
    pub fn build(rows: &[GameDataRow], columns: &[Column]) -> Self {
        Self {
            header: columns.iter().map(Column::key).collect(),
            body: rows
                .iter()
                .map(|row| TableRow {
                    id: row.id,
                    cells: columns.iter().map(|column| row.cell(*column)).collect(),
                })
                .collect(),
        }
    }
}

/// Session table with click-to-sort headers. The table keeps its own copy
/// of the rows so successive sorts build on each other.
#[component]
pub fn DataTable(rows: Vec<GameDataRow>) -> Element {
    let mut ordered = use_signal(|| rows.clone());
    let mut sorted_by = use_signal(|| Option::<Column>::None);

    let model = ordered.with(|rows| TableModel::build(rows, &Column::ALL));
    let active = sorted_by();

    rsx! {
        table { class: "table table-condensed table-striped session-table",
            thead {
                tr {
                    for column in Column::ALL {
                        th {
                            key: "{column.key()}",
                            class: format!(
                                "session-table__header {}",
                                if active == Some(column) { "session-table__header--sorted" } else { "" }
                            ),
                            onclick: move |_| {
                                debug!(column = column.key(), "sorting session table");
                                ordered.with_mut(|rows| sort_rows(rows, column));
                                sorted_by.set(Some(column));
                            },
                            "{column.key()}"
                        }
                    }
                }
            }
            tbody {
                for row in model.body.into_iter() {
                    tr { key: "{row.id}", class: "session-table__row",
                        for cell in row.cells.into_iter() {
                            td { "{cell}" }
                        }
                    }
                }
            }
        }
    }
}
