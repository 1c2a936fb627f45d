//! End-to-end scenarios across the engine, exporter and codec.

use crate::fixtures::{employee_grid, scenarios};
use datagrid_codec::{decode_delimited, decode_structured, ExchangeFormat};
use datagrid_core::{DeletionTarget, GridError, PriorEditResolution, SortDirection};

fn names(grid: &datagrid_core::Grid) -> Vec<String> {
    grid.view_records()
        .iter()
        .map(|r| r.value("name").to_string())
        .collect()
}

#[test]
fn salary_sorts_numerically_in_both_directions() {
    let mut grid = scenarios::salary_grid(10);
    assert!(grid.sort("salary").unwrap());
    assert_eq!(names(&grid), ["Bob", "Alice"]);

    grid.sort("salary").unwrap();
    assert_eq!(
        grid.sort_state().map(|s| s.direction),
        Some(SortDirection::Desc)
    );
    assert_eq!(names(&grid), ["Alice", "Bob"]);
}

#[test]
fn search_ignores_case() {
    let mut grid = scenarios::salary_grid(10);
    grid.search("ali").unwrap();
    assert_eq!(names(&grid), ["Alice"]);
    grid.search("ALI").unwrap();
    assert_eq!(names(&grid), ["Alice"]);
}

#[test]
fn deleting_last_page_row_clamps_page() {
    let mut grid = scenarios::salary_grid(1);
    assert!(grid.go_to_page(2));
    let id = grid.page_ids()[0];
    grid.delete_row(id).unwrap();
    assert_eq!(grid.current_page(), 1);
    assert_eq!(grid.view_len(), 1);
    assert_eq!(grid.page_count(), 1);
}

#[test]
fn valid_commit_touches_one_cell() {
    let mut grid = employee_grid();
    let before = grid.data();
    let id = grid.record_ids()[1];
    grid.begin_edit(id, "office").unwrap();
    let outcome = grid.commit_edit("Osaka").unwrap();
    assert_eq!(outcome.previous, "Tokyo");

    let after = grid.data();
    for (i, (old, new)) in before.iter().zip(&after).enumerate() {
        if i == 1 {
            assert_eq!(new.value("office"), "Osaka");
            let mut expected = old.clone();
            expected.set("office", "Osaka");
            assert_eq!(*new, expected);
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn employee_workflow_exports_selection() {
    let mut grid = employee_grid();
    grid.search("tokyo").unwrap();
    grid.sort("salary").unwrap();
    assert_eq!(
        names(&grid),
        ["Airi Satou", "Garrett Winters", "Rhona Davidson"]
    );

    let view = grid.view_ids().to_vec();
    grid.toggle_select(view[2], true).unwrap();
    grid.toggle_select(view[0], true).unwrap();

    let csv = grid.export(ExchangeFormat::Delimited).unwrap();
    assert_eq!(
        csv,
        "\"ID\",\"Name\",\"Position\",\"Office\",\"Extension\",\"Start Date\",\"Salary\"\n\
         \"EMP005\",\"Airi Satou\",\"Accountant\",\"Tokyo\",\"5407\",\"2008/11/28\",\"$162,700\"\n\
         \"EMP008\",\"Rhona Davidson\",\"Integration Specialist\",\"Tokyo\",\"6200\",\"2010/10/14\",\"$327,900\""
    );

    let json = grid.export(ExchangeFormat::Structured).unwrap();
    let decoded = decode_structured(&json).unwrap();
    assert_eq!(decoded, grid.selected_records());
    assert_eq!(grid.stats().exports, 2);
}

#[test]
fn full_view_export_reads_back() {
    let grid = employee_grid();
    let csv = grid.export(ExchangeFormat::Delimited).unwrap();
    let decoded = decode_delimited(&csv).unwrap();
    assert_eq!(decoded.len(), 12);
    for (row, record) in decoded.iter().zip(grid.data()) {
        assert_eq!(row.value("ID"), record.value("id"));
        assert_eq!(row.value("Start Date"), record.value("startDate"));
        assert_eq!(row.value("Salary"), record.value("salary"));
    }
}

#[test]
fn added_row_is_edited_then_deleted_by_proposal() {
    let mut grid = employee_grid();
    grid.search("london").unwrap();

    let added = grid.add_row().unwrap();
    assert_eq!(added.display_id.as_deref(), Some("EMP013"));
    assert_eq!(added.editing.as_deref(), Some("name"));
    assert_eq!(grid.search_query(), "");
    assert_eq!(grid.page_ids()[0], added.id);

    let err = grid.commit_edit("Z").unwrap_err();
    assert!(matches!(err, GridError::ValidationFailed { .. }));
    assert_eq!(grid.record(added.id).unwrap().value("name"), "");

    grid.update_draft("Zoe Zed").unwrap();
    let other = grid.record_ids()[1];
    let prior = grid.begin_edit(other, "position").unwrap();
    assert!(matches!(prior, PriorEditResolution::Committed(_)));
    assert_eq!(grid.record(added.id).unwrap().value("name"), "Zoe Zed");

    let proposal = grid.propose_deletion(DeletionTarget::Row(added.id)).unwrap();
    assert_eq!(proposal.description, "Delete Zoe Zed?");
    assert_eq!(grid.confirm_deletion(&proposal).unwrap(), 1);
    assert_eq!(grid.len(), 12);
    assert!(grid.editing().is_some());
}

#[test]
fn deleting_record_under_edit_discards_edit() {
    let mut grid = employee_grid();
    let id = grid.record_ids()[0];
    grid.toggle_select(id, true).unwrap();
    grid.begin_edit(id, "name").unwrap();
    grid.update_draft("Someone Else").unwrap();

    let proposal = grid.propose_deletion(DeletionTarget::Selected).unwrap();
    assert_eq!(proposal.description, "Delete 1 selected row(s)?");
    grid.confirm_deletion(&proposal).unwrap();

    assert!(grid.editing().is_none());
    assert_eq!(grid.selected_count(), 0);
    assert!(grid.data().iter().all(|r| r.value("name") != "Someone Else"));
}
