//! Table of report rows.

#[cfg(test)]
#[path = "report_table_test.rs"]
mod report_table_test;

use leptos::prelude::*;
use reports::ReportRow;

/// One `<tr>` per row, in response order, under a fixed three-column header.
#[component]
pub fn ReportTable(rows: Vec<ReportRow>) -> impl IntoView {
    view! {
        <div class="report-table">
            <table class="report-table__table">
                <thead>
                    <tr>
                        <th>"Device"</th>
                        <th>"Report ID"</th>
                        <th>"Value"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let value = row.value_text();
                            view! {
                                <tr class="report-table__row">
                                    <td>{row.device}</td>
                                    <td>{row.report_id}</td>
                                    <td>{value}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
