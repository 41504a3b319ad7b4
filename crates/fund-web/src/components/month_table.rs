use leptos::prelude::*;
use shared::CONFIG;
use shared::record::Category;
use shared::view::MonthView;

/// One month's transaction table plus its balance summary block.
/// Rows are classed by category so contributions and disbursements pick up
/// distinct styling from the stylesheet.
#[component]
pub fn MonthBlock(month: MonthView) -> impl IntoView {
    let MonthView {
        label,
        rows,
        contributions,
        disbursements,
        net,
        cumulative,
        ..
    } = month;
    let amount_header = format!("Amount ({})", CONFIG.currency);

    view! {
        <div class="month-block mb-8">
            <table class="ledger-table w-full">
                <thead>
                    <tr>
                        <th colspan="5">"Transactions for " {label}</th>
                    </tr>
                    <tr>
                        <th>"Name"</th>
                        <th>"Date"</th>
                        <th>"Phone Number"</th>
                        <th>{amount_header}</th>
                        <th>"Items"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let row_class = match row.category {
                                Category::Contribution => "row-contribution",
                                Category::Disbursement => "row-disbursement",
                            };
                            view! {
                                <tr class=row_class>
                                    <td>{row.name}</td>
                                    <td>{row.date}</td>
                                    <td>{row.phone}</td>
                                    <td>{row.amount}</td>
                                    <td>{row.items}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>

            <div class="month-summary">
                <div>
                    <strong>"IN"</strong> "  " {contributions} " " {CONFIG.currency}
                </div>
                <div>
                    <strong>"OUT"</strong> " " {disbursements} " " {CONFIG.currency}
                </div>
                <div>
                    <strong>"NET FOR MONTH"</strong> " " {net} " " {CONFIG.currency}
                </div>
                <div>
                    <strong>"BALANCE TO DATE"</strong> " " {cumulative} " " {CONFIG.currency}
                </div>
            </div>
        </div>
    }
}
