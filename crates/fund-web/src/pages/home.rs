use leptos::prelude::*;
use shared::CONFIG;

use crate::api::{FundData, fetch_fund_data};
use crate::components::{MonthBlock, Section};

#[component]
pub fn HomePage() -> impl IntoView {
    // Refetched on every page load; each cycle fully replaces the last
    let ledger = LocalResource::new(fetch_fund_data);

    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8 text-center">
                <h1 class="font-bold text-2xl">{CONFIG.name}</h1>
                <div class="text-[var(--ink-light)] mt-2">{CONFIG.tagline}</div>
            </header>

            <Section id="ledger" title="Monthly Ledger">
                <Suspense fallback=move || view! {
                    <div class="text-[var(--ink-light)]">"Loading ledger..."</div>
                }>
                    {move || {
                        ledger.get().map(|result| {
                            // Dereference SendWrapper to access inner Option
                            match &*result {
                                Some(data) => view! { <LedgerContent data=data.clone() /> }.into_any(),
                                None => view! {
                                    <div class="text-[var(--ink-light)]">
                                        "Ledger data is unavailable right now. Please try again later."
                                    </div>
                                }.into_any(),
                            }
                        })
                    }}
                </Suspense>
            </Section>
        </main>
    }
}

#[component]
fn LedgerContent(data: FundData) -> impl IntoView {
    let FundData { months, dropped } = data;
    let empty = months.is_empty();

    view! {
        {empty.then(|| view! {
            <div class="text-[var(--ink-light)]">"No transactions recorded yet."</div>
        })}

        {months
            .into_iter()
            .map(|month| view! { <MonthBlock month=month /> })
            .collect_view()}

        {(dropped > 0).then(|| view! {
            <div class="text-sm text-[var(--ink-light)]">
                {dropped} " record(s) were skipped because their date could not be read."
            </div>
        })}
    }
}
