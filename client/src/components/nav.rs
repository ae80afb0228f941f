//! Sidebar navigation between record pages.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Sidebar groups: heading and `(label, href)` links.
pub const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    ("Overview", &[("Dashboard", "/"), ("Stock", "/stock"), ("Reports", "/reports")]),
    (
        "Purchasing",
        &[
            ("Purchase Orders", "/purchase-orders"),
            ("GRNs", "/grns"),
            ("Invoices", "/invoices"),
            ("Quick GRNs", "/quick-grns"),
            ("Quick Invoices", "/quick-invoices"),
        ],
    ),
    ("Inventory", &[("Distributions", "/distributions"), ("Returns", "/returns"), ("Stock Entries", "/stock-entries")]),
    (
        "Masters",
        &[
            ("Vendors", "/vendors"),
            ("Items", "/items"),
            ("Categories", "/categories"),
            ("Units", "/units"),
            ("Institutes", "/institutes"),
            ("Locations", "/locations"),
            ("Financial Years", "/financial-years"),
        ],
    ),
];

#[component]
pub fn Nav() -> impl IntoView {
    let pathname = use_location().pathname;

    let sections = SECTIONS
        .iter()
        .map(|(heading, links)| {
            let links = links
                .iter()
                .map(|&(label, href)| {
                    let active = move || pathname.with(|p| p == href);
                    view! {
                        <a class="nav__link" class:nav__link--active=active href=href>
                            {label}
                        </a>
                    }
                })
                .collect_view();
            view! {
                <div class="nav__section">
                    <h3 class="nav__heading">{*heading}</h3>
                    {links}
                </div>
            }
        })
        .collect_view();

    view! {
        <nav class="nav">
            <a class="nav__brand" href="/">
                "Procura"
            </a>
            {sections}
        </nav>
    }
}
