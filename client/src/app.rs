//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::alert::Alert;
use crate::components::nav::Nav;
use crate::pages::{
    categories::CategoriesPage, dashboard::DashboardPage, distributions::DistributionsPage,
    financial_years::FinancialYearsPage, grns::GrnsPage, institutes::InstitutesPage, invoices::InvoicesPage,
    items::ItemsPage, locations::LocationsPage, purchase_orders::PurchaseOrdersPage, quick_grns::QuickGrnsPage,
    quick_invoices::QuickInvoicesPage, reports::ReportsPage, returns::ReturnsPage, stock::StockPage,
    stock_entries::StockEntriesPage, units::UnitsPage, vendors::VendorsPage,
};
use crate::state::notice::NoticeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the notice context and lays every route out beside the
/// sidebar.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(NoticeState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/procura.css"/>
        <Title text="Procura"/>

        <Router>
            <div class="layout">
                <Nav/>
                <main class="layout__main">
                    <Alert/>
                    <Routes fallback=|| view! { <p class="page__missing">"Page not found."</p> }>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("vendors") view=VendorsPage/>
                        <Route path=StaticSegment("units") view=UnitsPage/>
                        <Route path=StaticSegment("categories") view=CategoriesPage/>
                        <Route path=StaticSegment("items") view=ItemsPage/>
                        <Route path=StaticSegment("institutes") view=InstitutesPage/>
                        <Route path=StaticSegment("locations") view=LocationsPage/>
                        <Route path=StaticSegment("financial-years") view=FinancialYearsPage/>
                        <Route path=StaticSegment("purchase-orders") view=PurchaseOrdersPage/>
                        <Route path=StaticSegment("grns") view=GrnsPage/>
                        <Route path=StaticSegment("invoices") view=InvoicesPage/>
                        <Route path=StaticSegment("distributions") view=DistributionsPage/>
                        <Route path=StaticSegment("returns") view=ReturnsPage/>
                        <Route path=StaticSegment("stock-entries") view=StockEntriesPage/>
                        <Route path=StaticSegment("quick-grns") view=QuickGrnsPage/>
                        <Route path=StaticSegment("quick-invoices") view=QuickInvoicesPage/>
                        <Route path=StaticSegment("stock") view=StockPage/>
                        <Route path=StaticSegment("reports") view=ReportsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
