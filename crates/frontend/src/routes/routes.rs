use contracts::domain::a011_sale::form::SaleMode;
use contracts::domain::a014_payment::aggregate::TransactionType;
use contracts::system::navigation::find_section;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_agency::ui::{details::AgencyDetails, list::AgencyList};
use crate::domain::a002_warehouse::ui::{details::WarehouseDetails, list::WarehouseList};
use crate::domain::a003_category::ui::{details::CategoryDetails, list::CategoryList};
use crate::domain::a004_batch::ui::{details::BatchDetails, list::BatchList};
use crate::domain::a005_product::ui::{details::ProductDetails, list::ProductList};
use crate::domain::a006_product_stock::ui::{damaged::DamagedStockPage, list::ProductStockList};
use crate::domain::a007_supplier::ui::{details::SupplierDetails, list::SupplierList};
use crate::domain::a008_client::ui::{details::ClientDetails, list::ClientList};
use crate::domain::a009_selling_channel::ui::{
    details::SellingChannelDetails, list::SellingChannelList,
};
use crate::domain::a010_purchase::ui::{details::PurchaseAdd, info::PurchaseInfo, list::PurchaseList};
use crate::domain::a011_sale::ui::{details::SaleDetails, info::SaleInfo, list::SaleList};
use crate::domain::a012_entry::ui::{add::EntryAdd, info::EntryInfo, list::EntryList};
use crate::domain::a013_output::ui::{add::OutputAdd, info::OutputInfo, list::OutputList};
use crate::domain::a014_payment::ui::{add::PaymentAdd, list::PaymentList};
use crate::layout::MainLayout;
use crate::system::agency::SelectAgencyPage;
use crate::system::auth::guard::RequirePermission;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::reports::ReportsPage;

/// Page of a sidebar section, shown only to users allowed to view it.
#[component]
fn SectionPage(section: &'static str, children: ChildrenFn) -> impl IntoView {
    match find_section(section).and_then(|s| s.permission) {
        Some(permission) => view! {
            <RequirePermission permission=permission>{children()}</RequirePermission>
        }
        .into_any(),
        None => children().into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="not-found">"Página no encontrada."</div> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/seleccionar_agencia") view=SelectAgencyPage />
                <ParentRoute path=path!("/principal") view=MainLayout>
                    <Route path=path!("dashboard") view=DashboardPage />

                    <Route path=path!("agencias") view=|| view! { <SectionPage section="agencias"><AgencyList /></SectionPage> } />
                    <Route path=path!("agencias/agregar") view=|| view! { <SectionPage section="agencias"><AgencyDetails /></SectionPage> } />
                    <Route path=path!("agencias/editar/:id") view=|| view! { <SectionPage section="agencias"><AgencyDetails /></SectionPage> } />

                    <Route path=path!("almacenes") view=|| view! { <SectionPage section="almacenes"><WarehouseList /></SectionPage> } />
                    <Route path=path!("almacenes/agregar") view=|| view! { <SectionPage section="almacenes"><WarehouseDetails /></SectionPage> } />
                    <Route path=path!("almacenes/editar/:id") view=|| view! { <SectionPage section="almacenes"><WarehouseDetails /></SectionPage> } />

                    <Route path=path!("categorias") view=|| view! { <SectionPage section="categorias"><CategoryList /></SectionPage> } />
                    <Route path=path!("categorias/agregar") view=|| view! { <SectionPage section="categorias"><CategoryDetails /></SectionPage> } />
                    <Route path=path!("categorias/editar/:id") view=|| view! { <SectionPage section="categorias"><CategoryDetails /></SectionPage> } />

                    <Route path=path!("lotes") view=|| view! { <SectionPage section="lotes"><BatchList /></SectionPage> } />
                    <Route path=path!("lotes/agregar") view=|| view! { <SectionPage section="lotes"><BatchDetails /></SectionPage> } />
                    <Route path=path!("lotes/editar/:id") view=|| view! { <SectionPage section="lotes"><BatchDetails /></SectionPage> } />

                    <Route path=path!("productos") view=|| view! { <SectionPage section="productos"><ProductList /></SectionPage> } />
                    <Route path=path!("productos/agregar") view=|| view! { <SectionPage section="productos"><ProductDetails /></SectionPage> } />
                    <Route path=path!("productos/editar/:id") view=|| view! { <SectionPage section="productos"><ProductDetails /></SectionPage> } />

                    <Route path=path!("stock") view=|| view! { <SectionPage section="stock"><ProductStockList /></SectionPage> } />
                    <Route path=path!("stock/danado/:id") view=|| view! { <SectionPage section="stock"><DamagedStockPage /></SectionPage> } />

                    <Route path=path!("proveedores") view=|| view! { <SectionPage section="proveedores"><SupplierList /></SectionPage> } />
                    <Route path=path!("proveedores/agregar") view=|| view! { <SectionPage section="proveedores"><SupplierDetails /></SectionPage> } />
                    <Route path=path!("proveedores/editar/:id") view=|| view! { <SectionPage section="proveedores"><SupplierDetails /></SectionPage> } />

                    <Route path=path!("clientes") view=|| view! { <SectionPage section="clientes"><ClientList /></SectionPage> } />
                    <Route path=path!("clientes/agregar") view=|| view! { <SectionPage section="clientes"><ClientDetails /></SectionPage> } />
                    <Route path=path!("clientes/editar/:id") view=|| view! { <SectionPage section="clientes"><ClientDetails /></SectionPage> } />

                    <Route path=path!("canales-venta") view=|| view! { <SectionPage section="canales-venta"><SellingChannelList /></SectionPage> } />
                    <Route path=path!("canales-venta/agregar") view=|| view! { <SectionPage section="canales-venta"><SellingChannelDetails /></SectionPage> } />
                    <Route path=path!("canales-venta/editar/:id") view=|| view! { <SectionPage section="canales-venta"><SellingChannelDetails /></SectionPage> } />

                    <Route path=path!("compras") view=|| view! { <SectionPage section="compras"><PurchaseList /></SectionPage> } />
                    <Route path=path!("compras/agregar") view=|| view! { <SectionPage section="compras"><PurchaseAdd /></SectionPage> } />
                    <Route path=path!("compras/info/:id") view=|| view! { <SectionPage section="compras"><PurchaseInfo /></SectionPage> } />
                    <Route path=path!("compras/agregar_entrada/:id") view=|| view! { <SectionPage section="entradas"><EntryAdd /></SectionPage> } />
                    <Route path=path!("compras/agregar_pago/:id") view=|| view! { <SectionPage section="pagos"><PaymentAdd transaction_type=TransactionType::Compra /></SectionPage> } />

                    <Route path=path!("ventas") view=|| view! { <SectionPage section="ventas"><SaleList /></SectionPage> } />
                    <Route path=path!("ventas/agregar") view=|| view! { <SectionPage section="ventas"><SaleDetails sale_mode=SaleMode::Proforma /></SectionPage> } />
                    <Route path=path!("ventas/editar/:id") view=|| view! { <SectionPage section="ventas"><SaleDetails sale_mode=SaleMode::Edit /></SectionPage> } />
                    <Route path=path!("ventas/realizar/:id") view=|| view! { <SectionPage section="ventas"><SaleDetails sale_mode=SaleMode::Perform /></SectionPage> } />
                    <Route path=path!("ventas/info/:id") view=|| view! { <SectionPage section="ventas"><SaleInfo /></SectionPage> } />
                    <Route path=path!("ventas/agregar_salida/:id") view=|| view! { <SectionPage section="salidas"><OutputAdd /></SectionPage> } />
                    <Route path=path!("ventas/agregar_pago/:id") view=|| view! { <SectionPage section="pagos"><PaymentAdd transaction_type=TransactionType::Venta /></SectionPage> } />

                    <Route path=path!("pagos") view=|| view! { <SectionPage section="pagos"><PaymentList /></SectionPage> } />

                    <Route path=path!("entradas") view=|| view! { <SectionPage section="entradas"><EntryList /></SectionPage> } />
                    <Route path=path!("entradas/info/:id") view=|| view! { <SectionPage section="entradas"><EntryInfo /></SectionPage> } />

                    <Route path=path!("salidas") view=|| view! { <SectionPage section="salidas"><OutputList /></SectionPage> } />
                    <Route path=path!("salidas/info/:id") view=|| view! { <SectionPage section="salidas"><OutputInfo /></SectionPage> } />

                    <Route path=path!("reportes") view=ReportsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
