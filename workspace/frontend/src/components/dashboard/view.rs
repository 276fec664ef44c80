use nogops::DashboardDefaults;
use yew::prelude::*;
use super::chart::SalesChart;
use super::orders::RecentOrders;
use super::stats::Stats;
use super::trending::TrendingList;
use crate::hooks::use_dashboard;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let store = use_dashboard(DashboardDefaults::sample);

    html! {
        <>
            <Stats
                total_orders={store.total_orders()}
                new_customers={store.new_customers()}
                total_sales={store.total_sales()}
            />

            <div class="grid grid-cols-[2fr_1fr] gap-4">
                <div class="bg-[rgba(255,255,255,0.85)] p-4 rounded-xl shadow-inner">
                    <SectionHeader title="Sales Analytics" />
                    <SalesChart dataset={store.chart_handle()} />
                </div>

                <div class="bg-[rgba(255,255,255,0.85)] p-4 rounded-xl shadow-inner flex flex-col">
                    <SectionHeader title="Trending Coffee" />
                    <TrendingList items={store.trending_handle()} />
                </div>
            </div>

            <div class="bg-[rgba(255,255,255,0.85)] p-4 rounded-xl shadow-inner">
                <SectionHeader title="Recent Order" />
                <RecentOrders orders={store.orders_handle()} />
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    title: AttrValue,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="flex items-center justify-between mb-3">
            <h3 class="font-semibold text-[#4b3b36]">{ props.title.clone() }</h3>
            <a class="text-sm text-[#8a756e] hover:underline">{"See all"}</a>
        </div>
    }
}
